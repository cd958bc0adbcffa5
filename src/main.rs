mod core;
mod services;
mod ui;

use clap::Parser;
use colored::*;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::core::{Config, FolioResult, Navigator, Registry, Session};
use crate::services::SystemOpener;
use crate::ui::terminal::FolioTerminal;

#[derive(Parser)]
#[command(name = "termfolio")]
#[command(about = "A personal portfolio that lives in your terminal")]
struct Cli {
    /// JSON file overriding the built-in profile and settings
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Theme to start with
    #[arg(long, value_name = "NAME")]
    theme: Option<String>,

    /// Skip the welcome banner
    #[arg(long)]
    no_welcome: bool,
}

async fn run(cli: Cli) -> FolioResult<()> {
    let path = cli
        .config
        .or_else(|| std::env::var_os("TERMFOLIO_CONFIG").map(PathBuf::from));
    let mut config = match path {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(theme) = cli.theme {
        config.theme = theme;
    }
    if cli.no_welcome {
        config.show_welcome = false;
    }

    let theme = config.resolve_theme()?;
    let mut session = Session::new(Registry::new(), config.profile, theme)
        .with_open_delay(Duration::from_millis(config.open_delay_ms));
    if config.show_welcome {
        session.show_welcome();
    }

    let navigator: Option<Arc<dyn Navigator>> = match SystemOpener::detect() {
        Some(opener) => {
            log::debug!("opening links with {}", opener.program().display());
            Some(Arc::new(opener) as Arc<dyn Navigator>)
        }
        None => {
            log::warn!("no URL handler found; 'open' will not launch anything");
            None
        }
    };

    let mut terminal = FolioTerminal::new(session, navigator)?;
    terminal.run().await
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}
