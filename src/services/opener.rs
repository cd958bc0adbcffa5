use crate::core::lib::{FolioError, FolioResult, Navigator};
use std::env;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;
use which::which;

/// URL handlers tried in order when `$BROWSER` is not set.
const CANDIDATES: &[&str] = &["xdg-open", "open", "wslview"];

#[derive(Debug, Clone)]
pub struct SystemOpener {
    program: PathBuf,
    timeout: Duration,
}

impl SystemOpener {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            timeout: Duration::from_secs(2),
        }
    }

    /// Finds a URL handler on this machine, preferring `$BROWSER`.
    pub fn detect() -> Option<Self> {
        let from_env = env::var("BROWSER")
            .ok()
            .filter(|b| !b.trim().is_empty())
            .and_then(|b| which(b.trim()).ok());
        from_env
            .or_else(|| CANDIDATES.iter().find_map(|c| which(c).ok()))
            .map(Self::new)
    }

    pub fn program(&self) -> &PathBuf {
        &self.program
    }
}

#[async_trait::async_trait]
impl Navigator for SystemOpener {
    async fn navigate<'a>(&'a self, url: &'a str) -> FolioResult<()> {
        let mut child = Command::new(&self.program)
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| {
                FolioError::Navigation(format!(
                    "failed to launch {}: {}",
                    self.program.display(),
                    e
                ))
            })?;

        // A handler still running after the window is a browser that stayed open.
        let status = match timeout(self.timeout, child.wait()).await {
            Ok(result) => result.map_err(|e| {
                FolioError::Navigation(format!("{}: {}", self.program.display(), e))
            })?,
            Err(_) => {
                log::info!(
                    "{} still running after {:?}, leaving it open",
                    self.program.display(),
                    self.timeout
                );
                return Ok(());
            }
        };

        if status.success() {
            log::info!("opened {} with {}", url, self.program.display());
            Ok(())
        } else {
            Err(FolioError::Navigation(format!(
                "{} exited with code {}",
                self.program.display(),
                status.code().unwrap_or(-1)
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[tokio::test]
    async fn successful_handler_is_ok() {
        let opener = SystemOpener::new(which("true").unwrap());
        assert!(opener.navigate("https://alecksterminal.com").await.is_ok());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn failing_handler_is_a_navigation_error() {
        let opener = SystemOpener::new(which("false").unwrap());
        let err = opener.navigate("https://alecksterminal.com").await.unwrap_err();
        assert!(matches!(err, FolioError::Navigation(_)));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn long_running_handler_counts_as_opened() {
        let opener = SystemOpener {
            program: which("sleep").unwrap(),
            timeout: Duration::from_millis(300),
        };
        let started = std::time::Instant::now();
        // `sleep` treats the argument as seconds, standing in for a browser that stays open.
        assert!(opener.navigate("5").await.is_ok());
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[tokio::test]
    async fn missing_program_is_a_navigation_error() {
        let opener = SystemOpener::new("/no/such/url-handler");
        let err = opener.navigate("https://alecksterminal.com").await.unwrap_err();
        assert!(err.to_string().contains("failed to launch"));
    }
}
