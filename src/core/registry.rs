//! Command registry: the fixed set of commands a visitor can run.
//!
//! Handlers are pure. Anything that must happen outside the returned text
//! (clearing the screen, switching palettes, opening a URL) comes back as an
//! [`Effect`] for the session to apply.

use crate::core::lib::CommandNotFound;
use crate::core::profile::Profile;
use crate::core::theme::Theme;
#[cfg(feature = "vfs")]
use crate::core::vfs::Tree;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    /// The handler checks its own arguments.
    Unbounded,
}

impl Arity {
    fn accepts(self, count: usize) -> bool {
        match self {
            Arity::Exact(n) => n == count,
            Arity::Unbounded => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Help,
    About,
    Projects,
    Open,
    Email,
    Social,
    Themes,
    Welcome,
    Clear,
    #[cfg(feature = "vfs")]
    Ls,
    #[cfg(feature = "vfs")]
    Cd,
    #[cfg(feature = "vfs")]
    Cat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub arity: Arity,
    pub command: Command,
}

impl Command {
    pub fn spec(self) -> CommandSpec {
        let (name, description, arity) = match self {
            Command::Help => ("help", "Show available commands", Arity::Exact(0)),
            Command::About => ("about", "Learn about me", Arity::Exact(0)),
            Command::Projects => ("projects", "See what I've been building", Arity::Exact(0)),
            Command::Open => ("open", "Open a link, e.g. 'open aleck'", Arity::Unbounded),
            Command::Email => ("email", "Get in touch", Arity::Exact(0)),
            Command::Social => ("social", "Find me elsewhere", Arity::Exact(0)),
            Command::Themes => ("themes", "List themes or 'themes set <name>'", Arity::Unbounded),
            Command::Welcome => ("welcome", "Show the welcome banner", Arity::Exact(0)),
            Command::Clear => ("clear", "Clear the screen", Arity::Exact(0)),
            #[cfg(feature = "vfs")]
            Command::Ls => ("ls", "List directory contents", Arity::Unbounded),
            #[cfg(feature = "vfs")]
            Command::Cd => ("cd", "Change directory", Arity::Unbounded),
            #[cfg(feature = "vfs")]
            Command::Cat => ("cat", "View file contents", Arity::Unbounded),
        };
        CommandSpec {
            name,
            description,
            arity,
            command: self,
        }
    }
}

/// What the session has to do besides printing output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Clear,
    SetTheme(Theme),
    Navigate { url: String },
    #[cfg(feature = "vfs")]
    ChangeDir(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Dispatch {
    pub output: Option<String>,
    pub effect: Option<Effect>,
}

impl Dispatch {
    fn text(output: impl Into<String>) -> Self {
        Self {
            output: Some(output.into()),
            effect: None,
        }
    }

    fn with_effect(mut self, effect: Effect) -> Self {
        self.effect = Some(effect);
        self
    }
}

/// Read-only view of session state handed to handlers.
pub struct Context<'a> {
    pub profile: &'a Profile,
    pub theme: &'a Theme,
    #[cfg(feature = "vfs")]
    pub tree: &'a Tree,
    #[cfg(feature = "vfs")]
    pub cwd: &'a [String],
}

#[derive(Debug)]
pub struct Registry {
    specs: Vec<CommandSpec>,
    index: HashMap<&'static str, usize>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    pub fn new() -> Self {
        #[allow(unused_mut)]
        let mut commands = vec![
            Command::Help,
            Command::About,
            Command::Projects,
            Command::Open,
            Command::Email,
            Command::Social,
            Command::Themes,
            Command::Welcome,
            Command::Clear,
        ];
        #[cfg(feature = "vfs")]
        commands.extend([Command::Ls, Command::Cd, Command::Cat]);

        let specs: Vec<CommandSpec> = commands.into_iter().map(Command::spec).collect();
        let index = specs
            .iter()
            .enumerate()
            .map(|(i, spec)| (spec.name, i))
            .collect();
        Self { specs, index }
    }

    /// Exact, case-sensitive lookup.
    pub fn resolve(&self, name: &str) -> Option<&CommandSpec> {
        self.index.get(name).map(|&i| &self.specs[i])
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.specs.iter().map(|spec| spec.name)
    }

    /// Runs `name` with `args`. A fixed-arity command called with the wrong
    /// number of arguments is reported exactly like an unknown name.
    pub fn dispatch(
        &self,
        raw: &str,
        name: &str,
        args: &[&str],
        ctx: &Context,
    ) -> Result<Dispatch, CommandNotFound> {
        let not_found = || CommandNotFound {
            input: raw.to_string(),
        };
        let spec = self.resolve(name).ok_or_else(not_found)?;
        if !spec.arity.accepts(args.len()) {
            log::debug!("arity mismatch for '{}': got {} args", name, args.len());
            return Err(not_found());
        }
        log::debug!("dispatching '{}' with {:?}", name, args);
        Ok(self.execute(spec.command, args, ctx))
    }

    fn execute(&self, command: Command, args: &[&str], ctx: &Context) -> Dispatch {
        let profile = ctx.profile;
        match command {
            Command::Help => Dispatch::text(self.help()),
            Command::About => Dispatch::text(profile.bio.clone()),
            Command::Projects => Dispatch::text(projects(profile)),
            Command::Open => open(profile, args),
            Command::Email => Dispatch::text(format!(
                "You can reach me at {}\nI usually reply within a couple of days.",
                profile.email
            )),
            Command::Social => Dispatch::text(social(profile)),
            Command::Themes => themes(ctx.theme, args),
            Command::Welcome => Dispatch::text(welcome_banner(profile)),
            Command::Clear => Dispatch::default().with_effect(Effect::Clear),
            #[cfg(feature = "vfs")]
            Command::Ls => Dispatch::text(ctx.tree.ls(ctx.cwd)),
            #[cfg(feature = "vfs")]
            Command::Cd => match ctx.tree.cd(ctx.cwd, args) {
                Ok(path) => Dispatch::default().with_effect(Effect::ChangeDir(path)),
                Err(msg) => Dispatch::text(msg),
            },
            #[cfg(feature = "vfs")]
            Command::Cat => Dispatch::text(ctx.tree.cat(ctx.cwd, args)),
        }
    }

    fn help(&self) -> String {
        self.specs
            .iter()
            .map(|spec| format!("{} - {}", spec.name, spec.description))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

pub fn welcome_banner(profile: &Profile) -> String {
    format!(
        "Welcome to {}'s terminal!\n\
         Type 'help' to see a list of available commands, or 'exit' to leave.",
        profile.owner
    )
}

fn projects(profile: &Profile) -> String {
    if profile.projects.is_empty() {
        return "Nothing to show yet. Check back soon!".to_string();
    }
    let width = profile.projects.iter().map(|p| p.name.len()).max().unwrap_or(0);
    let mut lines = vec!["Projects:".to_string()];
    lines.extend(
        profile
            .projects
            .iter()
            .map(|p| format!("  {:width$}  {}", p.name, p.description, width = width)),
    );
    lines.join("\n")
}

fn social(profile: &Profile) -> String {
    let width = profile.social.iter().map(|l| l.name.len()).max().unwrap_or(0);
    let mut lines = vec!["Find me online:".to_string()];
    lines.extend(
        profile
            .social
            .iter()
            .map(|l| format!("  {:width$}  {}", l.name, l.url, width = width)),
    );
    lines.join("\n")
}

fn open(profile: &Profile, args: &[&str]) -> Dispatch {
    match args {
        [] => Dispatch::text("open: missing target. Usage: open <name>"),
        [name] => match profile.target(name) {
            Some(target) => Dispatch::text(format!("Opening {}...", target.label)).with_effect(
                Effect::Navigate {
                    url: target.url.clone(),
                },
            ),
            None => Dispatch::text(format!("Unknown target: {}", name)),
        },
        _ => Dispatch::text("open: too many arguments. Usage: open <name>"),
    }
}

fn themes(current: &Theme, args: &[&str]) -> Dispatch {
    match args {
        [] => {
            let mut lines = vec!["Available themes:".to_string()];
            lines.extend(Theme::all().iter().map(|t| {
                let marker = if t.name == current.name { "*" } else { " " };
                format!(" {} {}", marker, t.name)
            }));
            lines.push("Use 'themes set <name>' to switch.".to_string());
            Dispatch::text(lines.join("\n"))
        }
        ["set", name] => match Theme::find(name) {
            Some(theme) => Dispatch::text(format!("Theme set to {}.", theme.name))
                .with_effect(Effect::SetTheme(theme)),
            None => Dispatch::text(format!("Theme not found: {}", name)),
        },
        _ => Dispatch::text("Usage: themes [set <name>]"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixture {
        registry: Registry,
        profile: Profile,
        theme: Theme,
        #[cfg(feature = "vfs")]
        tree: Tree,
    }

    impl Fixture {
        fn new() -> Self {
            let profile = Profile::default();
            Self {
                registry: Registry::new(),
                #[cfg(feature = "vfs")]
                tree: Tree::from_profile(&profile),
                profile,
                theme: Theme::default(),
            }
        }

        fn run(&self, raw: &str) -> Result<Dispatch, CommandNotFound> {
            let tokens: Vec<&str> = raw.split_whitespace().collect();
            let ctx = Context {
                profile: &self.profile,
                theme: &self.theme,
                #[cfg(feature = "vfs")]
                tree: &self.tree,
                #[cfg(feature = "vfs")]
                cwd: &[],
            };
            self.registry.dispatch(raw, tokens[0], &tokens[1..], &ctx)
        }

        fn output(&self, raw: &str) -> String {
            self.run(raw).unwrap().output.unwrap_or_default()
        }
    }

    #[test]
    fn resolve_is_exact_and_case_sensitive() {
        let registry = Registry::new();
        assert_eq!(registry.resolve("help").map(|s| s.command), Some(Command::Help));
        assert!(registry.resolve("Help").is_none());
        assert!(registry.resolve("hel").is_none());
    }

    #[test]
    fn help_lists_every_command() {
        let out = Fixture::new().output("help");
        assert!(out.contains("about - Learn about me"));
        assert!(out.contains("projects"));
        assert!(out.contains("clear - Clear the screen"));
        assert_eq!(out.lines().count(), Registry::new().names().count());
    }

    #[test]
    fn unknown_command_echoes_raw_input() {
        let err = Fixture::new().run("sudo make me a sandwich").unwrap_err();
        assert_eq!(err.to_string(), "command not found: sudo make me a sandwich");
    }

    #[cfg(not(feature = "vfs"))]
    #[test]
    fn ls_is_unknown_without_vfs() {
        assert_eq!(Fixture::new().run("ls").unwrap_err().to_string(), "command not found: ls");
    }

    #[test]
    fn fixed_arity_mismatch_reads_as_not_found() {
        let err = Fixture::new().run("about me").unwrap_err();
        assert_eq!(err.to_string(), "command not found: about me");
        assert!(Fixture::new().run("clear now").is_err());
    }

    #[test]
    fn static_commands_use_profile() {
        let fx = Fixture::new();
        assert_eq!(fx.output("about"), fx.profile.bio);
        assert!(fx.output("email").contains("aleckshn@gmail.com"));
        assert!(fx.output("projects").contains("cli-portfolio"));
        assert!(fx.output("social").contains("https://github.com/aleckshn"));
        assert_eq!(fx.output("welcome"), welcome_banner(&fx.profile));
        assert!(fx.output("welcome").contains("'exit' to leave"));
    }

    #[test]
    fn open_known_target_navigates() {
        let dispatch = Fixture::new().run("open aleck").unwrap();
        assert_eq!(dispatch.output.as_deref(), Some("Opening Aleck's personal website..."));
        assert_eq!(
            dispatch.effect,
            Some(Effect::Navigate {
                url: "https://alecksterminal.com".to_string()
            })
        );
    }

    #[test]
    fn open_validates_its_own_arguments() {
        let fx = Fixture::new();
        assert_eq!(fx.output("open nowhere"), "Unknown target: nowhere");
        assert!(fx.output("open").starts_with("open: missing target"));
        assert!(fx.output("open a b").starts_with("open: too many arguments"));
        assert!(fx.run("open nowhere").unwrap().effect.is_none());
    }

    #[test]
    fn themes_list_and_set() {
        let fx = Fixture::new();
        let list = fx.output("themes");
        assert!(list.contains("* default"));
        assert!(list.contains("shoom"));

        let set = fx.run("themes set shoom").unwrap();
        assert_eq!(set.output.as_deref(), Some("Theme set to shoom."));
        assert_eq!(set.effect, Theme::find("shoom").map(Effect::SetTheme));

        let missing = fx.run("themes set nope").unwrap();
        assert_eq!(missing.output.as_deref(), Some("Theme not found: nope"));
        assert!(missing.effect.is_none());

        assert_eq!(fx.output("themes paint"), "Usage: themes [set <name>]");
    }

    #[test]
    fn clear_has_no_output() {
        let dispatch = Fixture::new().run("clear").unwrap();
        assert!(dispatch.output.is_none());
        assert_eq!(dispatch.effect, Some(Effect::Clear));
    }

    #[cfg(feature = "vfs")]
    #[test]
    fn vfs_commands_are_registered() {
        let fx = Fixture::new();
        assert_eq!(fx.output("ls"), "about  projects  contact");
        assert_eq!(
            fx.run("cd projects").unwrap().effect,
            Some(Effect::ChangeDir(vec!["projects".to_string()]))
        );
        assert_eq!(fx.output("cat nope"), "cat: no such file: nope");
    }
}
