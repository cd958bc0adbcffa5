//! Scrollback and input state for one visitor.

use crate::core::profile::Profile;
use crate::core::registry::{welcome_banner, Context, Effect, Registry};
use crate::core::theme::Theme;
#[cfg(feature = "vfs")]
use crate::core::vfs::{self, Tree};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub command: String,
    pub output: String,
    pub show_prompt: bool,
}

impl HistoryEntry {
    pub fn new(command: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            output: output.into(),
            show_prompt: true,
        }
    }

    pub fn blank() -> Self {
        Self::new("", "")
    }

    /// Output printed without a command line above it, e.g. the startup banner.
    pub fn bare(output: impl Into<String>) -> Self {
        Self {
            show_prompt: false,
            ..Self::new("", output)
        }
    }
}

/// Work the surrounding shell carries out after the submission completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeferredAction {
    OpenUrl { url: String, delay: Duration },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redraw {
    /// Only the newest entry needs printing.
    Append,
    /// The screen was cleared or recoloured; repaint everything.
    Full,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub redraw: Redraw,
    pub deferred: Option<DeferredAction>,
}

#[derive(Debug)]
pub struct Session {
    registry: Registry,
    profile: Profile,
    scrollback: Vec<HistoryEntry>,
    input: String,
    theme: Theme,
    open_delay: Duration,
    #[cfg(feature = "vfs")]
    tree: Tree,
    #[cfg(feature = "vfs")]
    cwd: Vec<String>,
}

impl Session {
    pub fn new(registry: Registry, profile: Profile, theme: Theme) -> Self {
        Self {
            registry,
            #[cfg(feature = "vfs")]
            tree: Tree::from_profile(&profile),
            #[cfg(feature = "vfs")]
            cwd: Vec::new(),
            profile,
            scrollback: Vec::new(),
            input: String::new(),
            theme,
            open_delay: Duration::from_millis(1000),
        }
    }

    pub fn with_open_delay(mut self, delay: Duration) -> Self {
        self.open_delay = delay;
        self
    }

    pub fn show_welcome(&mut self) {
        self.scrollback.push(HistoryEntry::bare(welcome_banner(&self.profile)));
    }

    pub fn scrollback(&self) -> &[HistoryEntry] {
        &self.scrollback
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Prompt text, including the working directory when browsing the tree.
    pub fn prompt(&self) -> String {
        #[cfg(feature = "vfs")]
        let cwd = vfs::display_path(&self.cwd);
        #[cfg(not(feature = "vfs"))]
        let cwd = "~";
        format!("{}:{}$", self.profile.prompt_identity(), cwd)
    }

    /// Submits whatever is in the input buffer.
    pub fn submit_input(&mut self) -> Outcome {
        let line = std::mem::take(&mut self.input);
        self.submit(&line)
    }

    pub fn submit(&mut self, line: &str) -> Outcome {
        self.input.clear();
        let raw = line.trim();
        if raw.is_empty() {
            self.scrollback.push(HistoryEntry::blank());
            return Outcome {
                redraw: Redraw::Append,
                deferred: None,
            };
        }

        let tokens: Vec<&str> = raw.split_whitespace().collect();
        let (name, args) = (tokens[0], &tokens[1..]);
        let ctx = Context {
            profile: &self.profile,
            theme: &self.theme,
            #[cfg(feature = "vfs")]
            tree: &self.tree,
            #[cfg(feature = "vfs")]
            cwd: &self.cwd,
        };
        let dispatch = match self.registry.dispatch(raw, name, args, &ctx) {
            Ok(dispatch) => dispatch,
            Err(not_found) => {
                self.scrollback.push(HistoryEntry::new(raw, not_found.to_string()));
                return Outcome {
                    redraw: Redraw::Append,
                    deferred: None,
                };
            }
        };

        let mut redraw = Redraw::Append;
        let mut deferred = None;
        match dispatch.effect {
            Some(Effect::Clear) => {
                self.scrollback.clear();
                return Outcome {
                    redraw: Redraw::Full,
                    deferred: None,
                };
            }
            Some(Effect::SetTheme(theme)) => {
                log::info!("theme changed from {} to {}", self.theme.name, theme.name);
                self.theme = theme;
                redraw = Redraw::Full;
            }
            Some(Effect::Navigate { url }) => {
                deferred = Some(DeferredAction::OpenUrl {
                    url,
                    delay: self.open_delay,
                });
            }
            #[cfg(feature = "vfs")]
            Some(Effect::ChangeDir(path)) => self.cwd = path,
            None => {}
        }

        self.scrollback
            .push(HistoryEntry::new(raw, dispatch.output.unwrap_or_default()));
        Outcome { redraw, deferred }
    }
}
