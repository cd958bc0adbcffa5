use crate::core::lib::{FolioError, FolioResult};
use crate::core::theme::{Theme, DEFAULT_THEME};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Link {
    pub name: String,
    pub url: String,
}

/// Something `open <name>` knows how to reach.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Target {
    pub name: String,
    pub label: String,
    pub url: String,
}

/// The canned content every command draws its output from.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub owner: String,
    pub user: String,
    pub host: String,
    pub bio: String,
    pub email: String,
    pub projects: Vec<Project>,
    pub social: Vec<Link>,
    pub targets: Vec<Target>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            owner: "Aleck".to_string(),
            user: "visitor".to_string(),
            host: "alecksterminal.com".to_string(),
            bio: "Hello! I'm Aleck, a developer who likes building small, sharp tools.\n\
                  This site is a terminal: poke around with the commands below."
                .to_string(),
            email: "aleckshn@gmail.com".to_string(),
            projects: vec![
                Project {
                    name: "my-app".to_string(),
                    description: "Description of my-app".to_string(),
                },
                Project {
                    name: "cli-portfolio".to_string(),
                    description: "This CLI website you're using right now".to_string(),
                },
            ],
            social: vec![
                Link {
                    name: "github".to_string(),
                    url: "https://github.com/aleckshn".to_string(),
                },
                Link {
                    name: "linkedin".to_string(),
                    url: "https://www.linkedin.com/in/aleckshn".to_string(),
                },
            ],
            targets: vec![
                Target {
                    name: "aleck".to_string(),
                    label: "Aleck's personal website".to_string(),
                    url: "https://alecksterminal.com".to_string(),
                },
                Target {
                    name: "github".to_string(),
                    label: "Aleck's GitHub profile".to_string(),
                    url: "https://github.com/aleckshn".to_string(),
                },
                Target {
                    name: "linkedin".to_string(),
                    label: "Aleck's LinkedIn profile".to_string(),
                    url: "https://www.linkedin.com/in/aleckshn".to_string(),
                },
            ],
        }
    }
}

impl Profile {
    pub fn target(&self, name: &str) -> Option<&Target> {
        self.targets.iter().find(|t| t.name == name)
    }

    pub fn prompt_identity(&self) -> String {
        format!("{}@{}", self.user, self.host)
    }
}

/// Runtime settings, as read from an optional JSON file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub profile: Profile,
    pub theme: String,
    pub open_delay_ms: u64,
    pub show_welcome: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            profile: Profile::default(),
            theme: DEFAULT_THEME.to_string(),
            open_delay_ms: 1000,
            show_welcome: true,
        }
    }
}

impl Config {
    pub fn from_json(text: &str) -> FolioResult<Self> {
        let config: Config = serde_json::from_str(text)?;
        config.resolve_theme()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> FolioResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            FolioError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        log::debug!("loaded config from {}", path.display());
        Self::from_json(&text)
    }

    pub fn resolve_theme(&self) -> FolioResult<Theme> {
        Theme::find(&self.theme)
            .ok_or_else(|| FolioError::Config(format!("unknown theme '{}'", self.theme)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = Config::from_json(r#"{"theme": "shoom", "profile": {"owner": "Sam"}}"#)
            .unwrap();
        assert_eq!(config.theme, "shoom");
        assert_eq!(config.profile.owner, "Sam");
        assert_eq!(config.profile.email, "aleckshn@gmail.com");
        assert_eq!(config.open_delay_ms, 1000);
        assert!(config.show_welcome);
    }

    #[test]
    fn unknown_theme_is_rejected() {
        let err = Config::from_json(r#"{"theme": "nope"}"#).unwrap_err();
        assert!(matches!(err, FolioError::Config(_)));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(Config::from_json("{"), Err(FolioError::Json(_))));
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let err = Config::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, FolioError::Config(_)));
    }

    #[test]
    fn default_targets_include_aleck() {
        let profile = Profile::default();
        assert_eq!(profile.target("aleck").unwrap().label, "Aleck's personal website");
        assert!(profile.target("nope").is_none());
        assert_eq!(profile.prompt_identity(), "visitor@alecksterminal.com");
    }
}
