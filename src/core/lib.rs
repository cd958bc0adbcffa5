use thiserror::Error;

/// Opens an external resource on behalf of the visitor.
#[async_trait::async_trait]
pub trait Navigator: Send + Sync {
    async fn navigate<'a>(&'a self, url: &'a str) -> FolioResult<()>;
}

#[derive(Debug, Error)]
pub enum FolioError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Navigation error: {0}")]
    Navigation(String),
    #[error("Input error: {0}")]
    Input(String),
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<rustyline::error::ReadlineError> for FolioError {
    fn from(err: rustyline::error::ReadlineError) -> Self {
        FolioError::Input(err.to_string())
    }
}

pub type FolioResult<T> = Result<T, FolioError>;

/// Raised when a name is not registered or a fixed-arity command gets the wrong
/// number of arguments. Shown inline, never propagated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("command not found: {input}")]
pub struct CommandNotFound {
    pub input: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_echoes_raw_input() {
        let err = CommandNotFound { input: "open a b".to_string() };
        assert_eq!(err.to_string(), "command not found: open a b");
    }

    #[test]
    fn errors_carry_their_kind() {
        let err = FolioError::Config("unknown theme 'x'".to_string());
        assert_eq!(err.to_string(), "Configuration error: unknown theme 'x'");

        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: FolioError = json_err.into();
        assert!(err.to_string().starts_with("Invalid JSON"));
    }
}
