use nodejoin_security::TokenError;
use thiserror::Error;

use crate::config::ConfigError;

pub type CliResult<T> = Result<T, CliError>;

/// Errors surfaced by CLI commands
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// True when the user supplied a malformed token
    pub fn is_invalid_token(&self) -> bool {
        matches!(self, CliError::Token(TokenError::InvalidFormat(_)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nodejoin_security::FormatError;

    #[test]
    fn test_token_error_is_transparent() {
        let err = CliError::from(TokenError::from(FormatError::PartCount { parts: 1 }));
        assert_eq!(
            err.to_string(),
            "provided token is invalid - not in 2-part dot-separated format"
        );
        assert!(err.is_invalid_token());
    }

    #[test]
    fn test_io_error_is_not_invalid_token() {
        let err = CliError::from(std::io::Error::other("broken pipe"));
        assert!(!err.is_invalid_token());
        assert!(err.to_string().contains("broken pipe"));
    }
}
