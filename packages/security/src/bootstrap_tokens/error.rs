// ABOUTME: Error types for bootstrap token generation and validation
// ABOUTME: Format errors carry observed and expected values as named fields

use thiserror::Error;

pub type TokenResult<T> = Result<T, TokenError>;

#[derive(Error, Debug)]
pub enum TokenError {
    /// The OS random source could not supply the requested bytes
    #[error("failed to read from secure random source: {0}")]
    RandomSource(#[source] rand::Error),

    #[error("provided token is invalid - {0}")]
    InvalidFormat(#[from] FormatError),
}

impl TokenError {
    /// The format error, if this is a validation failure
    pub fn format_error(&self) -> Option<&FormatError> {
        match self {
            TokenError::InvalidFormat(e) => Some(e),
            TokenError::RandomSource(_) => None,
        }
    }
}

/// The reason a supplied token was rejected
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormatError {
    #[error("not in 2-part dot-separated format")]
    PartCount { parts: usize },

    #[error("length of first part is incorrect [{observed} (given) != {expected} (expected)]")]
    TokenIdLength { observed: usize, expected: usize },

    #[error("second part is not valid hex: {0}")]
    SecretEncoding(#[source] hex::FromHexError),

    #[error("length of second part is incorrect [{observed} (given) != {expected} (expected)]")]
    SecretLength { observed: usize, expected: usize },
}

/// Validation checks, in the order they run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationStage {
    Structure,
    TokenIdLength,
    SecretDecoding,
    SecretLength,
}

impl FormatError {
    pub fn stage(&self) -> ValidationStage {
        match self {
            FormatError::PartCount { .. } => ValidationStage::Structure,
            FormatError::TokenIdLength { .. } => ValidationStage::TokenIdLength,
            FormatError::SecretEncoding(_) => ValidationStage::SecretDecoding,
            FormatError::SecretLength { .. } => ValidationStage::SecretLength,
        }
    }
}
