// ABOUTME: Security functionality for nodejoin
// ABOUTME: Provides bootstrap token generation, validation and secret handling

pub mod bootstrap_tokens;

// Re-export main types for convenience
pub use bootstrap_tokens::{
    generate_into, generate_token, use_given_token_if_valid, validate_given_token,
    BootstrapToken, FormatError, TokenError, TokenResult, TracingObserver, ValidationObserver,
    ValidationStage,
};
