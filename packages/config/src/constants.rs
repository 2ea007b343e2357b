// ABOUTME: Environment variable name constants
// ABOUTME: Centralized definitions of all environment variable names used across nodejoin

// Token Configuration
pub const NODEJOIN_TOKEN: &str = "NODEJOIN_TOKEN";
pub const NODEJOIN_PARAMS_FILE: &str = "NODEJOIN_PARAMS_FILE";

// Logging
pub const NODEJOIN_LOG: &str = "NODEJOIN_LOG";
pub const RUST_LOG: &str = "RUST_LOG"; // Fallback

/// Log filter used when neither logging variable is set
pub const DEFAULT_LOG_FILTER: &str = "warn";
