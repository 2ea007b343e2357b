// ABOUTME: Bootstrap token module for joining nodes to a cluster
// ABOUTME: Token format is "<token-id>.<bearer-secret>", both parts lowercase hex

pub mod codec;
pub mod error;
pub mod observer;
pub mod types;

pub use codec::{
    generate_into, generate_token, generate_token_with, random_bytes, random_bytes_with,
    use_given_token_if_valid, validate_given_token,
};
pub use error::{FormatError, TokenError, TokenResult, ValidationStage};
pub use observer::{TracingObserver, ValidationObserver};
pub use types::{BootstrapToken, RandomBytes};

/// Length of the public token ID in hex characters
pub const TOKEN_ID_LEN: usize = 6;

/// Random bytes drawn for the token ID
pub const TOKEN_ID_BYTES: usize = TOKEN_ID_LEN / 2;

/// Length of the bearer secret in raw bytes
pub const TOKEN_BYTES: usize = 8;

/// Length of the bearer secret in hex characters
pub const TOKEN_SECRET_HEX_LEN: usize = TOKEN_BYTES * 2;

/// Separator between the token ID and the bearer secret
pub const TOKEN_SEPARATOR: char = '.';

// Hex encoding yields two characters per byte.
const _: () = assert!(TOKEN_ID_LEN % 2 == 0, "TOKEN_ID_LEN must be even");
