// ABOUTME: Bootstrap token value types
// ABOUTME: Token ID is public, the bearer secret is masked in debug output

use nodejoin_core::DiscoveryParams;
use std::fmt;
use std::str::FromStr;
use subtle::ConstantTimeEq;

use super::codec::parse_given_token;
use super::error::TokenError;
use super::{TOKEN_BYTES, TOKEN_SEPARATOR};

/// Random bytes together with their lowercase hex encoding
#[derive(Clone, PartialEq, Eq)]
pub struct RandomBytes {
    pub bytes: Vec<u8>,
    pub hex: String,
}

impl fmt::Debug for RandomBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RandomBytes([{} bytes])", self.bytes.len())
    }
}

/// A validated bootstrap token.
///
/// Holds the token ID, the bearer secret in hex form and the raw secret
/// bytes. Values are only built by generation or by a successful parse, so
/// the ID is always `TOKEN_ID_LEN` characters and the secret always decodes
/// to `TOKEN_BYTES` bytes.
#[derive(Clone, PartialEq, Eq)]
pub struct BootstrapToken {
    token_id: String,
    bearer_token: String,
    token: [u8; TOKEN_BYTES],
}

impl BootstrapToken {
    pub(crate) fn from_parts(
        token_id: String,
        bearer_token: String,
        token: [u8; TOKEN_BYTES],
    ) -> Self {
        Self {
            token_id,
            bearer_token,
            token,
        }
    }

    pub fn token_id(&self) -> &str {
        &self.token_id
    }

    /// Bearer secret as lowercase hex
    pub fn bearer_token(&self) -> &str {
        &self.bearer_token
    }

    /// Raw bytes behind the bearer secret
    pub fn token_bytes(&self) -> &[u8] {
        &self.token
    }

    /// Combined `<token-id>.<bearer-secret>` form
    pub fn given_token(&self) -> String {
        format!("{}{}{}", self.token_id, TOKEN_SEPARATOR, self.bearer_token)
    }

    /// Compare raw secret bytes in constant time
    pub fn verify_secret(&self, candidate: &[u8]) -> bool {
        self.token.as_slice().ct_eq(candidate).into()
    }

    /// Write all four token fields into a discovery record
    pub fn apply_to(&self, params: &mut DiscoveryParams) {
        params.token_id = self.token_id.clone();
        params.bearer_token = self.bearer_token.clone();
        params.token = self.token.to_vec();
        params.given_token = self.given_token();
    }
}

impl fmt::Debug for BootstrapToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BootstrapToken")
            .field("token_id", &self.token_id)
            .field("bearer_token", &"****")
            .finish()
    }
}

/// Strict parse: an empty string is a format error here, not "no token"
impl FromStr for BootstrapToken {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_given_token(s).map_err(TokenError::from)
    }
}
