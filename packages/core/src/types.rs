// ABOUTME: Bootstrap parameter records owned by the joining process
// ABOUTME: Discovery fields carry the token ID, bearer secret and user-supplied token

use serde::Deserialize;
use std::fmt;

const MASK: &str = "****";

/// Parameters for bootstrapping a node into a cluster
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BootstrapParams {
    pub discovery: DiscoveryParams,
}

impl BootstrapParams {
    /// Parse parameters from a JSON document. Missing fields default to empty.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Token fields used during discovery.
///
/// `token` holds the raw bytes behind `bearer_token` and is never read from a
/// serialized document.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DiscoveryParams {
    pub token_id: String,
    pub bearer_token: String,
    #[serde(skip)]
    pub token: Vec<u8>,
    pub given_token: String,
}

impl DiscoveryParams {
    /// Params carrying only a user-supplied token
    pub fn with_given_token(given_token: impl Into<String>) -> Self {
        Self {
            given_token: given_token.into(),
            ..Self::default()
        }
    }

    /// True when a token ID and secret have been populated
    pub fn has_token(&self) -> bool {
        !self.token_id.is_empty() && !self.bearer_token.is_empty()
    }
}

// Secrets are never printed; only their presence shows up.
impl fmt::Debug for DiscoveryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiscoveryParams")
            .field("token_id", &self.token_id)
            .field("bearer_token", &mask_if_set(&self.bearer_token))
            .field("token", &format_args!("[{} bytes]", self.token.len()))
            .field("given_token", &mask_given_token(&self.given_token))
            .finish()
    }
}

fn mask_if_set(value: &str) -> &str {
    if value.is_empty() {
        ""
    } else {
        MASK
    }
}

/// Keep the public half of a `<id>.<secret>` string and hide the rest
pub fn mask_given_token(given: &str) -> String {
    match given.split_once('.') {
        Some((id, _)) => format!("{}.{}", id, MASK),
        None if given.is_empty() => String::new(),
        None => MASK.to_string(),
    }
}
