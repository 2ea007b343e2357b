// ABOUTME: Bootstrap token generation and validation
// ABOUTME: Generation draws from the OS CSPRNG, validation parses "<id>.<secret>"

use nodejoin_core::DiscoveryParams;
use rand::{rngs::OsRng, CryptoRng, RngCore};

use super::error::{FormatError, TokenError, TokenResult};
use super::observer::ValidationObserver;
use super::types::{BootstrapToken, RandomBytes};
use super::{TOKEN_BYTES, TOKEN_ID_BYTES, TOKEN_ID_LEN, TOKEN_SEPARATOR};

/// Draw `length` bytes from the operating system's secure random source
pub fn random_bytes(length: usize) -> TokenResult<RandomBytes> {
    random_bytes_with(&mut OsRng, length)
}

/// Draw `length` bytes from a cryptographically secure generator.
///
/// Failures are returned as-is; there is no retry and no fallback source.
pub fn random_bytes_with<R>(rng: &mut R, length: usize) -> TokenResult<RandomBytes>
where
    R: RngCore + CryptoRng + ?Sized,
{
    let mut bytes = vec![0u8; length];
    rng.try_fill_bytes(&mut bytes).map_err(TokenError::RandomSource)?;
    let hex = hex::encode(&bytes);
    Ok(RandomBytes { bytes, hex })
}

/// Generate a fresh bootstrap token from the OS random source
pub fn generate_token() -> TokenResult<BootstrapToken> {
    generate_token_with(&mut OsRng)
}

/// Generate a fresh bootstrap token from the given generator
pub fn generate_token_with<R>(rng: &mut R) -> TokenResult<BootstrapToken>
where
    R: RngCore + CryptoRng + ?Sized,
{
    let token_id = random_bytes_with(rng, TOKEN_ID_BYTES)?.hex;

    let mut token = [0u8; TOKEN_BYTES];
    rng.try_fill_bytes(&mut token).map_err(TokenError::RandomSource)?;
    let bearer_token = hex::encode(token);

    Ok(BootstrapToken::from_parts(token_id, bearer_token, token))
}

/// Generate a token and write it into `params`. `params` is untouched on error.
pub fn generate_into(params: &mut DiscoveryParams) -> TokenResult<BootstrapToken> {
    let token = generate_token()?;
    token.apply_to(params);
    Ok(token)
}

/// Validate a user-supplied token string.
///
/// Returns `Ok(None)` when `given` is empty: there is nothing to validate.
/// The observer, if any, is told that validation is starting.
pub fn validate_given_token(
    given: &str,
    observer: Option<&dyn ValidationObserver>,
) -> TokenResult<Option<BootstrapToken>> {
    if given.is_empty() {
        return Ok(None);
    }

    if let Some(observer) = observer {
        observer.validating();
    }

    Ok(Some(parse_given_token(given)?))
}

/// Validate `params.given_token` and, if it is valid, populate the token ID,
/// bearer token and raw bytes. Returns whether a token was supplied.
///
/// Nothing is written unless validation succeeds.
pub fn use_given_token_if_valid(
    params: &mut DiscoveryParams,
    observer: Option<&dyn ValidationObserver>,
) -> TokenResult<bool> {
    match validate_given_token(&params.given_token, observer)? {
        None => Ok(false),
        Some(token) => {
            params.token_id = token.token_id().to_string();
            params.bearer_token = token.bearer_token().to_string();
            params.token = token.token_bytes().to_vec();
            Ok(true)
        }
    }
}

/// Run the format checks in order; the first failure wins
pub(crate) fn parse_given_token(given: &str) -> Result<BootstrapToken, FormatError> {
    let normalized = given.to_lowercase();
    let parts: Vec<&str> = normalized.split(TOKEN_SEPARATOR).collect();

    let (token_id, secret) = match parts.as_slice() {
        [id, secret] if !id.is_empty() && !secret.is_empty() => (*id, *secret),
        _ => return Err(FormatError::PartCount { parts: parts.len() }),
    };

    if token_id.len() != TOKEN_ID_LEN {
        return Err(FormatError::TokenIdLength {
            observed: token_id.len(),
            expected: TOKEN_ID_LEN,
        });
    }

    let bytes = hex::decode(secret).map_err(FormatError::SecretEncoding)?;

    let token = secret_array(&bytes).ok_or(FormatError::SecretLength {
        observed: bytes.len(),
        expected: TOKEN_BYTES,
    })?;

    Ok(BootstrapToken::from_parts(
        token_id.to_string(),
        secret.to_string(),
        token,
    ))
}

fn secret_array(bytes: &[u8]) -> Option<[u8; TOKEN_BYTES]> {
    bytes.try_into().ok()
}
