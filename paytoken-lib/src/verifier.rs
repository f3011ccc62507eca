//! Token generation and verification.
//!
//! [`TokenVerifier`] holds the shared secret and nothing else. Every call
//! rebuilds the canonical input from scratch, so a single instance can be
//! shared across threads without locking.

use serde_json::Value;
use subtle::ConstantTimeEq;

use crate::canonical::{canonical_digest_input, extract_field_pairs, FieldPair, TOKEN_FIELD};
use crate::digest::{is_token_shaped, sha256_hex};
use crate::payload::{FieldValue, Payload};
use crate::secret::SecretString;
use crate::{Result, TokenError};

/// Computes and checks gateway tokens under one shared secret.
///
/// # Example
///
/// ```
/// use paytoken_lib::{Payload, TokenVerifier};
///
/// let verifier = TokenVerifier::new("mySecret")?;
/// let payload = Payload::new().with("OrderId", "100").with("Success", true);
///
/// let signed = verifier.sign(&payload);
/// assert!(verifier.verify(&signed));
/// # Ok::<(), paytoken_lib::TokenError>(())
/// ```
#[derive(Clone, Debug)]
pub struct TokenVerifier {
    secret: SecretString,
}

impl TokenVerifier {
    /// Create a verifier. Fails with `InvalidArgument` if the secret is empty.
    pub fn new(secret: impl Into<SecretString>) -> Result<Self> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(TokenError::invalid_argument("secret", "must not be empty"));
        }
        Ok(Self { secret })
    }

    /// Create a verifier from a secret that may be absent.
    pub fn from_optional(secret: Option<&str>) -> Result<Self> {
        match secret {
            Some(secret) => Self::new(secret),
            None => Err(TokenError::invalid_argument("secret", "is required")),
        }
    }

    /// Compute the token for a payload.
    ///
    /// `Receipt`, `Data` and `Token` fields do not influence the result.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(fields = payload.len())))]
    pub fn compute_token(&self, payload: &Payload) -> String {
        self.token_for_pairs(&extract_field_pairs(payload))
    }

    /// Compute the token for a parsed JSON body.
    pub fn compute_token_json(&self, body: &Value) -> Result<String> {
        Ok(self.compute_token(&Payload::from_json(body)?))
    }

    /// Check the payload's own `Token` field against the computed token.
    ///
    /// A missing token, or one of the wrong shape, is a mismatch rather than
    /// an error. Hex case is ignored.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(fields = payload.len())))]
    pub fn verify(&self, payload: &Payload) -> bool {
        let pairs = extract_field_pairs(payload);
        let Some(claimed) = pairs.iter().find(|pair| pair.name() == TOKEN_FIELD) else {
            #[cfg(feature = "tracing")]
            tracing::debug!("payload carries no Token field");
            return false;
        };
        if !is_token_shaped(claimed.value()) {
            #[cfg(feature = "tracing")]
            tracing::debug!("claimed token is not a 64-digit hex string");
            return false;
        }

        let matched = tokens_match(claimed.value(), &self.token_for_pairs(&pairs));

        #[cfg(feature = "tracing")]
        tracing::debug!(matched, "token checked");

        matched
    }

    /// Check a parsed JSON body. Errors only if the body is not an object.
    pub fn verify_json(&self, body: &Value) -> Result<bool> {
        Ok(self.verify(&Payload::from_json(body)?))
    }

    /// Check a token delivered outside the payload, e.g. in a header.
    ///
    /// Any `Token` field inside the payload is ignored.
    pub fn verify_token(&self, payload: &Payload, claimed: &str) -> bool {
        is_token_shaped(claimed) && tokens_match(claimed, &self.compute_token(payload))
    }

    /// Copy of `payload` with its `Token` field set to the computed token.
    pub fn sign(&self, payload: &Payload) -> Payload {
        let mut signed = payload.clone();
        signed.insert(TOKEN_FIELD, FieldValue::String(self.compute_token(payload)));
        signed
    }

    fn token_for_pairs(&self, pairs: &[FieldPair]) -> String {
        let input = canonical_digest_input(pairs, self.secret.expose_secret());
        sha256_hex(&input)
    }
}

/// The claimed token as text, if the payload has a field named exactly `Token`.
pub fn extract_token(payload: &Payload) -> Option<String> {
    payload.get(TOKEN_FIELD).map(FieldValue::canonical_text)
}

/// Ordinal, ASCII case-insensitive comparison in constant time.
///
/// `computed` is always lowercase hex, so only `claimed` needs folding.
fn tokens_match(claimed: &str, computed: &str) -> bool {
    let claimed = claimed.to_ascii_lowercase();
    claimed.as_bytes().ct_eq(computed.as_bytes()).into()
}
