//! Canonicalization of a payload into digest input.
//!
//! The gateway signs a notification by:
//!
//! 1. taking every top-level field as a `(name, text)` pair,
//! 2. dropping `Receipt`, `Data` and `Token` (matched without regard to ASCII case),
//! 3. adding the shared secret as the pair `("Password", secret)`,
//! 4. sorting the pairs by name, byte-wise,
//! 5. concatenating the values with no separator.
//!
//! Names never appear in the output; only their order matters.

use std::iter;

use zeroize::Zeroizing;

use crate::payload::Payload;

/// Field carrying the claimed token.
pub const TOKEN_FIELD: &str = "Token";

/// Synthetic field the secret is injected under.
pub const PASSWORD_FIELD: &str = "Password";

/// Fields never covered by the digest.
pub const EXCLUDED_FIELDS: [&str; 3] = ["Receipt", "Data", TOKEN_FIELD];

/// A field name with its stringified value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldPair {
    name: String,
    value: String,
}

impl FieldPair {
    /// Create a new pair.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Field name, case preserved.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Stringified field value.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// One pair per top-level payload entry, in enumeration order.
pub fn extract_field_pairs(payload: &Payload) -> Vec<FieldPair> {
    payload
        .iter()
        .map(|(name, value)| FieldPair::new(name, value.canonical_text()))
        .collect()
}

/// Returns true if the field never takes part in the digest.
///
/// ```
/// use paytoken_lib::canonical::is_excluded;
///
/// assert!(is_excluded("Receipt"));
/// assert!(is_excluded("TOKEN"));
/// assert!(!is_excluded("OrderId"));
/// ```
pub fn is_excluded(name: &str) -> bool {
    EXCLUDED_FIELDS
        .iter()
        .any(|excluded| excluded.eq_ignore_ascii_case(name))
}

/// Build the digest input from extracted pairs and the secret.
///
/// A literal `Password` pair in `pairs` is overwritten by the secret. The
/// result holds the secret in clear, so it is wiped when dropped.
pub fn canonical_digest_input(pairs: &[FieldPair], secret: &str) -> Zeroizing<String> {
    let mut signed: Vec<(&str, &str)> = pairs
        .iter()
        .filter(|pair| !is_excluded(pair.name()) && pair.name() != PASSWORD_FIELD)
        .map(|pair| (pair.name(), pair.value()))
        .chain(iter::once((PASSWORD_FIELD, secret)))
        .collect();

    // Ordinal: byte order of the UTF-8 names, no case folding.
    signed.sort_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));

    // Sized up front so no partially filled copy of the secret is left behind
    // by a reallocation.
    let capacity = signed.iter().map(|(_, value)| value.len()).sum();
    let mut input = Zeroizing::new(String::with_capacity(capacity));
    for (_, value) in signed {
        input.push_str(value);
    }
    input
}
