//! Property-based tests for paytoken-lib
//!
//! These tests use proptest to check the token invariants across arbitrary payloads.

use std::collections::BTreeMap;

use paytoken_lib::canonical::is_excluded;
use paytoken_lib::{Payload, TokenVerifier};
use proptest::prelude::*;

/// Unique field names mapped to printable values.
fn fields() -> impl Strategy<Value = BTreeMap<String, String>> {
    prop::collection::btree_map("[A-Za-z][A-Za-z0-9]{0,11}", "[ -~]{0,16}", 0..12)
}

fn secret() -> impl Strategy<Value = String> {
    "[ -~]{1,24}"
}

/// One of the excluded names with arbitrary ASCII casing.
fn excluded_name() -> impl Strategy<Value = String> {
    (
        prop::sample::select(vec!["Receipt", "Data", "Token"]),
        prop::collection::vec(any::<bool>(), 7),
    )
        .prop_map(|(name, upper)| {
            name.chars()
                .zip(upper)
                .map(|(c, up)| {
                    if up {
                        c.to_ascii_uppercase()
                    } else {
                        c.to_ascii_lowercase()
                    }
                })
                .collect::<String>()
        })
}

fn payload_of<'a>(entries: impl Iterator<Item = (&'a String, &'a String)>) -> Payload {
    entries
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}

proptest! {
    /// Same payload and secret always give the same token
    #[test]
    fn token_is_deterministic(fields in fields(), secret in secret()) {
        let verifier = TokenVerifier::new(secret).unwrap();
        let payload = payload_of(fields.iter());

        prop_assert_eq!(verifier.compute_token(&payload), verifier.compute_token(&payload.clone()));
    }

    /// Field enumeration order never affects the token
    #[test]
    fn token_ignores_field_order(fields in fields(), secret in secret()) {
        let verifier = TokenVerifier::new(secret).unwrap();
        let forward = payload_of(fields.iter());
        let backward = payload_of(fields.iter().rev());

        prop_assert_eq!(verifier.compute_token(&forward), verifier.compute_token(&backward));
    }

    /// Excluded fields, in any casing, never affect the token
    #[test]
    fn excluded_fields_do_not_matter(
        fields in fields(),
        secret in secret(),
        name in excluded_name(),
        value in "[ -~]{0,32}",
    ) {
        let verifier = TokenVerifier::new(secret).unwrap();
        let payload = payload_of(fields.iter());
        let mut with_extra = payload.clone();
        with_extra.insert(name, value);

        prop_assert_eq!(verifier.compute_token(&payload), verifier.compute_token(&with_extra));
    }

    /// Booleans hash exactly like their lowercase text
    #[test]
    fn booleans_render_lowercase(flag in any::<bool>(), secret in secret()) {
        let verifier = TokenVerifier::new(secret).unwrap();
        let as_bool = Payload::new().with("Success", flag);
        let as_text = Payload::new().with("Success", if flag { "true" } else { "false" });

        prop_assert_eq!(verifier.compute_token(&as_bool), verifier.compute_token(&as_text));
    }

    /// Tokens are always 64 lowercase hex characters
    #[test]
    fn token_shape(fields in fields(), secret in secret()) {
        let verifier = TokenVerifier::new(secret).unwrap();
        let token = verifier.compute_token(&payload_of(fields.iter()));

        prop_assert_eq!(token.len(), 64);
        prop_assert!(token.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
    }

    /// A signed payload verifies, in either hex case
    #[test]
    fn signed_payload_verifies(fields in fields(), secret in secret(), upper in any::<bool>()) {
        let verifier = TokenVerifier::new(secret).unwrap();
        let payload = payload_of(fields.iter());
        let token = verifier.compute_token(&payload);
        let token = if upper { token.to_ascii_uppercase() } else { token };

        prop_assert!(verifier.verify(&payload.with("Token", token)));
    }

    /// Changing any covered field after signing breaks verification
    #[test]
    fn tampering_is_detected(fields in fields(), secret in secret(), index in any::<prop::sample::Index>()) {
        let covered: Vec<&String> = fields
            .keys()
            .filter(|name| !is_excluded(name) && name.as_str() != "Password")
            .collect();
        prop_assume!(!covered.is_empty());

        let verifier = TokenVerifier::new(secret).unwrap();
        let mut signed = verifier.sign(&payload_of(fields.iter()));
        prop_assert!(verifier.verify(&signed));

        let target = covered[index.index(covered.len())];
        signed.insert(target.clone(), format!("{}x", fields[target]));
        prop_assert!(!verifier.verify(&signed));
    }
}
