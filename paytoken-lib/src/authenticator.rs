//! Trait seam for request handlers.

use crate::payload::Payload;
use crate::verifier::TokenVerifier;

/// Anything that can sign and check notification payloads.
///
/// HTTP handlers hold an `Arc<dyn PayloadAuthenticator>` so tests can swap in
/// a fake without a real secret.
pub trait PayloadAuthenticator: Send + Sync {
    /// Compute the token for a payload.
    fn compute_token(&self, payload: &Payload) -> String;

    /// Check the payload's own `Token` field.
    fn verify(&self, payload: &Payload) -> bool;
}

impl PayloadAuthenticator for TokenVerifier {
    fn compute_token(&self, payload: &Payload) -> String {
        TokenVerifier::compute_token(self, payload)
    }

    fn verify(&self, payload: &Payload) -> bool {
        TokenVerifier::verify(self, payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    struct RejectAll;

    impl PayloadAuthenticator for RejectAll {
        fn compute_token(&self, _payload: &Payload) -> String {
            String::new()
        }

        fn verify(&self, _payload: &Payload) -> bool {
            false
        }
    }

    fn accept(auth: &dyn PayloadAuthenticator, payload: &Payload) -> bool {
        auth.verify(payload)
    }

    #[test]
    fn test_verifier_behind_trait_object() {
        let verifier = TokenVerifier::new("mySecret").unwrap();
        let signed = verifier.sign(&Payload::new().with("OrderId", "100"));

        let auth: Arc<dyn PayloadAuthenticator> = Arc::new(verifier);
        assert!(accept(auth.as_ref(), &signed));
        assert_eq!(auth.compute_token(&signed).len(), 64);
    }

    #[test]
    fn test_fake_authenticator() {
        let auth: Arc<dyn PayloadAuthenticator> = Arc::new(RejectAll);
        assert!(!accept(auth.as_ref(), &Payload::new()));
    }
}
