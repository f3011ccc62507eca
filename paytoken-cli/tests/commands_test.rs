//! Tests for the shared command helpers.

use paytoken_cli::commands::{load_verifier, parse_payload};
use paytoken_lib::test_utils::{payload_with_fields, TestFixtures};
use proptest::prelude::*;

#[test]
fn test_parse_payload_accepts_objects() {
    let payload = parse_payload(r#"{"OrderId":"100","Success":true}"#).unwrap();
    assert_eq!(payload.len(), 2);
}

#[test]
fn test_parse_payload_rejects_non_objects() {
    for text in ["[]", "1", "\"x\"", "", "{"] {
        let err = parse_payload(text).unwrap_err();
        assert!(
            format!("{:#}", err).contains("JSON object"),
            "unexpected error for {:?}: {:#}",
            text,
            err
        );
    }
}

#[test]
fn test_load_verifier_from_flag() {
    let verifier = load_verifier(Some(TestFixtures::SECRET)).unwrap();
    assert!(verifier.verify(&TestFixtures::signed_notification()));

    assert!(load_verifier(Some("")).is_err());
}

proptest! {
    /// Anything sign produces parses back to a payload that verifies
    #[test]
    fn signed_text_verifies(count in 0usize..20) {
        let verifier = load_verifier(Some(TestFixtures::SECRET)).unwrap();
        let signed = verifier.sign(&payload_with_fields(count));
        let text = serde_json::to_string(&signed).unwrap();

        let parsed = parse_payload(&text).unwrap();
        prop_assert!(verifier.verify(&parsed));
    }
}
