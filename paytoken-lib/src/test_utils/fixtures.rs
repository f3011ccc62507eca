//! Test fixtures and data generators.

use serde_json::json;

use crate::payload::Payload;

/// Collection of commonly used test fixtures.
pub struct TestFixtures;

impl TestFixtures {
    /// Terminal password used to sign [`TestFixtures::notification`].
    pub const SECRET: &'static str = "Dfsfh56dgKl";

    /// Token of [`TestFixtures::notification`] under [`TestFixtures::SECRET`].
    pub const NOTIFICATION_TOKEN: &'static str =
        "1b3bfe37da7932cbcbac20a874cba1b2740addcf0b690366df29e12a02b9ba9e";

    /// An authorized-payment notification without a token.
    ///
    /// Digest input: `1920032226401122201709430000******0777` + secret +
    /// `8742591AUTHORIZEDtrue1321054611234DEMO`.
    pub fn notification() -> Payload {
        Payload::new()
            .with("TerminalKey", "1321054611234DEMO")
            .with("OrderId", "201709")
            .with("Success", true)
            .with("Status", "AUTHORIZED")
            .with("PaymentId", 8742591u64)
            .with("ErrorCode", "0")
            .with("Amount", 19200u64)
            .with("CardId", 322264u64)
            .with("Pan", "430000******0777")
            .with("ExpDate", "1122")
            .with(
                "Receipt",
                json!({
                    "Email": "buyer@example.com",
                    "Taxation": "osn",
                    "Items": [{"Name": "Tea", "Price": 19200, "Quantity": 1, "Tax": "vat20"}]
                }),
            )
            .with("Data", json!({"Phone": "+71234567890"}))
    }

    /// [`TestFixtures::notification`] carrying its correct token.
    pub fn signed_notification() -> Payload {
        Self::notification().with("Token", Self::NOTIFICATION_TOKEN)
    }
}

/// A payload of `count` string fields named `Field0000`, `Field0001`, ...
pub fn payload_with_fields(count: usize) -> Payload {
    (0..count)
        .map(|i| (format!("Field{:04}", i), format!("value-{}", i)))
        .collect()
}
