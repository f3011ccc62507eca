//! Paytoken library.
//!
//! Computes and verifies the integrity token a payment gateway attaches to
//! its notifications. The token is the lowercase hex SHA-256 of the payload's
//! field values, sorted by field name, with the terminal password mixed in
//! under the name `Password`.
//!
//! The crate is stateless apart from the secret held by [`TokenVerifier`] and
//! performs no I/O; HTTP wiring belongs to the caller.
//!
//! # Example
//!
//! ```
//! use paytoken_lib::{Payload, TokenVerifier};
//!
//! let verifier = TokenVerifier::new("mySecret")?;
//! let body = serde_json::json!({
//!     "OrderId": "100",
//!     "Success": true,
//!     "Token": "c5fc997f404f8bf1c9fe0eaefca0f794869906df639f508aef48aad0a60f40b0",
//! });
//!
//! assert!(verifier.verify(&Payload::from_json(&body)?));
//! # Ok::<(), paytoken_lib::TokenError>(())
//! ```
//!
//! # Features
//!
//! - **tracing**: instrument compute/verify calls (no payload values or secrets are recorded)
//! - **test-utils**: payload fixtures for dependent crates' tests

pub mod authenticator;
pub mod canonical;
pub mod config;
pub mod digest;
pub mod errors;
pub mod payload;
pub mod prelude;
pub mod secret;
pub mod verifier;

/// Test utilities for token handling.
///
/// This module is only available with the `test-utils` feature or in test builds.
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use authenticator::PayloadAuthenticator;
pub use canonical::FieldPair;
pub use config::VerifierConfig;
pub use errors::{TokenError, TokenErrorCode};
pub use payload::{FieldValue, Payload};
pub use secret::SecretString;
pub use verifier::{extract_token, TokenVerifier};

/// Common result alias for token operations.
pub type Result<T> = std::result::Result<T, TokenError>;
