//! Test utilities for token handling.
//!
//! Fixtures model a realistic gateway notification together with the token
//! the gateway would have attached to it.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use paytoken_lib::test_utils::TestFixtures;
//! use paytoken_lib::TokenVerifier;
//!
//! let verifier = TokenVerifier::new(TestFixtures::SECRET)?;
//! assert!(verifier.verify(&TestFixtures::signed_notification()));
//! ```

mod fixtures;

pub use fixtures::{payload_with_fields, TestFixtures};
