//! Prelude module for convenient imports.
//!
//! ```rust,ignore
//! use paytoken_lib::prelude::*;
//! ```

// Core types
pub use crate::payload::{FieldValue, Payload};
pub use crate::verifier::{extract_token, TokenVerifier};

// Error handling
pub use crate::errors::{TokenError, TokenErrorCode};
pub use crate::Result;

// Configuration and secrets
pub use crate::config::VerifierConfig;
pub use crate::secret::SecretString;

// Handler seam
pub use crate::authenticator::PayloadAuthenticator;
