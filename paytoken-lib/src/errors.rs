//! Error types for token operations.
//!
//! Only two things can go wrong: the verifier was built with an unusable
//! secret, or the caller handed over something that is not a field mapping.
//! A token that does not match is not an error; `verify` reports it as `false`.

/// Stable error codes for hosts that map failures to status values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum TokenErrorCode {
    /// Bad construction parameter
    InvalidArgument = 1000,
    /// Payload is not a mapping of named entries
    MalformedInput = 2000,
}

/// Error type for token operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    /// A construction parameter was missing or empty.
    ///
    /// Fatal to the caller: retrying without fixing the parameter cannot succeed.
    #[error("invalid argument {name}: {reason}")]
    InvalidArgument {
        /// Parameter name
        name: String,
        /// Reason for rejection
        reason: String,
    },

    /// The payload does not have the expected mapping shape.
    #[error("malformed input: {0}")]
    MalformedInput(String),
}

impl TokenError {
    /// Get the stable error code.
    pub fn code(&self) -> TokenErrorCode {
        match self {
            Self::InvalidArgument { .. } => TokenErrorCode::InvalidArgument,
            Self::MalformedInput(_) => TokenErrorCode::MalformedInput,
        }
    }

    /// Get the error message as an owned String.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Create an invalid argument error.
    pub fn invalid_argument(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create a malformed input error.
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedInput(reason.into())
    }
}

impl From<serde_json::Error> for TokenError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedInput(err.to_string())
    }
}
