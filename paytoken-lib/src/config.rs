//! Verifier configuration.

use serde::{Deserialize, Serialize};

use crate::secret::SecretString;
use crate::verifier::TokenVerifier;
use crate::{Result, TokenError};

/// Environment variable holding the gateway password.
pub const SECRET_ENV_VAR: &str = "PAYTOKEN_SECRET";

/// Configuration for a [`TokenVerifier`].
///
/// Deserializes from `{"secret": "..."}`; serializing redacts the secret.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifierConfig {
    /// Shared secret issued by the gateway (the terminal password).
    #[serde(default)]
    pub secret: SecretString,
}

impl VerifierConfig {
    /// Create a configuration with the given secret.
    pub fn new(secret: impl Into<SecretString>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Set the secret.
    pub fn with_secret(mut self, secret: impl Into<SecretString>) -> Self {
        self.secret = secret.into();
        self
    }

    /// Read the secret from [`SECRET_ENV_VAR`].
    pub fn from_env() -> Result<Self> {
        Self::from_env_var(SECRET_ENV_VAR)
    }

    /// Read the secret from a named environment variable.
    ///
    /// A missing, empty or non-UTF-8 variable is an `InvalidArgument`.
    pub fn from_env_var(name: &str) -> Result<Self> {
        match std::env::var(name) {
            Ok(secret) if !secret.is_empty() => Ok(Self::new(secret)),
            Ok(_) => Err(TokenError::invalid_argument(name, "is empty")),
            Err(e) => Err(TokenError::invalid_argument(name, e.to_string())),
        }
    }

    /// Build the verifier.
    pub fn into_verifier(self) -> Result<TokenVerifier> {
        TokenVerifier::new(self.secret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TokenErrorCode;

    #[test]
    fn test_from_env_var() {
        std::env::set_var("PAYTOKEN_TEST_SECRET_SET", "Dfsfh56dgKl");
        let config = VerifierConfig::from_env_var("PAYTOKEN_TEST_SECRET_SET").unwrap();
        assert_eq!(config.secret.expose_secret(), "Dfsfh56dgKl");
        assert!(config.into_verifier().is_ok());
    }

    #[test]
    fn test_from_env_var_missing() {
        let err = VerifierConfig::from_env_var("PAYTOKEN_TEST_SECRET_MISSING").unwrap_err();
        assert_eq!(err.code(), TokenErrorCode::InvalidArgument);
        assert!(err.to_string().contains("PAYTOKEN_TEST_SECRET_MISSING"));
    }

    #[test]
    fn test_from_env_var_empty() {
        std::env::set_var("PAYTOKEN_TEST_SECRET_EMPTY", "");
        let err = VerifierConfig::from_env_var("PAYTOKEN_TEST_SECRET_EMPTY").unwrap_err();
        assert_eq!(err.code(), TokenErrorCode::InvalidArgument);
    }

    #[test]
    fn test_deserialize_and_build() {
        let config: VerifierConfig = serde_json::from_str(r#"{"secret":"mySecret"}"#).unwrap();
        assert_eq!(config, VerifierConfig::new("mySecret"));
        assert!(config.into_verifier().is_ok());
    }

    #[test]
    fn test_default_config_cannot_build_verifier() {
        let config: VerifierConfig = serde_json::from_str("{}").unwrap();
        let err = config.into_verifier().unwrap_err();
        assert_eq!(err.code(), TokenErrorCode::InvalidArgument);

        assert!(VerifierConfig::default()
            .with_secret("mySecret")
            .into_verifier()
            .is_ok());
    }

    #[test]
    fn test_serialize_redacts_secret() {
        let json = serde_json::to_string(&VerifierConfig::new("mySecret")).unwrap();
        assert_eq!(json, r#"{"secret":"[REDACTED]"}"#);
    }
}
