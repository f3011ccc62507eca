//! Shared-secret handling.
//!
//! The gateway password is mixed into every digest, so it must never end up
//! in logs, debug output or serialized configuration.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A string that is redacted when printed and wiped when dropped.
///
/// ```
/// use paytoken_lib::SecretString;
///
/// let secret = SecretString::from("Dfsfh56dgKl");
/// assert_eq!(secret.expose_secret(), "Dfsfh56dgKl");
/// assert_eq!(format!("{:?}", secret), "SecretString([REDACTED])");
/// ```
#[derive(Clone, Default, Zeroize, ZeroizeOnDrop)]
pub struct SecretString {
    inner: String,
}

impl SecretString {
    /// Wrap a secret value.
    pub fn new(secret: String) -> Self {
        Self { inner: secret }
    }

    /// Access the secret value.
    ///
    /// Only the digest pipeline should need this.
    pub fn expose_secret(&self) -> &str {
        &self.inner
    }

    /// Length in bytes, without exposing the value.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Check emptiness without exposing the value.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretString([REDACTED])")
    }
}

impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl From<String> for SecretString {
    fn from(secret: String) -> Self {
        Self::new(secret)
    }
}

impl From<&str> for SecretString {
    fn from(secret: &str) -> Self {
        Self::new(secret.to_string())
    }
}

// Serialized configuration never carries the real value.
impl Serialize for SecretString {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str("[REDACTED]")
    }
}

impl<'de> Deserialize<'de> for SecretString {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Self::new)
    }
}

impl PartialEq for SecretString {
    fn eq(&self, other: &Self) -> bool {
        self.inner.as_bytes().ct_eq(other.inner.as_bytes()).into()
    }
}

impl Eq for SecretString {}
