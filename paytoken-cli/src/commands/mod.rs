//! CLI command implementations

use anyhow::{Context, Result};
use paytoken_lib::{Payload, TokenVerifier, VerifierConfig};
use std::io::Read;

pub mod compute;
pub mod sign;
pub mod verify;

/// Read a JSON payload from a file path, or from stdin when `source` is `-`.
pub fn read_payload(source: &str) -> Result<Payload> {
    let text = if source == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read payload from stdin")?;
        buf
    } else {
        std::fs::read_to_string(source)
            .with_context(|| format!("Failed to read payload file {}", source))?
    };

    parse_payload(&text)
}

/// Parse payload text, rejecting anything that is not a JSON object.
pub fn parse_payload(text: &str) -> Result<Payload> {
    Payload::from_json_str(text).context("Payload must be a JSON object")
}

/// Build the verifier from `--secret`, falling back to `PAYTOKEN_SECRET`.
pub fn load_verifier(secret: Option<&str>) -> Result<TokenVerifier> {
    let config = match secret {
        Some(secret) => VerifierConfig::new(secret),
        None => VerifierConfig::from_env().with_context(|| {
            format!(
                "No secret given. Pass --secret or set {}",
                paytoken_lib::config::SECRET_ENV_VAR
            )
        })?,
    };

    config.into_verifier().context("Unusable secret")
}
