//! Verify command - check a payload's token

use anyhow::Result;
use paytoken_lib::{extract_token, TokenVerifier};

use crate::ui;

/// Returns whether the token matched.
#[tracing::instrument(skip(verifier, token))]
pub fn run(
    verifier: &TokenVerifier,
    source: &str,
    token: Option<&str>,
    verbose: bool,
) -> Result<bool> {
    let payload = super::read_payload(source)?;

    let valid = match token {
        Some(token) => verifier.verify_token(&payload, token),
        None => verifier.verify(&payload),
    };

    if verbose {
        let claimed = token
            .map(str::to_string)
            .or_else(|| extract_token(&payload))
            .unwrap_or_else(|| "(none)".to_string());
        ui::key_value("Claimed", &claimed);
        ui::key_value("Computed", &verifier.compute_token(&payload));
    }

    if valid {
        ui::success("Token is valid");
    } else {
        tracing::info!("Token mismatch for payload from {}", source);
        ui::error("Token does not match payload");
    }

    Ok(valid)
}
