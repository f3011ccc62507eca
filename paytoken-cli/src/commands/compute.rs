//! Compute command - print the token for a payload

use anyhow::Result;
use paytoken_lib::TokenVerifier;

use crate::ui;

#[tracing::instrument(skip(verifier))]
pub fn run(verifier: &TokenVerifier, source: &str, verbose: bool) -> Result<()> {
    let payload = super::read_payload(source)?;
    tracing::debug!("Loaded payload with {} fields", payload.len());

    let token = verifier.compute_token(&payload);

    if verbose {
        ui::info("Computed token");
        ui::key_value("Fields", &payload.len().to_string());
    }
    println!("{}", token);

    Ok(())
}
