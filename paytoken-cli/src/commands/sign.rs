//! Sign command - attach a token to a payload

use anyhow::Result;
use paytoken_lib::TokenVerifier;

use crate::ui;

#[tracing::instrument(skip(verifier))]
pub fn run(verifier: &TokenVerifier, source: &str, pretty: bool) -> Result<()> {
    let payload = super::read_payload(source)?;
    let signed = verifier.sign(&payload);

    ui::json(&signed.to_json(), pretty)
}
