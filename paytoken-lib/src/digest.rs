//! SHA-256 rendering used for gateway tokens.

use sha2::{Digest, Sha256};

/// Length of a rendered token: two hex digits per digest byte.
pub const TOKEN_HEX_LEN: usize = 64;

/// SHA-256 of the UTF-8 bytes of `input`, as lowercase hex.
pub fn sha256_hex(input: &str) -> String {
    hex::encode(Sha256::digest(input.as_bytes()))
}

/// Returns true if `token` has the shape of a rendered digest.
pub fn is_token_shaped(token: &str) -> bool {
    token.len() == TOKEN_HEX_LEN && token.bytes().all(|b| b.is_ascii_hexdigit())
}
