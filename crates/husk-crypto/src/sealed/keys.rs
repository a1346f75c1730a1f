//! Key-string parsing.
//!
//! Private keys travel as hex-encoded 32-byte X25519 scalars; public keys
//! as hex-encoded X25519 points.

use x25519_dalek::{PublicKey, StaticSecret};

use super::error::SealError;

/// Parse a hex-encoded X25519 private key.
///
/// # Errors
///
/// `MalformedKey` if the string is not hex or not exactly 32 bytes.
pub fn parse_private_key(encoded: &str) -> Result<StaticSecret, SealError> {
    Ok(StaticSecret::from(decode_key_bytes(encoded)?))
}

/// Parse a hex-encoded X25519 public key.
///
/// # Errors
///
/// `MalformedKey` if the string is not hex or not exactly 32 bytes.
pub fn parse_public_key(encoded: &str) -> Result<PublicKey, SealError> {
    Ok(PublicKey::from(decode_key_bytes(encoded)?))
}

/// Hex-encoded public key for a private key, as written into backup layers.
pub fn public_key_for(secret: &StaticSecret) -> String {
    hex::encode(PublicKey::from(secret).as_bytes())
}

fn decode_key_bytes(encoded: &str) -> Result<[u8; 32], SealError> {
    let bytes = hex::decode(encoded.trim())
        .map_err(|_| SealError::MalformedKey { reason: "not a hex string".to_string() })?;

    <[u8; 32]>::try_from(bytes.as_slice()).map_err(|_| SealError::MalformedKey {
        reason: format!("expected 32 bytes, got {}", bytes.len()),
    })
}
