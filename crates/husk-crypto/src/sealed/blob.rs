//! Wire format for sealed blobs.

use super::error::SealError;

/// Size of the ephemeral X25519 public key prefix (32 bytes)
pub const EPHEMERAL_SIZE: usize = 32;

/// Size of the `XChaCha20` nonce (24 bytes)
pub const NONCE_SIZE: usize = 24;

/// Poly1305 tag size (16 bytes)
pub(crate) const POLY1305_TAG_SIZE: usize = 16;

/// A parsed sealed blob.
///
/// Hex-encoded in transit. Byte layout:
/// - bytes 0-31: ephemeral X25519 public key
/// - bytes 32-55: `XChaCha20` nonce
/// - bytes 56..: ciphertext including 16-byte Poly1305 tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SealedBlob {
    /// Ephemeral public key generated for this blob
    pub ephemeral: [u8; EPHEMERAL_SIZE],
    /// The 24-byte `XChaCha20` nonce
    pub nonce: [u8; NONCE_SIZE],
    /// The ciphertext including 16-byte Poly1305 tag
    pub ciphertext: Vec<u8>,
}

impl SealedBlob {
    /// Hex-encode the blob for embedding in a JSON backup record.
    pub fn encode(&self) -> String {
        let mut bytes =
            Vec::with_capacity(EPHEMERAL_SIZE + NONCE_SIZE + self.ciphertext.len());
        bytes.extend_from_slice(&self.ephemeral);
        bytes.extend_from_slice(&self.nonce);
        bytes.extend_from_slice(&self.ciphertext);
        hex::encode(bytes)
    }

    /// Parse a hex-encoded blob.
    ///
    /// # Errors
    ///
    /// `MalformedBlob` if the string is not hex or is shorter than the
    /// header plus the authentication tag.
    pub fn decode(encoded: &str) -> Result<Self, SealError> {
        let bytes = hex::decode(encoded.trim()).map_err(|_| SealError::MalformedBlob {
            reason: "not a hex string".to_string(),
        })?;

        let min_len = EPHEMERAL_SIZE + NONCE_SIZE + POLY1305_TAG_SIZE;
        if bytes.len() < min_len {
            return Err(SealError::MalformedBlob {
                reason: format!("expected at least {min_len} bytes, got {}", bytes.len()),
            });
        }

        let mut ephemeral = [0u8; EPHEMERAL_SIZE];
        ephemeral.copy_from_slice(&bytes[..EPHEMERAL_SIZE]);

        let mut nonce = [0u8; NONCE_SIZE];
        nonce.copy_from_slice(&bytes[EPHEMERAL_SIZE..EPHEMERAL_SIZE + NONCE_SIZE]);

        let ciphertext = bytes[EPHEMERAL_SIZE + NONCE_SIZE..].to_vec();

        Ok(Self { ephemeral, nonce, ciphertext })
    }

    /// Plaintext length (ciphertext length minus authentication tag).
    pub fn plaintext_len(&self) -> usize {
        self.ciphertext.len().saturating_sub(POLY1305_TAG_SIZE)
    }
}
