//! Sealed-blob error types.
//!
//! Defines errors that can occur handling sealed blobs:
//! - `MalformedBlob`: blob string is not decodable
//! - `MalformedKey`: key string is not a valid 32-byte hex key
//! - `AuthenticationFailed`: wrong key, wrong chain, or tampering

use thiserror::Error;

/// Errors that can occur sealing or opening a blob.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SealError {
    /// Blob string is not hex or is truncated
    #[error("malformed sealed blob: {reason}")]
    MalformedBlob {
        /// What was wrong with the encoding
        reason: String,
    },

    /// Key string is not a valid hex-encoded 32-byte key
    #[error("malformed key: {reason}")]
    MalformedKey {
        /// What was wrong with the encoding
        reason: String,
    },

    /// AEAD authentication failed (wrong key, wrong chain, or tampering)
    #[error("authentication failed")]
    AuthenticationFailed,
}
