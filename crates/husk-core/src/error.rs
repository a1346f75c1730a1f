//! Error types for backup recovery.
//!
//! Strongly-typed errors per layer: [`DecryptError`] for resolving a single
//! record, [`WriteError`] for the JSON array writer, and [`BatchError`] for
//! failures that abort a whole batch.

use thiserror::Error;

/// Errors from resolving a single record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecryptError {
    /// The key ring is empty
    #[error("no private key available")]
    NoKeyAvailable,

    /// The record contains no layers at all
    #[error("record contains no encryption layers")]
    EmptyRecord,

    /// The decryption capability rejected a ciphertext/key pair
    ///
    /// Covers malformed ciphertext, a wrong or malformed key, and corrupted
    /// payloads; the capability cannot always tell these apart.
    #[error("decryption failed: {reason}")]
    Failed {
        /// Why the capability rejected the pair
        reason: String,
    },
}

/// Errors from the JSON array writer.
#[derive(Error, Debug)]
pub enum WriteError {
    /// Sink write or flush failed
    #[error("output write failed: {0}")]
    Io(#[from] std::io::Error),

    /// A result element could not be serialized
    #[error("output serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Errors that abort a batch.
#[derive(Error, Debug)]
pub enum BatchError {
    /// A record could not be decrypted; the batch stops here
    #[error("cannot decrypt backup record {record}: {source}")]
    Decrypt {
        /// Best-effort JSON form of the failing record
        record: String,
        /// The underlying resolver failure
        source: DecryptError,
    },

    /// Writing a result to the output sink failed
    #[error(transparent)]
    Write(#[from] WriteError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decrypt_error_messages_are_lowercase_fragments() {
        let err = DecryptError::Failed { reason: "authentication failed".to_string() };
        assert_eq!(err.to_string(), "decryption failed: authentication failed");
    }

    #[test]
    fn batch_error_carries_record_identity() {
        let err = BatchError::Decrypt {
            record: r#"{"ciphertext":"c1"}"#.to_string(),
            source: DecryptError::NoKeyAvailable,
        };

        let message = err.to_string();
        assert!(message.contains(r#"{"ciphertext":"c1"}"#));
        assert!(message.contains("no private key available"));
    }
}
