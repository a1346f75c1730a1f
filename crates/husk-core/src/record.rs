//! Backup record data model.
//!
//! A backup file is a JSON array of records. Each record is either a single
//! encrypted layer or an ordered stack of layers ("wrapped"), one per
//! encryption pass. Array order carries no meaning; the `seq` field alone
//! defines unwrap order, highest first.

use serde::{Deserialize, Serialize};

/// One asymmetric encryption pass over a payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncryptedLayer {
    /// Opaque encrypted blob
    pub ciphertext: String,
    /// Public key that produced this layer, kept for identification
    pub public_key: String,
    /// Position in the encryption chain; higher = applied later = peeled
    /// first
    #[serde(default)]
    pub seq: u32,
}

/// A single backup entry: one layer, or a stack of wrapped layers.
///
/// On the wire this is either a bare object or an array of objects; the
/// variants make that shape explicit so the resolver can match
/// exhaustively instead of probing at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EncryptedRecord {
    /// Payload encrypted exactly once
    Single(EncryptedLayer),
    /// Payload encrypted multiple times in sequence
    Wrapped(Vec<EncryptedLayer>),
}

impl EncryptedRecord {
    /// Number of encryption layers in this record.
    pub fn layer_count(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Wrapped(layers) => layers.len(),
        }
    }

    /// Normalize a 1-element stack into a bare layer.
    ///
    /// A wrapped record holding exactly one layer is the same payload as
    /// the bare layer; flattening it first keeps sequence-number logic out
    /// of the single-layer path.
    pub fn flatten(self) -> Self {
        match self {
            Self::Wrapped(mut layers) if layers.len() == 1 => {
                let Some(layer) = layers.pop() else {
                    unreachable!("stack length is exactly 1");
                };
                Self::Single(layer)
            },
            other => other,
        }
    }

    /// Best-effort JSON form for diagnostics.
    pub fn to_diagnostic_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "<unserializable record>".to_string())
    }
}

/// Outcome of resolving one record.
///
/// Serializes untagged: a full recovery becomes a
/// `{publicKey, finalDecrypted}` object, a partial one becomes the residual
/// record itself, ready to feed back through the pipeline with more keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResolvedOutput {
    /// Full recovery: the innermost plaintext, tagged with the public key
    /// of the layer it was recovered from
    #[serde(rename_all = "camelCase")]
    Final {
        /// Public key identifying which backup key sealed the final layer
        public_key: String,
        /// The recovered plaintext secret
        final_decrypted: String,
    },
    /// Partial recovery: the layers that could not be peeled yet
    Remaining(EncryptedRecord),
}
