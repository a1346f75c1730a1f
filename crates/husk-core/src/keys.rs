//! Private-key ordering.
//!
//! Producers wrap payloads innermost-first, so the key that decrypts the
//! innermost layer was the first one applied. Callers must supply keys in
//! that same encryption order. [`KeyRing`] names the two ends of the
//! ordering so call sites never rely on raw positional indexing.

use serde::{Deserialize, Serialize};

/// Ordered private keys, innermost layer's key first.
///
/// Index 0 decrypts the innermost (lowest-seq) layer; the last index
/// decrypts the outermost (highest-seq) layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyRing(Vec<String>);

impl KeyRing {
    /// Wrap keys already sorted in encryption order.
    pub fn new(keys: Vec<String>) -> Self {
        Self(keys)
    }

    /// Number of keys available.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if no keys were supplied.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Key for the innermost (lowest-seq, first-encrypted) layer.
    pub fn innermost(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    /// Key for the outermost (highest-seq, last-encrypted) layer.
    pub fn outermost(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    /// All keys in encryption order, innermost first.
    pub fn in_encryption_order(&self) -> &[String] {
        &self.0
    }
}

impl From<Vec<String>> for KeyRing {
    fn from(keys: Vec<String>) -> Self {
        Self::new(keys)
    }
}
