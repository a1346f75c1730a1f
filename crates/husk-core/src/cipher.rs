//! Decryption capability.
//!
//! The resolver is independent of any concrete cryptographic scheme; it
//! only needs the two operations below. Decryption may suspend (the
//! capability can be I/O-bound or offloaded), so the trait is async, and
//! dyn-compatibility lets a chain selector hand back a boxed capability.

use async_trait::async_trait;

use crate::{error::DecryptError, keys::KeyRing, record::EncryptedLayer};

/// Result of a multi-key decryption pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MultiOutcome {
    /// Every layer was unwrapped; the innermost plaintext
    Decrypted(String),
    /// Keys ran out before the stack did; the layers still sealed, with
    /// the newly outermost layer's ciphertext replaced by the last
    /// recovered plaintext
    Remaining(Vec<EncryptedLayer>),
}

/// Asymmetric decryption capability.
#[async_trait]
pub trait Cipher: Send + Sync {
    /// Decrypt one ciphertext with one private key.
    ///
    /// # Errors
    ///
    /// [`DecryptError::Failed`] when the ciphertext/key pair is rejected.
    async fn decrypt(&self, ciphertext: &str, private_key: &str) -> Result<String, DecryptError>;

    /// Peel as many layers as the key ring allows, outermost (highest seq)
    /// first, matching keys back-to-front.
    ///
    /// Each peeled layer's plaintext is the next layer's live ciphertext.
    /// With as many keys as layers the whole stack unwraps to
    /// [`MultiOutcome::Decrypted`]; otherwise the leftover layers come back
    /// as [`MultiOutcome::Remaining`].
    ///
    /// # Errors
    ///
    /// [`DecryptError::NoKeyAvailable`] for an empty ring,
    /// [`DecryptError::EmptyRecord`] for an empty stack, and any error the
    /// underlying decryption raises.
    async fn decrypt_all(
        &self,
        layers: &[EncryptedLayer],
        keys: &KeyRing,
    ) -> Result<MultiOutcome, DecryptError> {
        if keys.is_empty() {
            return Err(DecryptError::NoKeyAvailable);
        }
        if layers.is_empty() {
            return Err(DecryptError::EmptyRecord);
        }

        let mut stack = layers.to_vec();
        stack.sort_by_key(|layer| std::cmp::Reverse(layer.seq));

        let ordered = keys.in_encryption_order();
        let peel = stack.len().min(ordered.len());

        let mut plaintext = stack[0].ciphertext.clone();
        for key in ordered.iter().rev().take(peel) {
            plaintext = self.decrypt(&plaintext, key).await?;
        }

        if peel == stack.len() {
            return Ok(MultiOutcome::Decrypted(plaintext));
        }

        let mut remaining = stack.split_off(peel);
        if let Some(outer) = remaining.first_mut() {
            outer.ciphertext = plaintext;
        }
        Ok(MultiOutcome::Remaining(remaining))
    }
}
