//! Layer resolution.
//!
//! Decides how many layers of one record can be unwrapped with the keys at
//! hand and what to emit when full recovery is impossible.
//!
//! With fewer keys than layers a resolve call peels exactly one layer, the
//! outermost (highest seq), using the last key in the ring. Callers doing
//! incremental recovery feed the residual back once more keys arrive; no
//! principled assignment exists from an arbitrary key subset to an
//! arbitrary layer subset, so the resolver never guesses beyond that one
//! deterministic step.

use crate::{
    cipher::{Cipher, MultiOutcome},
    error::DecryptError,
    keys::KeyRing,
    record::{EncryptedLayer, EncryptedRecord, ResolvedOutput},
};

/// Unwrap as many layers of `record` as `keys` allow.
///
/// - a single layer decrypts directly with the innermost key;
/// - a stack with exactly as many keys as layers unwraps fully in one
///   multi-key pass;
/// - any other stack peels one layer and returns the residual record.
///
/// # Errors
///
/// [`DecryptError::EmptyRecord`] for a record with no layers,
/// [`DecryptError::NoKeyAvailable`] for an empty key ring, and
/// [`DecryptError::Failed`] when the capability rejects a ciphertext/key
/// pair.
pub async fn resolve(
    record: EncryptedRecord,
    keys: &KeyRing,
    cipher: &dyn Cipher,
) -> Result<ResolvedOutput, DecryptError> {
    match record.flatten() {
        EncryptedRecord::Single(layer) => {
            let key = keys.innermost().ok_or(DecryptError::NoKeyAvailable)?;
            let final_decrypted = cipher.decrypt(&layer.ciphertext, key).await?;
            Ok(ResolvedOutput::Final { public_key: layer.public_key, final_decrypted })
        },
        EncryptedRecord::Wrapped(layers) if layers.is_empty() => Err(DecryptError::EmptyRecord),
        EncryptedRecord::Wrapped(layers) if layers.len() == keys.len() => {
            match cipher.decrypt_all(&layers, keys).await? {
                MultiOutcome::Decrypted(final_decrypted) => Ok(ResolvedOutput::Final {
                    // the result is identified by the stack's first layer
                    // as given, not the innermost after sorting
                    public_key: layers[0].public_key.clone(),
                    final_decrypted,
                }),
                MultiOutcome::Remaining(rest) => {
                    Ok(ResolvedOutput::Remaining(EncryptedRecord::Wrapped(rest).flatten()))
                },
            }
        },
        EncryptedRecord::Wrapped(layers) => peel_outermost(layers, keys, cipher).await,
    }
}

/// Peel exactly the outermost layer with the last key in the ring.
async fn peel_outermost(
    mut layers: Vec<EncryptedLayer>,
    keys: &KeyRing,
    cipher: &dyn Cipher,
) -> Result<ResolvedOutput, DecryptError> {
    let key = keys.outermost().ok_or(DecryptError::NoKeyAvailable)?;

    layers.sort_by_key(|layer| std::cmp::Reverse(layer.seq));
    let outer = layers.remove(0);
    let plaintext = cipher.decrypt(&outer.ciphertext, key).await?;

    // chaining: the peeled layer's plaintext is the next layer's live
    // ciphertext
    if let Some(next) = layers.first_mut() {
        next.ciphertext = plaintext;
    }

    Ok(ResolvedOutput::Remaining(EncryptedRecord::Wrapped(layers).flatten()))
}
