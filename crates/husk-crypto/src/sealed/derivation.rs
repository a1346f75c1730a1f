//! Blob key derivation using HKDF

use hkdf::Hkdf;
use sha2::Sha256;
use zeroize::Zeroizing;

/// Salt for HKDF extraction
const SEAL_SALT: &[u8] = b"husk-backup-v1";

/// Derive the one-time AEAD key for a sealed blob.
///
/// The info parameter binds the key to the chain label and to both public
/// keys of the agreement, so the same shared secret never yields the same
/// AEAD key across chains or recipients.
pub(crate) fn derive_seal_key(
    chain_label: &[u8],
    shared_secret: &[u8],
    ephemeral_pub: &[u8; 32],
    recipient_pub: &[u8; 32],
) -> Zeroizing<[u8; 32]> {
    let hkdf = Hkdf::<Sha256>::new(Some(SEAL_SALT), shared_secret);

    // Build the info parameter: label || ephemeral_pub || recipient_pub
    let mut info = Vec::with_capacity(chain_label.len() + 64);
    info.extend_from_slice(chain_label);
    info.extend_from_slice(ephemeral_pub);
    info.extend_from_slice(recipient_pub);

    let mut key = Zeroizing::new([0u8; 32]);
    let Ok(()) = hkdf.expand(&info, &mut *key) else {
        unreachable!("32 bytes is a valid HKDF-SHA256 output length");
    };

    key
}
