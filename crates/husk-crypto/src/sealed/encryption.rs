//! Blob sealing and opening using X25519 + `XChaCha20-Poly1305`
//!
//! All functions are pure - random bytes must be provided by the caller.
//! This enables deterministic testing.

use chacha20poly1305::{
    XChaCha20Poly1305, XNonce,
    aead::{Aead, KeyInit},
};
use x25519_dalek::{PublicKey, StaticSecret};

use super::{
    blob::{NONCE_SIZE, SealedBlob},
    derivation::derive_seal_key,
    error::SealError,
};
use crate::chain::Chain;

/// Seal a payload to a recipient public key.
///
/// Returns the blob carrying the ephemeral public key, the nonce, and the
/// ciphertext.
///
/// # Security
///
/// - Caller MUST provide a fresh cryptographically random ephemeral secret
///   and nonce in production; reuse links blobs together
/// - The chain binds the derived key, so the blob only opens under the
///   same chain selection
pub fn seal(
    plaintext: &[u8],
    recipient: &PublicKey,
    chain: Chain,
    ephemeral_secret: [u8; 32],
    nonce: [u8; NONCE_SIZE],
) -> SealedBlob {
    let ephemeral = StaticSecret::from(ephemeral_secret);
    let ephemeral_pub = PublicKey::from(&ephemeral);
    let shared = ephemeral.diffie_hellman(recipient);

    let key = derive_seal_key(
        chain.label(),
        shared.as_bytes(),
        ephemeral_pub.as_bytes(),
        recipient.as_bytes(),
    );

    let cipher = XChaCha20Poly1305::new((&*key).into());
    let Ok(ciphertext) = cipher.encrypt(XNonce::from_slice(&nonce), plaintext) else {
        unreachable!("XChaCha20-Poly1305 encryption cannot fail with valid inputs");
    };

    SealedBlob { ephemeral: *ephemeral_pub.as_bytes(), nonce, ciphertext }
}

/// Open a sealed blob with the recipient private key.
///
/// Returns the decrypted payload.
///
/// # Errors
///
/// - `AuthenticationFailed`: wrong private key, wrong chain, or a tampered
///   blob
pub fn open(
    blob: &SealedBlob,
    recipient: &StaticSecret,
    chain: Chain,
) -> Result<Vec<u8>, SealError> {
    let ephemeral_pub = PublicKey::from(blob.ephemeral);
    let shared = recipient.diffie_hellman(&ephemeral_pub);
    let recipient_pub = PublicKey::from(recipient);

    let key = derive_seal_key(
        chain.label(),
        shared.as_bytes(),
        &blob.ephemeral,
        recipient_pub.as_bytes(),
    );

    let cipher = XChaCha20Poly1305::new((&*key).into());
    cipher
        .decrypt(XNonce::from_slice(&blob.nonce), blob.ciphertext.as_slice())
        .map_err(|_| SealError::AuthenticationFailed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipient_pair(byte: u8) -> (StaticSecret, PublicKey) {
        let secret = StaticSecret::from([byte; 32]);
        let public = PublicKey::from(&secret);
        (secret, public)
    }

    #[test]
    fn seal_open_roundtrip() {
        let (secret, public) = recipient_pair(7);
        let plaintext = b"backup secret";

        let blob = seal(plaintext, &public, Chain::Ethereum, [0x11; 32], [0x22; NONCE_SIZE]);
        let opened = open(&blob, &secret, Chain::Ethereum).unwrap();

        assert_eq!(opened, plaintext);
    }

    #[test]
    fn seal_open_empty_payload() {
        let (secret, public) = recipient_pair(7);

        let blob = seal(b"", &public, Chain::Eos, [0x11; 32], [0x22; NONCE_SIZE]);
        let opened = open(&blob, &secret, Chain::Eos).unwrap();

        assert!(opened.is_empty());
    }

    #[test]
    fn roundtrip_through_string_encoding() {
        let (secret, public) = recipient_pair(9);
        let plaintext = b"travels as hex";

        let encoded =
            seal(plaintext, &public, Chain::Algorand, [0x33; 32], [0x44; NONCE_SIZE]).encode();
        let blob = SealedBlob::decode(&encoded).unwrap();
        let opened = open(&blob, &secret, Chain::Algorand).unwrap();

        assert_eq!(opened, plaintext);
    }

    #[test]
    fn wrong_key_fails_to_open() {
        let (_, public) = recipient_pair(7);
        let (other_secret, _) = recipient_pair(8);

        let blob = seal(b"secret", &public, Chain::Ethereum, [0x11; 32], [0x22; NONCE_SIZE]);
        let result = open(&blob, &other_secret, Chain::Ethereum);

        assert_eq!(result, Err(SealError::AuthenticationFailed));
    }

    #[test]
    fn wrong_chain_fails_to_open() {
        let (secret, public) = recipient_pair(7);

        let blob = seal(b"secret", &public, Chain::Ethereum, [0x11; 32], [0x22; NONCE_SIZE]);
        let result = open(&blob, &secret, Chain::Algorand);

        assert_eq!(result, Err(SealError::AuthenticationFailed));
    }

    #[test]
    fn tampered_ciphertext_fails_to_open() {
        let (secret, public) = recipient_pair(7);

        let mut blob = seal(b"secret", &public, Chain::Eos, [0x11; 32], [0x22; NONCE_SIZE]);
        blob.ciphertext[0] ^= 0xFF;

        let result = open(&blob, &secret, Chain::Eos);
        assert_eq!(result, Err(SealError::AuthenticationFailed));
    }

    #[test]
    fn seal_is_deterministic_for_fixed_randomness() {
        let (_, public) = recipient_pair(7);

        let blob1 = seal(b"secret", &public, Chain::Eos, [0x11; 32], [0x22; NONCE_SIZE]);
        let blob2 = seal(b"secret", &public, Chain::Eos, [0x11; 32], [0x22; NONCE_SIZE]);

        assert_eq!(blob1, blob2);
    }

    #[test]
    fn different_ephemerals_produce_different_blobs() {
        let (_, public) = recipient_pair(7);

        let blob1 = seal(b"secret", &public, Chain::Eos, [0x11; 32], [0x22; NONCE_SIZE]);
        let blob2 = seal(b"secret", &public, Chain::Eos, [0x55; 32], [0x22; NONCE_SIZE]);

        assert_ne!(blob1.ephemeral, blob2.ephemeral);
        assert_ne!(blob1.ciphertext, blob2.ciphertext);
    }
}
