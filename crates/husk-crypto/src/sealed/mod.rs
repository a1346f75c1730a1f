//! Sealed-blob encryption for backup payloads.
//!
//! ECIES-style construction: an ephemeral X25519 agreement with the
//! recipient key derives a one-time XChaCha20-Poly1305 key via HKDF-SHA256.
//! The blob carries everything recovery needs besides the recipient's
//! private key: the ephemeral public key, the nonce, and the ciphertext.
//!
//! All functions are pure - random bytes must be provided by the caller.

mod blob;
mod derivation;
mod encryption;
mod error;
mod keys;

pub use blob::{EPHEMERAL_SIZE, NONCE_SIZE, SealedBlob};
pub use encryption::{open, seal};
pub use error::SealError;
pub use keys::{parse_private_key, parse_public_key, public_key_for};
