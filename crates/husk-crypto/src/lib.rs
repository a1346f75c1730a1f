//! Husk Cryptographic Primitives
//!
//! Cryptographic building blocks for Husk backup recovery. Pure functions
//! with deterministic outputs. Callers provide random bytes for
//! deterministic testing.
//!
//! # Blob Lifecycle
//!
//! A backup payload is sealed to a recipient's X25519 public key with an
//! ephemeral key agreement. The shared secret never encrypts anything
//! directly; a one-time AEAD key is derived from it per blob.
//!
//! ```text
//! Ephemeral X25519 Secret × Recipient Public Key
//!        │
//!        ▼
//! HKDF-SHA256 → One-time AEAD key (per blob, per chain)
//!        │
//!        ▼
//! XChaCha20-Poly1305 → Sealed blob (ephemeral pub || nonce || ciphertext)
//! ```
//!
//! Recovery reverses the agreement with the recipient's private key and the
//! ephemeral public key carried in the blob header.
//!
//! # Security
//!
//! Key Separation:
//! - Each blob uses a fresh ephemeral secret, so no two blobs share an AEAD
//!   key even when sealed to the same recipient
//! - The chain label is mixed into key derivation, so a blob sealed for one
//!   chain does not open under another
//! - Both public keys of the agreement are bound into the derived key,
//!   preventing replay against a different recipient
//!
//! Authenticity:
//! - XChaCha20-Poly1305 AEAD provides tamper-proof encryption
//! - Failed authentication tag -> reject blob
//!
//! Hygiene:
//! - Derived AEAD keys are zeroized after use
//! - Private key scalars zeroize on drop

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod chain;
pub mod sealed;

pub use chain::{Chain, UnknownChain};
pub use sealed::{
    EPHEMERAL_SIZE, NONCE_SIZE, SealError, SealedBlob, open, parse_private_key, parse_public_key,
    public_key_for, seal,
};
