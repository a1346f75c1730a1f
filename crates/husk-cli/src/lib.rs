//! Husk backup recovery tool.
//!
//! Recovers plaintext secrets from an encrypted backup file given the
//! private keys that sealed it. Payloads may be wrapped in multiple
//! encryption layers; with fewer keys than layers the tool peels what it
//! can and writes the residual structure back out, to be fed through the
//! pipeline again once more keys are available.
//!
//! # Architecture
//!
//! This crate is production glue around [`husk_core`]'s resolver and batch
//! processor: it parses arguments, validates the input and key files,
//! selects the chain, and supplies the core with a concrete sealed-blob
//! decryption capability built on [`husk_crypto`].
//!
//! # Components
//!
//! - [`ChainCipher`]: the capability adapter for one chain's sealed blobs
//! - [`run`]: the full recovery pipeline (validate, resolve, write)

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod cipher;
mod error;
mod recover;

pub use cipher::ChainCipher;
pub use error::RecoverError;
pub use recover::{RecoverConfig, run};
