//! Recovery pipeline errors.
//!
//! Every kind is reported to the user as one human-readable message and
//! the process exits the same way regardless. Validation errors are raised
//! before any record is processed, so they never leave partial output
//! behind; only [`RecoverError::Batch`] can abort mid-file.

use std::{io, path::PathBuf};

use husk_core::BatchError;
use husk_crypto::UnknownChain;
use thiserror::Error;

/// Errors that abort a recovery run.
#[derive(Error, Debug)]
pub enum RecoverError {
    /// Chain argument has no decryption capability
    #[error(transparent)]
    UnsupportedChain(#[from] UnknownChain),

    /// Input file does not exist
    #[error("cannot find input file {}", path.display())]
    InputNotFound {
        /// Path that was checked
        path: PathBuf,
    },

    /// Keys file does not exist
    #[error("cannot find private key file {}", path.display())]
    KeysNotFound {
        /// Path that was checked
        path: PathBuf,
    },

    /// Input file is not a non-empty JSON array of encrypted records
    #[error("input file {} must be a JSON array of encrypted objects", path.display())]
    MalformedInput {
        /// Path that failed validation
        path: PathBuf,
    },

    /// Keys file is not a non-empty JSON array of private key strings
    #[error("keys file {} must be a JSON array of private keys", path.display())]
    MalformedKeys {
        /// Path that failed validation
        path: PathBuf,
    },

    /// Output file could not be created
    #[error("cannot create output file {}: {source}", path.display())]
    Output {
        /// Path that could not be created
        path: PathBuf,
        /// Underlying filesystem error
        source: io::Error,
    },

    /// A record failed to decrypt or the output sink failed mid-batch
    #[error(transparent)]
    Batch(#[from] BatchError),
}
