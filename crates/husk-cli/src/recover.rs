//! The recovery pipeline.
//!
//! Validation happens up front: chain selection, file existence, and JSON
//! shape are all checked before the first record is touched, so those
//! failures never produce partial output. Once processing starts the
//! output file fills incrementally; a decryption failure aborts with
//! whatever was already written, without the closing bracket.

use std::{
    fs::{self, File},
    path::{Path, PathBuf},
};

use husk_core::{BatchError, EncryptedRecord, KeyRing, RecordWriter, process_all};
use husk_crypto::Chain;
use tracing::info;

use crate::{cipher::ChainCipher, error::RecoverError};

/// File locations and chain selection for one recovery run.
#[derive(Debug, Clone)]
pub struct RecoverConfig {
    /// Chain whose keys sealed the backup
    pub chain: String,
    /// Backup file: JSON array of encrypted records
    pub input: PathBuf,
    /// Private keys file: JSON array, innermost layer's key first
    pub keys: PathBuf,
    /// Where to write recovered and residual payloads
    pub output: PathBuf,
}

/// Run a full recovery pass.
///
/// Returns the number of records processed.
///
/// # Errors
///
/// Any [`RecoverError`]; see the variants for which failures abort before
/// processing and which can abort mid-batch.
pub async fn run(config: &RecoverConfig) -> Result<usize, RecoverError> {
    let chain: Chain = config.chain.parse()?;

    if !config.input.exists() {
        return Err(RecoverError::InputNotFound { path: config.input.clone() });
    }
    if !config.keys.exists() {
        return Err(RecoverError::KeysNotFound { path: config.keys.clone() });
    }

    let records = load_records(&config.input)?;
    let keys = load_keys(&config.keys)?;

    info!("Decrypting for {}...", chain.name().to_uppercase());

    let file = File::create(&config.output)
        .map_err(|source| RecoverError::Output { path: config.output.clone(), source })?;
    let mut writer = RecordWriter::new(file, records.len()).map_err(BatchError::from)?;

    let cipher = ChainCipher::new(chain);
    let count = process_all(&records, &keys, &cipher, &mut writer).await?;
    writer.finish().map_err(BatchError::from)?;

    info!("Decrypted {count} payload(s)");
    Ok(count)
}

fn load_records(path: &Path) -> Result<Vec<EncryptedRecord>, RecoverError> {
    let malformed = || RecoverError::MalformedInput { path: path.to_path_buf() };

    let raw = fs::read_to_string(path).map_err(|_| malformed())?;
    let records: Vec<EncryptedRecord> = serde_json::from_str(&raw).map_err(|_| malformed())?;
    if records.is_empty() {
        return Err(malformed());
    }
    Ok(records)
}

fn load_keys(path: &Path) -> Result<KeyRing, RecoverError> {
    let malformed = || RecoverError::MalformedKeys { path: path.to_path_buf() };

    let raw = fs::read_to_string(path).map_err(|_| malformed())?;
    let keys: KeyRing = serde_json::from_str(&raw).map_err(|_| malformed())?;
    if keys.is_empty() {
        return Err(malformed());
    }
    Ok(keys)
}
