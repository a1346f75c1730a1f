//! Sequential batch processing.
//!
//! Records resolve strictly one at a time in input order; each result is
//! appended to the writer before the next record starts, so there are
//! never concurrent in-flight decryptions and never reordered output. The
//! first decryption failure aborts the whole batch - no partial-batch
//! continuation - leaving the output exactly as far as the last success.

use std::io::Write;

use crate::{
    cipher::Cipher, error::BatchError, keys::KeyRing, record::EncryptedRecord,
    resolver::resolve, writer::RecordWriter,
};

/// Resolve every record in input order, appending each output to `writer`.
///
/// Returns the number of records processed.
///
/// # Errors
///
/// [`BatchError::Decrypt`] on the first record that fails to resolve,
/// carrying the record's best-effort JSON form for diagnostics;
/// [`BatchError::Write`] when the output sink fails. In both cases nothing
/// further is written and the writer is left unclosed.
pub async fn process_all<W: Write + Send>(
    records: &[EncryptedRecord],
    keys: &KeyRing,
    cipher: &dyn Cipher,
    writer: &mut RecordWriter<W>,
) -> Result<usize, BatchError> {
    let mut count = 0;

    for record in records {
        let output = resolve(record.clone(), keys, cipher).await.map_err(|source| {
            BatchError::Decrypt { record: record.to_diagnostic_json(), source }
        })?;
        writer.push(&output)?;
        count += 1;
    }

    Ok(count)
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::{error::DecryptError, record::EncryptedLayer};

    /// Toy capability: a ciphertext is `"<key>:<inner>"` and decrypting
    /// strips the matching key prefix.
    struct StubCipher;

    #[async_trait]
    impl Cipher for StubCipher {
        async fn decrypt(
            &self,
            ciphertext: &str,
            private_key: &str,
        ) -> Result<String, DecryptError> {
            ciphertext
                .strip_prefix(&format!("{private_key}:"))
                .map(ToString::to_string)
                .ok_or_else(|| DecryptError::Failed { reason: "wrong key".to_string() })
        }
    }

    fn single(ciphertext: &str, public_key: &str) -> EncryptedRecord {
        EncryptedRecord::Single(EncryptedLayer {
            ciphertext: ciphertext.to_string(),
            public_key: public_key.to_string(),
            seq: 0,
        })
    }

    fn ring(keys: &[&str]) -> KeyRing {
        KeyRing::new(keys.iter().map(ToString::to_string).collect())
    }

    #[tokio::test]
    async fn processes_all_records_in_input_order() {
        let records = vec![single("k0:alpha", "pub-a"), single("k0:beta", "pub-b")];
        let mut sink = Vec::new();
        let mut writer = RecordWriter::new(&mut sink, records.len()).unwrap();

        let count =
            process_all(&records, &ring(&["k0"]), &StubCipher, &mut writer).await.unwrap();
        writer.finish().unwrap();

        assert_eq!(count, 2);
        let parsed: Vec<serde_json::Value> = serde_json::from_slice(&sink).unwrap();
        assert_eq!(parsed[0]["finalDecrypted"], "alpha");
        assert_eq!(parsed[1]["finalDecrypted"], "beta");
    }

    #[tokio::test]
    async fn fail_fast_stops_before_later_records() {
        let records = vec![
            single("k0:alpha", "pub-a"),
            single("sealed-with-another-key", "pub-b"),
            single("k0:gamma", "pub-c"),
        ];
        let mut sink = Vec::new();
        let mut writer = RecordWriter::new(&mut sink, records.len()).unwrap();

        let result = process_all(&records, &ring(&["k0"]), &StubCipher, &mut writer).await;

        assert!(matches!(result, Err(BatchError::Decrypt { .. })));
        assert_eq!(writer.written(), 1, "only the record before the failure is written");

        drop(writer);
        let text = String::from_utf8(sink).unwrap();
        assert!(text.contains("alpha"));
        assert!(!text.contains("gamma"), "records after the failure are never processed");
        assert!(!text.ends_with(']'), "aborted batch leaves the array unclosed");
    }

    #[tokio::test]
    async fn failure_carries_record_identity() {
        let records = vec![single("unopenable", "pub-x")];
        let mut sink = Vec::new();
        let mut writer = RecordWriter::new(&mut sink, records.len()).unwrap();

        let err =
            process_all(&records, &ring(&["k0"]), &StubCipher, &mut writer).await.unwrap_err();

        let BatchError::Decrypt { record, .. } = err else {
            panic!("expected a decrypt failure");
        };
        assert!(record.contains("pub-x"), "diagnostics identify the failing record");
    }

    #[tokio::test]
    async fn empty_batch_processes_zero_records() {
        let mut sink = Vec::new();
        let mut writer = RecordWriter::new(&mut sink, 0).unwrap();

        let count = process_all(&[], &ring(&["k0"]), &StubCipher, &mut writer).await.unwrap();

        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn mixed_batch_writes_final_and_remaining_outputs() {
        let records = vec![
            single("k1:alpha", "pub-a"),
            EncryptedRecord::Wrapped(vec![
                EncryptedLayer {
                    ciphertext: "inner".to_string(),
                    public_key: "pub-inner".to_string(),
                    seq: 0,
                },
                EncryptedLayer {
                    ciphertext: "k1:k0:secret".to_string(),
                    public_key: "pub-outer".to_string(),
                    seq: 1,
                },
            ]),
        ];
        let mut sink = Vec::new();
        let mut writer = RecordWriter::new(&mut sink, records.len()).unwrap();

        let count =
            process_all(&records, &ring(&["k1"]), &StubCipher, &mut writer).await.unwrap();
        writer.finish().unwrap();

        assert_eq!(count, 2);
        let parsed: Vec<serde_json::Value> = serde_json::from_slice(&sink).unwrap();
        assert_eq!(parsed[0]["finalDecrypted"], "alpha");
        // The wrapped record lost its outer layer and came back residual
        assert_eq!(parsed[1]["ciphertext"], "k0:secret");
        assert_eq!(parsed[1]["publicKey"], "pub-inner");
    }
}
