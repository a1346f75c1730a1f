//! Incremental JSON array output.
//!
//! Results stream to the sink as they are produced: open bracket up front,
//! one compact element per line with a trailing comma on all but the last,
//! closing bracket only on [`RecordWriter::finish`]. Large batches never
//! hold the whole serialized array in memory; the price is that the element
//! count must be known up front for comma placement, and an aborted batch
//! leaves a syntactically incomplete file behind.

use std::io::Write;

use crate::{error::WriteError, record::ResolvedOutput};

/// Owned JSON-array writer over any byte sink.
#[derive(Debug)]
pub struct RecordWriter<W: Write> {
    sink: W,
    expected: usize,
    written: usize,
}

impl<W: Write> RecordWriter<W> {
    /// Open the array, writing the leading bracket immediately.
    ///
    /// `expected` is the total number of elements this writer will receive;
    /// it decides comma placement.
    pub fn new(mut sink: W, expected: usize) -> Result<Self, WriteError> {
        sink.write_all(b"[\n")?;
        Ok(Self { sink, expected, written: 0 })
    }

    /// Append one result element.
    pub fn push(&mut self, output: &ResolvedOutput) -> Result<(), WriteError> {
        let element = serde_json::to_string(output)?;
        self.sink.write_all(element.as_bytes())?;
        self.written += 1;
        if self.written < self.expected {
            self.sink.write_all(b",\n")?;
        }
        Ok(())
    }

    /// Number of elements written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Close the array and flush, returning the sink.
    pub fn finish(mut self) -> Result<W, WriteError> {
        self.sink.write_all(b"\n]")?;
        self.sink.flush()?;
        Ok(self.sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{EncryptedLayer, EncryptedRecord};

    fn final_output(tag: &str) -> ResolvedOutput {
        ResolvedOutput::Final {
            public_key: format!("pub-{tag}"),
            final_decrypted: format!("secret-{tag}"),
        }
    }

    #[test]
    fn empty_batch_is_a_valid_empty_array() {
        let mut sink = Vec::new();
        let writer = RecordWriter::new(&mut sink, 0).unwrap();
        writer.finish().unwrap();

        let parsed: Vec<serde_json::Value> = serde_json::from_slice(&sink).unwrap();
        assert!(parsed.is_empty());
    }

    #[test]
    fn elements_are_comma_separated_without_trailing_comma() {
        let mut sink = Vec::new();
        let mut writer = RecordWriter::new(&mut sink, 2).unwrap();
        writer.push(&final_output("a")).unwrap();
        writer.push(&final_output("b")).unwrap();
        writer.finish().unwrap();

        let text = String::from_utf8(sink).unwrap();
        assert_eq!(
            text,
            "[\n{\"publicKey\":\"pub-a\",\"finalDecrypted\":\"secret-a\"},\n\
             {\"publicKey\":\"pub-b\",\"finalDecrypted\":\"secret-b\"}\n]"
        );
    }

    #[test]
    fn single_element_has_no_separator() {
        let mut sink = Vec::new();
        let mut writer = RecordWriter::new(&mut sink, 1).unwrap();
        writer.push(&final_output("a")).unwrap();
        writer.finish().unwrap();

        let text = String::from_utf8(sink).unwrap();
        assert!(!text.contains(','), "single element must not be followed by a comma");
    }

    #[test]
    fn output_parses_back_as_json_array() {
        let mut sink = Vec::new();
        let mut writer = RecordWriter::new(&mut sink, 2).unwrap();
        writer.push(&final_output("a")).unwrap();
        writer
            .push(&ResolvedOutput::Remaining(EncryptedRecord::Single(EncryptedLayer {
                ciphertext: "ct".to_string(),
                public_key: "pub".to_string(),
                seq: 0,
            })))
            .unwrap();
        writer.finish().unwrap();

        let parsed: Vec<serde_json::Value> = serde_json::from_slice(&sink).unwrap();
        assert_eq!(parsed.len(), 2);
    }

    #[test]
    fn abandoned_writer_leaves_array_unclosed() {
        let mut sink = Vec::new();
        {
            let mut writer = RecordWriter::new(&mut sink, 2).unwrap();
            writer.push(&final_output("a")).unwrap();
        }

        let text = String::from_utf8(sink).unwrap();
        assert!(text.starts_with("[\n"));
        assert!(!text.ends_with(']'), "closing bracket is only written by finish");
    }

    #[test]
    fn written_tracks_pushed_elements() {
        let mut sink = Vec::new();
        let mut writer = RecordWriter::new(&mut sink, 3).unwrap();
        assert_eq!(writer.written(), 0);
        writer.push(&final_output("a")).unwrap();
        assert_eq!(writer.written(), 1);
    }
}
