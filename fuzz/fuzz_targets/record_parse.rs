//! Fuzz target for backup record JSON parsing
//!
//! # Strategy
//!
//! - Arbitrary bytes through the JSON parser (general malformation)
//! - Parsed records through flatten and diagnostics serialization
//!
//! # Invariants
//!
//! - Arbitrary input never panics the parser
//! - flatten() never increases the layer count
//! - Every parsed record serializes back to diagnostics JSON

#![no_main]

use husk_core::EncryptedRecord;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(record) = serde_json::from_slice::<EncryptedRecord>(data) else {
        return;
    };

    let count = record.layer_count();
    let flattened = record.flatten();
    assert!(flattened.layer_count() <= count);

    let _ = flattened.to_diagnostic_json();
});
