//! Fuzz target for sealed blob decoding
//!
//! # Strategy
//!
//! - Arbitrary strings through the hex decoder (malformed encodings)
//! - Structurally valid blobs re-encoded and decoded again
//! - Decoded blobs opened with a fixed key (authentication path)
//!
//! # Invariants
//!
//! - Decoding never panics on arbitrary input
//! - decode(encode(blob)) round-trips for every decodable input
//! - Opening an arbitrary blob returns an error, never panics

#![no_main]

use husk_crypto::{Chain, SealedBlob, open, parse_private_key};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let Ok(blob) = SealedBlob::decode(text) else {
        return;
    };

    let reencoded = blob.encode();
    let again = SealedBlob::decode(&reencoded).expect("re-decode of a valid blob");
    assert_eq!(blob, again);

    let secret = parse_private_key(&"11".repeat(32)).expect("fixed test key");
    let _ = open(&blob, &secret, Chain::Ethereum);
});
