//! Husk backup recovery core.
//!
//! Recovers plaintext secrets from asymmetrically encrypted backup records.
//! A record is either a single encrypted layer or a stack of layers applied
//! in sequence; the caller supplies private keys in encryption order and
//! the resolver peels as many layers as the keys allow, emitting either the
//! recovered secret or the residual structure for a later pass with more
//! keys.
//!
//! # Components
//!
//! - [`resolve`]: decides how many layers of one record can be unwrapped
//!   and with which key
//! - [`process_all`]: strictly sequential batch driver with fail-fast
//!   semantics
//! - [`Cipher`]: capability trait for the underlying asymmetric decryption;
//!   this crate carries no concrete cryptography
//! - [`RecordWriter`]: incremental JSON array output that never holds the
//!   whole result set in memory
//!
//! # Key Ordering
//!
//! Producers wrap payloads innermost-first. [`KeyRing`] names that
//! convention: the first key belongs to the innermost (lowest sequence
//! number) layer, the last key to the outermost. Callers must supply keys
//! pre-sorted to match encryption order.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod batch;
pub mod cipher;
pub mod error;
pub mod keys;
pub mod record;
pub mod resolver;
pub mod writer;

pub use batch::process_all;
pub use cipher::{Cipher, MultiOutcome};
pub use error::{BatchError, DecryptError, WriteError};
pub use keys::KeyRing;
pub use record::{EncryptedLayer, EncryptedRecord, ResolvedOutput};
pub use resolver::resolve;
pub use writer::RecordWriter;
