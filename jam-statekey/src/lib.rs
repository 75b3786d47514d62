//! The 31-byte state-key constructor/parser and the storage/preimage/
//! request classifier (§4.3).
//!
//! This crate implements L3 of the codec: the service-key interleaving
//! scheme (§4.3.1), its inverse parser (§4.3.3), and the two-pass
//! classifier (§4.3.2) that recovers preimage/request/storage structure
//! from a service's flat key/value entries with no explicit tag on the
//! wire.

pub mod classifier;
pub mod error;
pub mod key;

pub use classifier::{classify, ClassifiedEntry, Classification, Label};
pub use error::{Error, Result};
pub use key::{chapter, chapter_service, parse, service_hash, service_hash_from_digest, ParsedKey, KEY_LEN};
