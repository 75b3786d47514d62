//! The outer fuzz wire envelope for JAM conformance fuzzing (§4.5).
//!
//! Composes every lower layer (`jam-codec`, `jam-crypto`, `jam-types`,
//! `jam-statekey`) into a single discriminated message type. Like the
//! rest of this codec, this crate is a pure value codec: no sockets, no
//! framing beyond the one-byte discriminator the spec itself defines.

pub mod ancestry;
pub mod error;
pub mod kv;
pub mod message;
pub mod peer_info;

pub use ancestry::{Ancestry, AncestryItem};
pub use error::{Error, Result};
pub use kv::{KeyValue, KeyValueSequence};
pub use message::{FuzzMessage, Initialize};
pub use peer_info::PeerInfo;
