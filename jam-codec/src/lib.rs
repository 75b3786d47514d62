//! Low-level binary codec kernel for the JAM protocol.
//!
//! Pure, stateless functions over octet sequences, composed by the higher
//! `jam-types`/`jam-statekey`/`jam-fuzz` crates into entity codecs. Nothing
//! here performs I/O or holds state; every decoder hands back the value it
//! read and the unconsumed tail of its input so callers can compose freely.

pub mod bits;
pub mod blob;
pub mod error;
pub mod fixed;
pub mod nat;
pub mod optional;
pub mod ordered;
pub mod sequence;
pub mod union;

pub use error::{Error, Result};

/// The composition seam every entity in `jam-types` implements: the
/// equivalent of `pallas_codec::Fragment`, but for this codec's own wire
/// format rather than CBOR.
pub trait Codec: Sized {
    fn encode(&self) -> Vec<u8>;
    fn decode(buf: &[u8]) -> Result<(Self, &[u8])>;

    /// Decode and require the entire buffer to be consumed.
    fn decode_exact(buf: &[u8]) -> Result<Self> {
        let (value, rest) = Self::decode(buf)?;
        if !rest.is_empty() {
            return Err(Error::ShapeMismatch("trailing bytes after decode"));
        }
        Ok(value)
    }
}
