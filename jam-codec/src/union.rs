//! Discriminated union: one-byte tag selecting a payload decoder (§4.1.5).

use crate::error::{require, Error, Result};

/// Prefix a one-byte discriminator onto an already-encoded payload.
pub fn encode(tag: u8, payload: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(1 + payload.len());
    out.push(tag);
    out.extend_from_slice(payload);
    out
}

/// Read the one-byte discriminator, returning it and the unconsumed tail.
/// Callers dispatch on the tag themselves; an unrecognized tag is this
/// module's `UnknownVariant`.
pub fn decode_tag(buf: &[u8]) -> Result<(u8, &[u8])> {
    require(buf, 1)?;
    Ok((buf[0], &buf[1..]))
}

pub fn unknown_variant(tag: u8) -> Error {
    Error::UnknownVariant(tag)
}
