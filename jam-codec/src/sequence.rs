//! Homogeneous sequences: variable (length-prefixed) and fixed-count (§4.1.6).

use crate::error::Result;
use crate::nat;

/// Variable sequence: a natural length prefix followed by that many
/// element encodings.
pub fn encode_var<T>(items: &[T], encode_item: impl Fn(&T) -> Vec<u8>) -> Vec<u8> {
    let mut out = nat::encode(items.len() as u64);
    for item in items {
        out.extend(encode_item(item));
    }
    out
}

/// Inverse of [`encode_var`].
pub fn decode_var<'a, T>(
    buf: &'a [u8],
    mut decode_item: impl FnMut(&'a [u8]) -> Result<(T, &'a [u8])>,
) -> Result<(Vec<T>, &'a [u8])> {
    let (count, mut rest) = nat::decode(buf)?;
    let mut items = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let (item, tail) = decode_item(rest)?;
        items.push(item);
        rest = tail;
    }
    Ok((items, rest))
}

/// Fixed-count sequence: no length prefix, the count is supplied by the
/// caller (derived from configuration or surrounding context).
pub fn encode_fixed<T>(items: &[T], encode_item: impl Fn(&T) -> Vec<u8>) -> Vec<u8> {
    let mut out = Vec::new();
    for item in items {
        out.extend(encode_item(item));
    }
    out
}

/// Inverse of [`encode_fixed`]; `count` must be supplied by the caller.
pub fn decode_fixed<'a, T>(
    buf: &'a [u8],
    count: usize,
    mut decode_item: impl FnMut(&'a [u8]) -> Result<(T, &'a [u8])>,
) -> Result<(Vec<T>, &'a [u8])> {
    let mut items = Vec::with_capacity(count);
    let mut rest = buf;
    for _ in 0..count {
        let (item, tail) = decode_item(rest)?;
        items.push(item);
        rest = tail;
    }
    Ok((items, rest))
}
