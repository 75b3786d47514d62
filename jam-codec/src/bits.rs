//! Bit sequences, LSB-first packing (§4.1.7).
//!
//! Bit `i` of the logical input lands in bit `i mod 8` of byte `i / 8`.

use crate::error::{require, Result};
use crate::nat;

fn pack(bits: &[bool]) -> Vec<u8> {
    let mut out = vec![0u8; bits.len().div_ceil(8)];
    for (i, bit) in bits.iter().enumerate() {
        if *bit {
            out[i / 8] |= 1 << (i % 8);
        }
    }
    out
}

fn unpack(buf: &[u8], count: usize) -> Vec<bool> {
    (0..count).map(|i| (buf[i / 8] >> (i % 8)) & 1 == 1).collect()
}

/// Length-prefixed bit sequence: natural bit count, then the packed bytes.
pub fn encode_var(bits: &[bool]) -> Vec<u8> {
    let mut out = nat::encode(bits.len() as u64);
    out.extend(pack(bits));
    out
}

pub fn decode_var(buf: &[u8]) -> Result<(Vec<bool>, &[u8])> {
    let (count, rest) = nat::decode(buf)?;
    let count = count as usize;
    let byte_len = count.div_ceil(8);
    require(rest, byte_len)?;
    Ok((unpack(rest, count), &rest[byte_len..]))
}

/// Caller-supplied bit count, no length prefix (e.g. the assurance
/// availability bitfield, whose length is tied to `Ccorecount`).
pub fn encode_fixed(bits: &[bool], count: usize) -> Vec<u8> {
    debug_assert_eq!(bits.len(), count);
    pack(bits)
}

pub fn decode_fixed(buf: &[u8], count: usize) -> Result<(Vec<bool>, &[u8])> {
    let byte_len = count.div_ceil(8);
    require(buf, byte_len)?;
    Ok((unpack(buf, count), &buf[byte_len..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lsb_first_packing() {
        let bits = vec![true, false, true, false, false, false, false, false];
        let packed = pack(&bits);
        assert_eq!(packed, vec![0b0000_0101]);
    }

    #[test]
    fn round_trip_var() {
        let bits = vec![true, true, false, true, false, false, true, false, true];
        let encoded = encode_var(&bits);
        let (decoded, rest) = decode_var(&encoded).unwrap();
        assert_eq!(decoded, bits);
        assert!(rest.is_empty());
    }

    #[test]
    fn round_trip_fixed() {
        let bits = vec![false, true, true, false, true];
        let encoded = encode_fixed(&bits, 5);
        let (decoded, rest) = decode_fixed(&encoded, 5).unwrap();
        assert_eq!(decoded, bits);
        assert!(rest.is_empty());
    }

    #[test]
    fn empty() {
        let encoded = encode_var(&[]);
        assert_eq!(encoded, vec![0]);
        let (decoded, rest) = decode_var(&encoded).unwrap();
        assert!(decoded.is_empty());
        assert!(rest.is_empty());
    }
}
