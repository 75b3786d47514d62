//! Fixed-length little-endian integers (§4.1.2).

use crate::error::{require, Error, Result};

/// `encode[len](x)`: writes `len` little-endian bytes of `x`.
///
/// Fails with `OutOfRange` if `x` does not fit in `len` bytes.
pub fn encode(x: u64, len: usize) -> Result<Vec<u8>> {
    if len < 8 && x >= (1u64 << (8 * len)) {
        return Err(Error::OutOfRange);
    }
    Ok(x.to_le_bytes()[..len].to_vec())
}

/// Inverse of [`encode`]: reads `len` little-endian bytes and returns the
/// decoded value plus the unconsumed tail.
pub fn decode(buf: &[u8], len: usize) -> Result<(u64, &[u8])> {
    require(buf, len)?;
    let mut bytes = [0u8; 8];
    bytes[..len].copy_from_slice(&buf[..len]);
    Ok((u64::from_le_bytes(bytes), &buf[len..]))
}

macro_rules! fixed_alias {
    ($encode_name:ident, $decode_name:ident, $len:expr) => {
        #[doc = concat!("Fixed-length little-endian encode, ", stringify!($len), " bytes.")]
        pub fn $encode_name(x: u64) -> Result<Vec<u8>> {
            encode(x, $len)
        }

        #[doc = concat!("Fixed-length little-endian decode, ", stringify!($len), " bytes.")]
        pub fn $decode_name(buf: &[u8]) -> Result<(u64, &[u8])> {
            decode(buf, $len)
        }
    };
}

fixed_alias!(encode1, decode1, 1);
fixed_alias!(encode2, decode2, 2);
fixed_alias!(encode4, decode4, 4);
fixed_alias!(encode8, decode8, 8);

/// Identity-encoded fixed-size byte array (hashes, keys, ring roots). Never
/// carries a length prefix.
pub fn encode_bytes<const N: usize>(x: &[u8; N]) -> Vec<u8> {
    x.to_vec()
}

pub fn decode_bytes<const N: usize>(buf: &[u8]) -> Result<([u8; N], &[u8])> {
    require(buf, N)?;
    let mut out = [0u8; N];
    out.copy_from_slice(&buf[..N]);
    Ok((out, &buf[N..]))
}
