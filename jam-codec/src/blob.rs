//! Length-prefixed blob: `var{x}` (§4.1.3).

use crate::error::{require, Result};
use crate::nat;

/// `encode(natural(|x|)) ++ x`.
pub fn encode(x: &[u8]) -> Vec<u8> {
    let mut out = nat::encode(x.len() as u64);
    out.extend_from_slice(x);
    out
}

/// Read a natural length prefix, then exactly that many bytes.
pub fn decode(buf: &[u8]) -> Result<(Vec<u8>, &[u8])> {
    let (len, rest) = nat::decode(buf)?;
    let len = len as usize;
    require(rest, len)?;
    Ok((rest[..len].to_vec(), &rest[len..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip() {
        for payload in [&b""[..], b"a", b"hello world", &[0u8; 300]] {
            let encoded = encode(payload);
            let (decoded, rest) = decode(&encoded).unwrap();
            assert_eq!(decoded, payload);
            assert!(rest.is_empty());
        }
    }

    #[test]
    fn prefix_is_length() {
        let encoded = encode(b"hi");
        assert_eq!(encoded, vec![2, b'h', b'i']);
    }
}
