//! `Initialize`'s ancestry list: one `(slot, header hash)` pair per
//! ancestor the fuzz target needs preloaded (§4.5).

use jam_codec::{fixed, sequence, Codec};
use jam_crypto::Hash32;

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AncestryItem {
    pub slot: u32,
    pub header_hash: Hash32,
}

impl AncestryItem {
    pub fn encode(&self) -> Vec<u8> {
        let mut out = fixed::encode4(self.slot as u64).expect("u32 fits in 4 bytes");
        out.extend(self.header_hash.encode());
        out
    }

    pub fn decode(buf: &[u8]) -> jam_codec::Result<(Self, &[u8])> {
        let (slot, buf) = fixed::decode4(buf)?;
        let (header_hash, buf) = Hash32::decode(buf)?;
        Ok((
            AncestryItem {
                slot: slot as u32,
                header_hash,
            },
            buf,
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Ancestry(pub Vec<AncestryItem>);

impl Ancestry {
    pub fn encode(&self) -> Vec<u8> {
        sequence::encode_var(&self.0, |item| item.encode())
    }

    pub fn decode(buf: &[u8]) -> Result<(Self, &[u8])> {
        let (items, buf) = sequence::decode_var(buf, |b| AncestryItem::decode(b))?;
        Ok((Ancestry(items), buf))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip() {
        let value = Ancestry(vec![
            AncestryItem {
                slot: 1,
                header_hash: Hash32::new([1; 32]),
            },
            AncestryItem {
                slot: 2,
                header_hash: Hash32::new([2; 32]),
            },
        ]);
        let encoded = value.encode();
        let (decoded, rest) = Ancestry::decode(&encoded).unwrap();
        assert_eq!(decoded, value);
        assert!(rest.is_empty());
    }
}
