//! Entropy state: four 32-byte hashes, fixed 128 bytes (§4.2 "Entropy state").

use jam_codec::Codec;
use jam_crypto::Hash32;

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entropy {
    pub accumulator: Hash32,
    pub e1: Hash32,
    pub e2: Hash32,
    pub e3: Hash32,
}

impl Codec for Entropy {
    fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(128);
        out.extend(self.accumulator.encode());
        out.extend(self.e1.encode());
        out.extend(self.e2.encode());
        out.extend(self.e3.encode());
        out
    }

    fn decode(buf: &[u8]) -> jam_codec::Result<(Self, &[u8])> {
        let (accumulator, buf) = Hash32::decode(buf)?;
        let (e1, buf) = Hash32::decode(buf)?;
        let (e2, buf) = Hash32::decode(buf)?;
        let (e3, buf) = Hash32::decode(buf)?;
        Ok((
            Entropy {
                accumulator,
                e1,
                e2,
                e3,
            },
            buf,
        ))
    }
}

impl Entropy {
    pub fn decode_checked(buf: &[u8]) -> Result<Self> {
        Ok(Self::decode_exact(buf)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_all_same_hash() {
        let h = Hash32::new([0x42; 32]);
        let entropy = Entropy {
            accumulator: h,
            e1: h,
            e2: h,
            e3: h,
        };
        let encoded = entropy.encode();
        assert_eq!(encoded.len(), 128);
        assert!(encoded.iter().all(|b| *b == 0x42));

        let (decoded, rest) = Entropy::decode(&encoded).unwrap();
        assert_eq!(decoded, entropy);
        assert!(rest.is_empty());
    }

    #[test]
    fn insufficient_data() {
        let h = Hash32::new([0x42; 32]);
        let encoded = Entropy {
            accumulator: h,
            e1: h,
            e2: h,
            e3: h,
        }
        .encode();
        assert!(Entropy::decode(&encoded[..32]).is_err());
    }
}
