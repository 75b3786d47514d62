//! Disputes state: four ordered sets (§4.2 "Disputes").

use jam_codec::{ordered, Codec};
use jam_crypto::Hash32;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Disputes {
    pub good_set: Vec<Hash32>,
    pub bad_set: Vec<Hash32>,
    pub wonky_set: Vec<Hash32>,
    pub offenders: Vec<Hash32>,
}

fn encode_hash_set(items: &[Hash32]) -> Vec<u8> {
    ordered::encode_set(items, |h| h.encode())
}

fn decode_hash_set(buf: &[u8]) -> jam_codec::Result<(Vec<Hash32>, &[u8])> {
    ordered::decode_set(buf, |b| Hash32::decode(b))
}

impl Codec for Disputes {
    fn encode(&self) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend(encode_hash_set(&self.good_set));
        out.extend(encode_hash_set(&self.bad_set));
        out.extend(encode_hash_set(&self.wonky_set));
        out.extend(encode_hash_set(&self.offenders));
        out
    }

    fn decode(buf: &[u8]) -> jam_codec::Result<(Self, &[u8])> {
        let (good_set, buf) = decode_hash_set(buf)?;
        let (bad_set, buf) = decode_hash_set(buf)?;
        let (wonky_set, buf) = decode_hash_set(buf)?;
        let (offenders, buf) = decode_hash_set(buf)?;
        Ok((
            Disputes {
                good_set,
                bad_set,
                wonky_set,
                offenders,
            },
            buf,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn h(b: u8) -> Hash32 {
        Hash32::new([b; 32])
    }

    #[test]
    fn round_trip() {
        let value = Disputes {
            good_set: vec![h(1), h(2)],
            bad_set: vec![h(3)],
            wonky_set: vec![],
            offenders: vec![h(9), h(8)],
        };
        let encoded = value.encode();
        let (decoded, rest) = Disputes::decode(&encoded).unwrap();
        assert_eq!(decoded.bad_set, value.bad_set);
        assert_eq!(decoded.wonky_set, value.wonky_set);
        assert_eq!(decoded.offenders.len(), value.offenders.len());
        assert!(rest.is_empty());
    }

    #[test]
    fn sets_emit_in_ascending_order_regardless_of_input_order() {
        let forward = Disputes {
            good_set: vec![h(1), h(2), h(3)],
            ..Default::default()
        };
        let backward = Disputes {
            good_set: vec![h(3), h(2), h(1)],
            ..Default::default()
        };
        assert_eq!(forward.encode(), backward.encode());
    }
}
