//! Availability assurances (§3, §4.2 "Assurance").

use jam_codec::{bits, blob, fixed, ordered, sequence};
use jam_crypto::Hash32;

use crate::config::Config;
use crate::error::Result;

/// One validator's availability assurance for the parent block: which
/// cores it judges available, packed LSB-first into a `Ccorecount`-sized
/// bitfield (spec.md §9 resolves this as an explicit config-derived
/// length, not a hardcoded byte count).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assurance {
    pub anchor: Hash32,
    pub availability: Vec<bool>,
    pub assurer: u16,
    pub signature: Vec<u8>,
}

impl Assurance {
    pub fn encode(&self, config: &Config) -> Vec<u8> {
        let mut out = self.anchor.encode();
        out.extend(bits::encode_fixed(
            &self.availability,
            config.assurance_bitfield_bytes() * 8,
        ));
        out.extend(fixed::encode2(self.assurer as u64).expect("u16 fits in 2 bytes"));
        out.extend(blob::encode(&self.signature));
        out
    }

    pub fn decode<'a>(buf: &'a [u8], config: &Config) -> Result<(Self, &'a [u8])> {
        let (anchor, buf) = Hash32::decode(buf)?;
        let (availability, buf) =
            bits::decode_fixed(buf, config.assurance_bitfield_bytes() * 8)?;
        let (assurer, buf) = fixed::decode2(buf)?;
        let (signature, buf) = blob::decode(buf)?;
        Ok((
            Assurance {
                anchor,
                availability,
                assurer: assurer as u16,
                signature,
            },
            buf,
        ))
    }
}

/// The assurances extrinsic: a sequence of [`Assurance`] emitted in
/// ascending order of `anchor` (spec.md §3's "ordered by anchor within a
/// sequence" invariant, §4.2's "ordered by anchor ascending"). Since
/// `anchor` is the leading field of each assurance's own encoding,
/// sorting the full encoded entries ascending sorts by `anchor` first,
/// exactly like [`crate::disputes::Disputes`]'s hash sets.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssurancesExtrinsic(pub Vec<Assurance>);

impl AssurancesExtrinsic {
    pub fn encode(&self, config: &Config) -> Vec<u8> {
        ordered::encode_set(&self.0, |a| a.encode(config))
    }

    pub fn decode<'a>(buf: &'a [u8], config: &Config) -> Result<(Self, &'a [u8])> {
        let (assurances, buf) = sequence::decode_var(buf, |b| Assurance::decode(b, config))?;
        Ok((AssurancesExtrinsic(assurances), buf))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip() {
        let config = Config::tiny();
        let bits = config.assurance_bitfield_bytes() * 8;
        let value = Assurance {
            anchor: Hash32::new([7; 32]),
            availability: (0..bits).map(|i| i % 2 == 0).collect(),
            assurer: 3,
            signature: vec![0xAB; 64],
        };
        let encoded = value.encode(&config);
        assert_eq!(
            encoded.len(),
            32 + config.assurance_bitfield_bytes() + 2 + 1 + 64
        );
        let (decoded, rest) = Assurance::decode(&encoded, &config).unwrap();
        assert_eq!(decoded, value);
        assert!(rest.is_empty());
    }

    #[test]
    fn extrinsic_round_trip() {
        let config = Config::tiny();
        let bits = config.assurance_bitfield_bytes() * 8;
        let make = |assurer: u16| Assurance {
            anchor: Hash32::new([assurer as u8; 32]),
            availability: vec![false; bits],
            assurer,
            signature: vec![],
        };
        let value = AssurancesExtrinsic(vec![make(0), make(1)]);
        let encoded = value.encode(&config);
        let (decoded, rest) = AssurancesExtrinsic::decode(&encoded, &config).unwrap();
        assert_eq!(decoded, value);
        assert!(rest.is_empty());
    }

    #[test]
    fn extrinsic_emits_in_ascending_anchor_order_regardless_of_input_order() {
        let config = Config::tiny();
        let bits = config.assurance_bitfield_bytes() * 8;
        let make = |anchor: u8| Assurance {
            anchor: Hash32::new([anchor; 32]),
            availability: vec![false; bits],
            assurer: 0,
            signature: vec![],
        };
        let forward = AssurancesExtrinsic(vec![make(1), make(2), make(3)]);
        let backward = AssurancesExtrinsic(vec![make(3), make(2), make(1)]);
        assert_eq!(forward.encode(&config), backward.encode(&config));

        let (decoded, rest) = AssurancesExtrinsic::decode(&forward.encode(&config), &config).unwrap();
        assert_eq!(decoded.0, vec![make(1), make(2), make(3)]);
        assert!(rest.is_empty());
    }
}
