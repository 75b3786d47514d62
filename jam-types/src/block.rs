//! Block body and the full block (§7 supplement).

use crate::config::Config;
use crate::error::Result;
use crate::extrinsic::Extrinsic;
use crate::header::BlockHeader;

/// A block: a header plus the five extrinsic lists it authorizes
/// (tickets, preimages, guarantees, assurances, disputes). Both halves
/// are pure compositions over the L1 kernel; neither carries invariants
/// beyond "each field round-trips" (§7 supplement).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Block {
    pub header: BlockHeader,
    pub extrinsic: Extrinsic,
}

impl Block {
    pub fn encode(&self, config: &Config) -> Vec<u8> {
        let mut out = self.header.encode();
        out.extend(self.extrinsic.encode(config));
        out
    }

    pub fn decode<'a>(buf: &'a [u8], config: &Config) -> Result<(Self, &'a [u8])> {
        let (header, buf) = BlockHeader::decode(buf)?;
        let (extrinsic, buf) = Extrinsic::decode(buf, config)?;
        Ok((Block { header, extrinsic }, buf))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extrinsic::{PreimagesExtrinsic, Preimage};
    use jam_codec::Codec;
    use jam_crypto::Hash32;

    #[test]
    fn round_trip() {
        let config = Config::tiny();
        let header = BlockHeader {
            parent: Hash32::new([1; 32]),
            prior_state_root: Hash32::new([2; 32]),
            extrinsic_hash: Hash32::new([3; 32]),
            timeslot: 1,
            epoch_mark: None,
            tickets_mark: None,
            offenders_mark: vec![],
            author_index: 0,
            vrf_signature: vec![0xAA; 96],
            seal_signature: vec![0xBB; 96],
        };
        let extrinsic = Extrinsic {
            preimages: PreimagesExtrinsic(vec![Preimage {
                requester: 1,
                blob: vec![9, 9, 9],
            }]),
            ..Default::default()
        };
        let block = Block { header, extrinsic };
        let encoded = block.encode(&config);
        let (decoded, rest) = Block::decode(&encoded, &config).unwrap();
        assert_eq!(decoded, block);
        assert!(rest.is_empty());
    }
}
