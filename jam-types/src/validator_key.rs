//! `ValidatorKey`: exact 336-byte concatenation (§3 entity table).

use jam_codec::{fixed, Codec};
use jam_crypto::Hash32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidatorKey {
    pub bandersnatch: Hash32,
    pub ed25519: Hash32,
    pub bls: [u8; 144],
    pub metadata: [u8; 128],
}

impl Codec for ValidatorKey {
    fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(336);
        out.extend(self.bandersnatch.encode());
        out.extend(self.ed25519.encode());
        out.extend(fixed::encode_bytes(&self.bls));
        out.extend(fixed::encode_bytes(&self.metadata));
        out
    }

    fn decode(buf: &[u8]) -> jam_codec::Result<(Self, &[u8])> {
        let (bandersnatch, buf) = Hash32::decode(buf)?;
        let (ed25519, buf) = Hash32::decode(buf)?;
        let (bls, buf) = fixed::decode_bytes::<144>(buf)?;
        let (metadata, buf) = fixed::decode_bytes::<128>(buf)?;
        Ok((
            ValidatorKey {
                bandersnatch,
                ed25519,
                bls,
                metadata,
            },
            buf,
        ))
    }
}
