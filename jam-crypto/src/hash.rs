use std::{fmt, ops::Deref, str::FromStr};

use jam_codec::{Codec, Result};

/// A digest (or any other fixed-size identity-encoded blob) of `BYTES`
/// bytes. Identity-encoded: never carries a length prefix on the wire.
///
/// Cardano's `pallas_crypto::hash::Hash<BYTES>` is the model for this type;
/// JAM additionally needs a 144-byte variant for the Bandersnatch ring
/// root, which is not itself a hash digest — see [`RingRoot`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hash<const BYTES: usize>([u8; BYTES]);

impl<const BYTES: usize> Hash<BYTES> {
    #[inline]
    pub const fn new(bytes: [u8; BYTES]) -> Self {
        Self(bytes)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self([0u8; BYTES])
    }
}

impl<const BYTES: usize> From<[u8; BYTES]> for Hash<BYTES> {
    #[inline]
    fn from(bytes: [u8; BYTES]) -> Self {
        Self::new(bytes)
    }
}

impl<const BYTES: usize> AsRef<[u8]> for Hash<BYTES> {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl<const BYTES: usize> Deref for Hash<BYTES> {
    type Target = [u8; BYTES];

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const BYTES: usize> fmt::Debug for Hash<BYTES> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(&format!("Hash<{BYTES}>"))
            .field(&hex::encode(self.0))
            .finish()
    }
}

impl<const BYTES: usize> fmt::Display for Hash<BYTES> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl<const BYTES: usize> FromStr for Hash<BYTES> {
    type Err = hex::FromHexError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut bytes = [0u8; BYTES];
        hex::decode_to_slice(s, &mut bytes)?;
        Ok(Self::new(bytes))
    }
}

impl<const BYTES: usize> Codec for Hash<BYTES> {
    fn encode(&self) -> Vec<u8> {
        jam_codec::fixed::encode_bytes(&self.0)
    }

    fn decode(buf: &[u8]) -> Result<(Self, &[u8])> {
        let (bytes, rest) = jam_codec::fixed::decode_bytes::<BYTES>(buf)?;
        Ok((Self::new(bytes), rest))
    }
}

/// 32-byte digests: Blake2b-256 outputs and Ed25519 public keys.
pub type Hash32 = Hash<32>;

/// The 144-byte Bandersnatch ring root (§3 entity table). Distinct from
/// `Hash32`: it is not a cryptographic digest, just an identity-encoded
/// blob of fixed size that happens to share the wire shape.
pub type RingRoot = Hash<144>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_str_round_trip() {
        let h: Hash32 = "0d8d00cdd4657ac84d82f0a56067634a7adfdf43da41cb534bcaa45060973d2"
            .parse()
            .unwrap();
        assert_eq!(h.to_string(), "0d8d00cdd4657ac84d82f0a56067634a7adfdf43da41cb534bcaa45060973d2");
    }

    #[test]
    fn codec_round_trip() {
        let h = Hash32::new([0x42; 32]);
        let encoded = h.encode();
        assert_eq!(encoded.len(), 32);
        let (decoded, rest) = Hash32::decode(&encoded).unwrap();
        assert_eq!(decoded, h);
        assert!(rest.is_empty());
    }
}
