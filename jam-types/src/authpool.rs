//! Authorization pool state (§4.2 "Authorization pool").

use jam_codec::sequence;
use jam_crypto::Hash32;

use crate::config::{Config, AUTH_POOL_SIZE};
use crate::error::{Error, Result};

/// One core's authorizer-hash pool: at most `AUTH_POOL_SIZE` entries.
/// Empty slots are simply omitted on the wire; any canonical zero-hash
/// padding is a presentation detail for the caller, not part of the
/// wire format (spec.md §4.2).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoreAuthPool(pub Vec<Hash32>);

impl CoreAuthPool {
    fn encode(&self) -> Vec<u8> {
        sequence::encode_var(&self.0, |h| h.encode())
    }

    fn decode(buf: &[u8]) -> Result<(Self, &[u8])> {
        let (hashes, buf) = sequence::decode_var(buf, |b| Hash32::decode(b))?;
        if hashes.len() > AUTH_POOL_SIZE {
            return Err(Error::ShapeMismatch(
                "per-core authorizer pool exceeds C_AUTHPOOLSIZE",
            ));
        }
        Ok((CoreAuthPool(hashes), buf))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AuthPool(pub Vec<CoreAuthPool>);

impl AuthPool {
    pub fn encode(&self) -> Vec<u8> {
        sequence::encode_fixed(&self.0, |pool| pool.encode())
    }

    pub fn decode<'a>(buf: &'a [u8], config: &Config) -> Result<(Self, &'a [u8])> {
        let (pools, buf) = sequence::decode_fixed(buf, config.core_count as usize, |b| {
            CoreAuthPool::decode(b)
        })?;
        Ok((AuthPool(pools), buf))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip() {
        let config = Config::tiny();
        let value = AuthPool(
            (0..config.core_count)
                .map(|i| CoreAuthPool(vec![Hash32::new([i as u8; 32]); (i as usize) % 3]))
                .collect(),
        );
        let encoded = value.encode();
        let (decoded, rest) = AuthPool::decode(&encoded, &config).unwrap();
        assert_eq!(decoded, value);
        assert!(rest.is_empty());
    }

    #[test]
    fn rejects_oversize_pool() {
        let oversize = CoreAuthPool(vec![Hash32::new([0; 32]); AUTH_POOL_SIZE + 1]);
        let encoded = oversize.encode();
        assert!(CoreAuthPool::decode(&encoded).is_err());
    }
}
