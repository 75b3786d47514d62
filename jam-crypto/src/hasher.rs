use cryptoxide::blake2b::Blake2b;
use cryptoxide::digest::Digest as _;

use crate::hash::Hash;

/// Blake2b digest of `BITS` bits. JAM's state-key scheme and classifier
/// only ever need the 256-bit variant, but the bit-width is kept generic
/// the way `pallas_crypto::hash::Hasher<BITS>` keeps it generic, since the
/// underlying `cryptoxide::blake2b::Blake2b` primitive supports any of
/// them.
pub struct Hasher<const BITS: usize>(Blake2b);

impl<const BITS: usize> Hasher<BITS> {
    #[inline]
    pub fn input(&mut self, bytes: &[u8]) {
        self.0.input(bytes);
    }
}

macro_rules! common_hasher {
    ($size:literal) => {
        impl Hasher<$size> {
            #[inline]
            pub fn new() -> Self {
                Self(Blake2b::new($size / 8))
            }

            /// Directly hash `bytes` without manually driving [`Hasher::input`].
            #[inline]
            pub fn hash(bytes: &[u8]) -> Hash<{ $size / 8 }> {
                let mut hasher = Self::new();
                hasher.input(bytes);
                hasher.finalize()
            }

            #[inline]
            pub fn finalize(mut self) -> Hash<{ $size / 8 }> {
                let mut out = [0u8; $size / 8];
                self.0.result(&mut out);
                Hash::new(out)
            }
        }

        impl Default for Hasher<$size> {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}

common_hasher!(256);

/// Blake2b-256: the one hash function the state-key scheme and the
/// classifier require (spec.md §1, §4.3.2).
pub fn blake2b_256(bytes: &[u8]) -> Hash<32> {
    Hasher::<256>::hash(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic_and_sensitive_to_input() {
        let a = blake2b_256(b"My transaction");
        let b = blake2b_256(b"My transaction");
        assert_eq!(a, b);

        let c = blake2b_256(b"My Transaction");
        assert_ne!(a, c);
        assert_eq!(a.len(), 32);
    }

    #[test]
    fn incremental_matches_one_shot() {
        let mut hasher = Hasher::<256>::new();
        hasher.input(b"hello ");
        hasher.input(b"world");
        let incremental = hasher.finalize();
        let one_shot = blake2b_256(b"hello world");
        assert_eq!(incremental, one_shot);
    }
}
