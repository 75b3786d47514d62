//! The 31-byte state-key constructor and its inverse (§4.3.1, §4.3.3).

use jam_crypto::Hash32;

/// Every state key is exactly 31 bytes (§3 entity table).
pub const KEY_LEN: usize = 31;

/// `C(i)`: chapter-only key, `i` in `1..=16`. Byte 0 is the chapter,
/// everything else is zero.
pub fn chapter(i: u8) -> [u8; KEY_LEN] {
    let mut key = [0u8; KEY_LEN];
    key[0] = i;
    key
}

/// `C(i, s)` with `i = 255`: the service index is little-endian encoded
/// and interleaved into the odd byte positions 1, 3, 5, 7; everything
/// else is zero.
pub fn chapter_service(i: u8, s: u32) -> [u8; KEY_LEN] {
    let mut key = [0u8; KEY_LEN];
    key[0] = i;
    let s = s.to_le_bytes();
    key[1] = s[0];
    key[3] = s[1];
    key[5] = s[2];
    key[7] = s[3];
    key
}

/// `C(s, h)`: interleave `s`'s little-endian bytes with the first 4
/// bytes of the (already-truncated) 27-byte hash prefix `a`, then append
/// `a`'s remaining 23 bytes untouched.
pub fn service_hash(s: u32, a: &[u8; 27]) -> [u8; KEY_LEN] {
    let n = s.to_le_bytes();
    let mut key = [0u8; KEY_LEN];
    key[0] = n[0];
    key[1] = a[0];
    key[2] = n[1];
    key[3] = a[1];
    key[4] = n[2];
    key[5] = a[2];
    key[6] = n[3];
    key[7] = a[3];
    key[8..31].copy_from_slice(&a[4..27]);
    key
}

/// Truncate a full Blake2b-256 digest to its 27-byte key prefix and
/// build `C(s, h)` from it. `h` is never an identity of the entity
/// itself — it is always a derived digest, per §4.3.1's own caveat.
pub fn service_hash_from_digest(s: u32, h: &Hash32) -> [u8; KEY_LEN] {
    let mut a = [0u8; 27];
    a.copy_from_slice(&h[..27]);
    service_hash(s, &a)
}

/// The three forms `Parse(key)` can return (§4.3.3).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedKey {
    Chapter(u8),
    ChapterService { chapter: u8, service: u32 },
    ServiceHash { service: u32, a: [u8; 27] },
}

/// Inverse of the three constructors above, distinguishing forms purely
/// from which byte positions are zero (§4.3.3).
pub fn parse(key: &[u8; KEY_LEN]) -> ParsedKey {
    if (1..=16).contains(&key[0]) && key[1..].iter().all(|b| *b == 0) {
        return ParsedKey::Chapter(key[0]);
    }

    if key[0] == 255 && key[2] == 0 && key[4] == 0 && key[6] == 0 {
        let service = u32::from_le_bytes([key[1], key[3], key[5], key[7]]);
        return ParsedKey::ChapterService {
            chapter: key[0],
            service,
        };
    }

    let service = u32::from_le_bytes([key[0], key[2], key[4], key[6]]);
    let mut a = [0u8; 27];
    a[0] = key[1];
    a[1] = key[3];
    a[2] = key[5];
    a[3] = key[7];
    a[4..27].copy_from_slice(&key[8..31]);
    ParsedKey::ServiceHash { service, a }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chapter_round_trip() {
        let key = chapter(5);
        assert_eq!(parse(&key), ParsedKey::Chapter(5));
    }

    #[test]
    fn chapter_service_round_trip() {
        let key = chapter_service(255, 0xABCD_1234);
        assert_eq!(
            parse(&key),
            ParsedKey::ChapterService {
                chapter: 255,
                service: 0xABCD_1234,
            }
        );
    }

    #[test]
    fn service_hash_round_trip() {
        let a: [u8; 27] = core::array::from_fn(|i| i as u8);
        let key = service_hash(42, &a);
        match parse(&key) {
            ParsedKey::ServiceHash { service, a: parsed } => {
                assert_eq!(service, 42);
                assert_eq!(parsed, a);
            }
            other => panic!("expected ServiceHash form, got {other:?}"),
        }
    }

    #[test]
    fn service_hash_from_digest_truncates_to_27_bytes() {
        let digest = Hash32::new(core::array::from_fn(|i| i as u8));
        let key = service_hash_from_digest(7, &digest);
        match parse(&key) {
            ParsedKey::ServiceHash { service, a } => {
                assert_eq!(service, 7);
                assert_eq!(a, digest[..27]);
            }
            other => panic!("expected ServiceHash form, got {other:?}"),
        }
    }
}
