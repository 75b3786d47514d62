//! Ordered sets and dictionaries (§4.1.8, §4.1.9).
//!
//! "Ordered" is an emission-time contract, not a data-structure choice:
//! implementations may use any in-memory container, provided they sort by
//! canonical encoding of the key/element before emission (§5, §9).

use crate::error::Result;
use crate::sequence;

/// A variable sequence, emitted in ascending byte order of each element's
/// canonical encoding. Decoding is order-tolerant (a round trip through an
/// out-of-order input is deliberately lossy: order is not significant).
pub fn encode_set<T>(items: &[T], encode_item: impl Fn(&T) -> Vec<u8>) -> Vec<u8> {
    let mut encoded: Vec<Vec<u8>> = items.iter().map(|item| encode_item(item)).collect();
    encoded.sort();
    let mut out = crate::nat::encode(encoded.len() as u64);
    for item in encoded {
        out.extend(item);
    }
    out
}

pub fn decode_set<'a, T>(
    buf: &'a [u8],
    decode_item: impl FnMut(&'a [u8]) -> Result<(T, &'a [u8])>,
) -> Result<(Vec<T>, &'a [u8])> {
    sequence::decode_var(buf, decode_item)
}

/// A variable sequence of `(encode(k), encode(v))` pairs, ordered
/// ascending by the key's canonical encoding. Encoders must not emit
/// duplicate keys; decoders tolerate them, with the last occurrence
/// winning.
pub fn encode_dict<K, V>(
    entries: &[(K, V)],
    encode_key: impl Fn(&K) -> Vec<u8>,
    encode_value: impl Fn(&V) -> Vec<u8>,
) -> Vec<u8> {
    let mut encoded: Vec<(Vec<u8>, Vec<u8>)> = entries
        .iter()
        .map(|(k, v)| (encode_key(k), encode_value(v)))
        .collect();
    encoded.sort_by(|a, b| a.0.cmp(&b.0));

    let mut out = crate::nat::encode(encoded.len() as u64);
    for (k, v) in encoded {
        out.extend(k);
        out.extend(v);
    }
    out
}

/// Decode an ordered dictionary keyed by a fixed-length-key/value pair
/// decoder supplied by the caller. On duplicate keys, last wins.
pub fn decode_dict<'a, K, V>(
    buf: &'a [u8],
    mut decode_entry: impl FnMut(&'a [u8]) -> Result<((K, V), &'a [u8])>,
) -> Result<(Vec<(K, V)>, &'a [u8])>
where
    K: PartialEq,
{
    let (count, mut rest) = crate::nat::decode(buf)?;
    let mut entries: Vec<(K, V)> = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let ((key, value), tail) = decode_entry(rest)?;
        rest = tail;
        if let Some(existing) = entries.iter_mut().find(|(k, _)| *k == key) {
            existing.1 = value;
        } else {
            entries.push((key, value));
        }
    }
    Ok((entries, rest))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixed;

    #[test]
    fn set_is_order_independent() {
        let a = vec![3u64, 1, 2];
        let b = vec![1u64, 2, 3];
        let enc_a = encode_set(&a, |x| fixed::encode4(*x).unwrap());
        let enc_b = encode_set(&b, |x| fixed::encode4(*x).unwrap());
        assert_eq!(enc_a, enc_b);
    }

    #[test]
    fn dict_sorted_by_key() {
        let entries = vec![(2u32, 20u32), (1, 10), (3, 30)];
        let encoded = encode_dict(
            &entries,
            |k| fixed::encode4(*k as u64).unwrap(),
            |v| fixed::encode4(*v as u64).unwrap(),
        );
        // 3 entries, 4-byte key, 4-byte value: prefix + sorted (1,10),(2,20),(3,30)
        let mut expected = vec![3u8];
        for (k, v) in [(1u32, 10u32), (2, 20), (3, 30)] {
            expected.extend(fixed::encode4(k as u64).unwrap());
            expected.extend(fixed::encode4(v as u64).unwrap());
        }
        assert_eq!(encoded, expected);
    }

    #[test]
    fn dict_decode_duplicate_last_wins() {
        let raw = {
            let mut out = vec![2u8];
            out.extend(fixed::encode4(1).unwrap());
            out.extend(fixed::encode4(100).unwrap());
            out.extend(fixed::encode4(1).unwrap());
            out.extend(fixed::encode4(200).unwrap());
            out
        };
        let (decoded, rest): (Vec<(u64, u64)>, _) = decode_dict(&raw, |b| {
            let (k, b) = fixed::decode4(b)?;
            let (v, b) = fixed::decode4(b)?;
            Ok(((k, v), b))
        })
        .unwrap();
        assert_eq!(decoded, vec![(1, 200)]);
        assert!(rest.is_empty());
    }
}
