//! State-trie key/value pairs as exchanged by the fuzz envelope's
//! `Initialize` and `State` messages (§4.5).
//!
//! Grounded on `pallas_codec::utils::KeyValuePairs` (an ordered list of
//! `(K, V)` tuples the wire format carries as a plain sequence, not a
//! sorted dictionary): the fuzz protocol's key/value list is
//! producer-ordered, not canonically sorted, so this wraps
//! [`jam_codec::sequence`] rather than [`jam_codec::ordered`].

use jam_codec::{blob, fixed, sequence};
use jam_statekey::key::KEY_LEN;

use crate::error::Result;

/// One state-trie entry: a raw 31-byte key and a length-prefixed value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValue {
    pub key: [u8; KEY_LEN],
    pub value: Vec<u8>,
}

impl KeyValue {
    pub fn encode(&self) -> Vec<u8> {
        let mut out = fixed::encode_bytes(&self.key);
        out.extend(blob::encode(&self.value));
        out
    }

    pub fn decode(buf: &[u8]) -> jam_codec::Result<(Self, &[u8])> {
        let (key, buf) = fixed::decode_bytes::<KEY_LEN>(buf)?;
        let (value, buf) = blob::decode(buf)?;
        Ok((KeyValue { key, value }, buf))
    }
}

/// The variable-length key/value sequence carried by `Initialize` and
/// `State` (§4.5).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyValueSequence(pub Vec<KeyValue>);

impl KeyValueSequence {
    pub fn encode(&self) -> Vec<u8> {
        sequence::encode_var(&self.0, |kv| kv.encode())
    }

    pub fn decode(buf: &[u8]) -> Result<(Self, &[u8])> {
        let (entries, buf) = sequence::decode_var(buf, |b| KeyValue::decode(b))?;
        Ok((KeyValueSequence(entries), buf))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip() {
        let value = KeyValueSequence(vec![
            KeyValue {
                key: [0x11; KEY_LEN],
                value: vec![1, 2, 3],
            },
            KeyValue {
                key: [0x22; KEY_LEN],
                value: vec![],
            },
        ]);
        let encoded = value.encode();
        let (decoded, rest) = KeyValueSequence::decode(&encoded).unwrap();
        assert_eq!(decoded, value);
        assert!(rest.is_empty());
    }

    #[test]
    fn empty_is_single_zero_byte() {
        let value = KeyValueSequence::default();
        assert_eq!(value.encode(), vec![0]);
    }
}
