//! Optional value: `maybe{x}` (§4.1.4).

use crate::error::{require, Error, Result};

const NONE_TAG: u8 = 0x00;
const SOME_TAG: u8 = 0x01;

/// Encode an `Option<T>` given the inner value's own encoder.
pub fn encode<T>(value: &Option<T>, encode_inner: impl FnOnce(&T) -> Vec<u8>) -> Vec<u8> {
    match value {
        None => vec![NONE_TAG],
        Some(inner) => {
            let mut out = vec![SOME_TAG];
            out.extend(encode_inner(inner));
            out
        }
    }
}

/// Decode an `Option<T>` given the inner value's own decoder.
pub fn decode<'a, T>(
    buf: &'a [u8],
    decode_inner: impl FnOnce(&'a [u8]) -> Result<(T, &'a [u8])>,
) -> Result<(Option<T>, &'a [u8])> {
    require(buf, 1)?;
    match buf[0] {
        NONE_TAG => Ok((None, &buf[1..])),
        SOME_TAG => {
            let (value, rest) = decode_inner(&buf[1..])?;
            Ok((Some(value), rest))
        }
        other => Err(Error::InvalidOptionalTag(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixed;

    #[test]
    fn round_trip_none() {
        let encoded = encode(&None::<u64>, |x: &u64| fixed::encode4(*x).unwrap());
        assert_eq!(encoded, vec![0x00]);
        let (decoded, rest) = decode(&encoded, |b| fixed::decode4(b)).unwrap();
        assert_eq!(decoded, None);
        assert!(rest.is_empty());
    }

    #[test]
    fn round_trip_some() {
        let encoded = encode(&Some(42u64), |x: &u64| fixed::encode4(*x).unwrap());
        assert_eq!(encoded[0], 0x01);
        let (decoded, rest) = decode(&encoded, |b| fixed::decode4(b)).unwrap();
        assert_eq!(decoded, Some(42));
        assert!(rest.is_empty());
    }

    #[test]
    fn invalid_tag() {
        let err = decode(&[0x02], |b| fixed::decode4(b)).unwrap_err();
        assert_eq!(err, Error::InvalidOptionalTag(0x02));
    }
}
