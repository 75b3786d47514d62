//! The "Y-format" preimage-embedded program layout (§4.4).
//!
//! `encode(natural |m|) ++ m ++ encode[3](|o|) ++ encode[3](|w|) ++`
//! `encode[2](z) ++ encode[3](s) ++ o ++ w ++ encode[4](|c|) ++ c`
//!
//! All fixed-length integers in the inner header are little-endian. This
//! is the format the state-key classifier's preimage test (§4.3.2) checks
//! for: the classifier only needs to know the header parses, never what
//! the code or data actually do.

use jam_codec::{error::require, fixed, nat};

use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YFormat {
    pub metadata: Vec<u8>,
    pub read_only_len: u32,
    pub read_write_len: u32,
    pub heap_pages: u16,
    pub stack_size: u32,
    pub read_only_data: Vec<u8>,
    pub read_write_data: Vec<u8>,
    pub code: Vec<u8>,
}

pub fn encode(value: &YFormat) -> Vec<u8> {
    let mut out = nat::encode(value.metadata.len() as u64);
    out.extend(&value.metadata);
    out.extend(fixed::encode(value.read_only_len as u64, 3).expect("fits in 3 bytes"));
    out.extend(fixed::encode(value.read_write_len as u64, 3).expect("fits in 3 bytes"));
    out.extend(fixed::encode(value.heap_pages as u64, 2).expect("fits in 2 bytes"));
    out.extend(fixed::encode(value.stack_size as u64, 3).expect("fits in 3 bytes"));
    out.extend(&value.read_only_data);
    out.extend(&value.read_write_data);
    out.extend(fixed::encode(value.code.len() as u64, 4).expect("fits in 4 bytes"));
    out.extend(&value.code);
    out
}

/// Parse a Y-format header. This is the "is-valid-program" predicate the
/// classifier's preimage test uses: it is a boolean wrapped around this
/// function succeeding, with no interpretation of `code`'s contents.
pub fn decode(buf: &[u8]) -> Result<(YFormat, &[u8])> {
    let (metadata_len, rest) = nat::decode(buf)?;
    let metadata_len = metadata_len as usize;
    require(rest, metadata_len)?;
    let metadata = rest[..metadata_len].to_vec();
    let rest = &rest[metadata_len..];

    let (read_only_len, rest) = fixed::decode(rest, 3)?;
    let (read_write_len, rest) = fixed::decode(rest, 3)?;
    let (heap_pages, rest) = fixed::decode(rest, 2)?;
    let (stack_size, rest) = fixed::decode(rest, 3)?;

    let read_only_len = read_only_len as usize;
    let read_write_len = read_write_len as usize;

    require(rest, read_only_len)?;
    let read_only_data = rest[..read_only_len].to_vec();
    let rest = &rest[read_only_len..];

    require(rest, read_write_len)?;
    let read_write_data = rest[..read_write_len].to_vec();
    let rest = &rest[read_write_len..];

    let (code_len, rest) = fixed::decode(rest, 4)?;
    let code_len = code_len as usize;
    require(rest, code_len)?;
    let code = rest[..code_len].to_vec();
    let rest = &rest[code_len..];

    Ok((
        YFormat {
            metadata,
            read_only_len: read_only_len as u32,
            read_write_len: read_write_len as u32,
            heap_pages: heap_pages as u16,
            stack_size: stack_size as u32,
            read_only_data,
            read_write_data,
            code,
        },
        rest,
    ))
}

/// Does `value` parse as a Y-format program header? Used by the
/// state-key classifier's preimage test; the header must parse and fully
/// account for the bytes it claims (trailing bytes after a well-formed
/// header are tolerated — a preimage value may carry more than the
/// program header, e.g. additional chunks).
pub fn looks_like_program(value: &[u8]) -> bool {
    decode(value).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> YFormat {
        YFormat {
            metadata: vec![1, 2, 3],
            read_only_len: 4,
            read_write_len: 2,
            heap_pages: 1,
            stack_size: 1024,
            read_only_data: vec![0xAA; 4],
            read_write_data: vec![0xBB; 2],
            code: vec![0x01, 0x02, 0x03, 0x04],
        }
    }

    #[test]
    fn round_trip() {
        let value = sample();
        let encoded = encode(&value);
        let (decoded, rest) = decode(&encoded).unwrap();
        assert_eq!(decoded, value);
        assert!(rest.is_empty());
    }

    #[test]
    fn recognized_as_program() {
        let encoded = encode(&sample());
        assert!(looks_like_program(&encoded));
    }

    #[test]
    fn garbage_is_not_a_program() {
        // A length prefix claiming more metadata than exists.
        let garbage = vec![0xFFu8, 0x01, 0x02];
        assert!(!looks_like_program(&garbage));
    }

    #[test]
    fn empty_is_not_a_program() {
        assert!(!looks_like_program(&[]));
    }
}
