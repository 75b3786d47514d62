//! The "deblob" program format: instructions plus a jump table (§4.4).
//!
//! `encode(natural |j|) ++ encode[1](z) ++ encode(natural |c|) ++`
//! `j-table (|j|*z bytes, big-endian z-byte entries) ++ c (code) ++`
//! `bitmask (packed LSB-first, ceil(|c|/8) bytes)`

use jam_codec::{error::require, nat};

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deblob {
    /// Jump table entries, each `z` bytes wide, stored big-endian as on
    /// the wire (the classifier never needs these as integers).
    pub jump_table: Vec<Vec<u8>>,
    pub jump_table_entry_width: u8,
    pub code: Vec<u8>,
    pub bitmask: Vec<u8>,
}

pub fn encode(value: &Deblob) -> Vec<u8> {
    let mut out = nat::encode(value.jump_table.len() as u64);
    out.push(value.jump_table_entry_width);
    out.extend(nat::encode(value.code.len() as u64));
    for entry in &value.jump_table {
        out.extend(entry);
    }
    out.extend(&value.code);
    out.extend(&value.bitmask);
    out
}

pub fn decode(buf: &[u8]) -> Result<(Deblob, &[u8])> {
    let (jump_count, rest) = nat::decode(buf)?;
    require(rest, 1)?;
    let z = rest[0];
    let rest = &rest[1..];
    let (code_len, rest) = nat::decode(rest)?;

    let z = z as usize;
    let jump_count = jump_count as usize;
    let code_len = code_len as usize;

    let jump_table_bytes = jump_count
        .checked_mul(z)
        .ok_or(Error::ProgramMalformed("jump table size overflow"))?;
    require(rest, jump_table_bytes)?;
    let mut jump_table = Vec::with_capacity(jump_count);
    let mut cursor = rest;
    for _ in 0..jump_count {
        jump_table.push(cursor[..z].to_vec());
        cursor = &cursor[z..];
    }

    require(cursor, code_len)?;
    let code = cursor[..code_len].to_vec();
    let cursor = &cursor[code_len..];

    let bitmask_len = code_len.div_ceil(8);
    require(cursor, bitmask_len)?;
    let bitmask = cursor[..bitmask_len].to_vec();
    let cursor = &cursor[bitmask_len..];

    Ok((
        Deblob {
            jump_table,
            jump_table_entry_width: z as u8,
            code,
            bitmask,
        },
        cursor,
    ))
}
