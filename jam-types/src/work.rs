//! Work result / work digest codecs (§3, §4.2 "Work result" / "Work digest").

use jam_codec::{blob, fixed, nat, union, Codec};
use jam_crypto::Hash32;

use crate::privileges::ServiceId;

/// The tagged outcome of executing a work item (§4.2 "Work result" table).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExecutionOutcome {
    Success(Vec<u8>),
    OutOfGas,
    Panic,
    BadExports,
    Oversize,
    BadCode,
    CodeOversize,
}

impl Codec for ExecutionOutcome {
    fn encode(&self) -> Vec<u8> {
        match self {
            ExecutionOutcome::Success(bytes) => union::encode(0, &blob::encode(bytes)),
            ExecutionOutcome::OutOfGas => union::encode(1, &[]),
            ExecutionOutcome::Panic => union::encode(2, &[]),
            ExecutionOutcome::BadExports => union::encode(3, &[]),
            ExecutionOutcome::Oversize => union::encode(4, &[]),
            ExecutionOutcome::BadCode => union::encode(5, &[]),
            ExecutionOutcome::CodeOversize => union::encode(6, &[]),
        }
    }

    fn decode(buf: &[u8]) -> jam_codec::Result<(Self, &[u8])> {
        let (tag, buf) = union::decode_tag(buf)?;
        match tag {
            0 => {
                let (bytes, buf) = blob::decode(buf)?;
                Ok((ExecutionOutcome::Success(bytes), buf))
            }
            1 => Ok((ExecutionOutcome::OutOfGas, buf)),
            2 => Ok((ExecutionOutcome::Panic, buf)),
            3 => Ok((ExecutionOutcome::BadExports, buf)),
            4 => Ok((ExecutionOutcome::Oversize, buf)),
            5 => Ok((ExecutionOutcome::BadCode, buf)),
            6 => Ok((ExecutionOutcome::CodeOversize, buf)),
            other => Err(union::unknown_variant(other)),
        }
    }
}

/// Five naturals: `gasUsed, imports, extrinsicCount, extrinsicSize, exports`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RefineLoad {
    pub gas_used: u64,
    pub imports: u64,
    pub extrinsic_count: u64,
    pub extrinsic_size: u64,
    pub exports: u64,
}

impl Codec for RefineLoad {
    fn encode(&self) -> Vec<u8> {
        let mut out = Vec::new();
        for field in [
            self.gas_used,
            self.imports,
            self.extrinsic_count,
            self.extrinsic_size,
            self.exports,
        ] {
            out.extend(nat::encode(field));
        }
        out
    }

    fn decode(buf: &[u8]) -> jam_codec::Result<(Self, &[u8])> {
        let (gas_used, buf) = nat::decode(buf)?;
        let (imports, buf) = nat::decode(buf)?;
        let (extrinsic_count, buf) = nat::decode(buf)?;
        let (extrinsic_size, buf) = nat::decode(buf)?;
        let (exports, buf) = nat::decode(buf)?;
        Ok((
            RefineLoad {
                gas_used,
                imports,
                extrinsic_count,
                extrinsic_size,
                exports,
            },
            buf,
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorkResult {
    pub service_id: ServiceId,
    pub code_hash: Hash32,
    pub payload_hash: Hash32,
    pub accumulate_gas: u64,
    pub result: ExecutionOutcome,
    pub refine_load: RefineLoad,
}

impl Codec for WorkResult {
    fn encode(&self) -> Vec<u8> {
        let mut out = fixed::encode4(self.service_id as u64).expect("ServiceId fits in 4 bytes");
        out.extend(self.code_hash.encode());
        out.extend(self.payload_hash.encode());
        out.extend(fixed::encode8(self.accumulate_gas).expect("u64 always fits in 8 bytes"));
        out.extend(self.result.encode());
        out.extend(self.refine_load.encode());
        out
    }

    fn decode(buf: &[u8]) -> jam_codec::Result<(Self, &[u8])> {
        let (service_id, buf) = fixed::decode4(buf)?;
        let (code_hash, buf) = Hash32::decode(buf)?;
        let (payload_hash, buf) = Hash32::decode(buf)?;
        let (accumulate_gas, buf) = fixed::decode8(buf)?;
        let (result, buf) = ExecutionOutcome::decode(buf)?;
        let (refine_load, buf) = RefineLoad::decode(buf)?;
        Ok((
            WorkResult {
                service_id: service_id as u32,
                code_hash,
                payload_hash,
                accumulate_gas,
                result,
                refine_load,
            },
            buf,
        ))
    }
}

/// `WorkDigest` is `WorkResult`'s sibling for use where a fixed gas
/// *limit* is carried instead of the gas actually spent accumulating
/// (spec.md §4.2 "Work digest"): same layout, `gas_limit` (encode[8]) in
/// place of `accumulate_gas`, and the same trailing `RefineLoad`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorkDigest {
    pub service_id: ServiceId,
    pub code_hash: Hash32,
    pub payload_hash: Hash32,
    pub gas_limit: u64,
    pub result: ExecutionOutcome,
    pub refine_load: RefineLoad,
}

impl Codec for WorkDigest {
    fn encode(&self) -> Vec<u8> {
        let mut out = fixed::encode4(self.service_id as u64).expect("ServiceId fits in 4 bytes");
        out.extend(self.code_hash.encode());
        out.extend(self.payload_hash.encode());
        out.extend(fixed::encode8(self.gas_limit).expect("u64 always fits in 8 bytes"));
        out.extend(self.result.encode());
        out.extend(self.refine_load.encode());
        out
    }

    fn decode(buf: &[u8]) -> jam_codec::Result<(Self, &[u8])> {
        let (service_id, buf) = fixed::decode4(buf)?;
        let (code_hash, buf) = Hash32::decode(buf)?;
        let (payload_hash, buf) = Hash32::decode(buf)?;
        let (gas_limit, buf) = fixed::decode8(buf)?;
        let (result, buf) = ExecutionOutcome::decode(buf)?;
        let (refine_load, buf) = RefineLoad::decode(buf)?;
        Ok((
            WorkDigest {
                service_id: service_id as u32,
                code_hash,
                payload_hash,
                gas_limit,
                result,
                refine_load,
            },
            buf,
        ))
    }
}
