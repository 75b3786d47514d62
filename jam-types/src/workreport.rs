//! Work package / work report (§7 supplement).
//!
//! spec.md's entity table names `WorkResult`/`WorkDigest` (§4.2) but
//! leaves the report that carries them to this crate's own module, the
//! way the distillation leaves "block header and body" unfilled. Layout
//! here follows the same field-order-is-wire-order discipline.

use jam_codec::{blob, fixed, sequence, Codec};
use jam_crypto::Hash32;

use crate::work::WorkResult;

/// Identifies the work package a report refines: content hash, encoded
/// byte length, and the two roots the availability system needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PackageSpec {
    pub hash: Hash32,
    pub length: u32,
    pub erasure_root: Hash32,
    pub exports_root: Hash32,
}

impl Codec for PackageSpec {
    fn encode(&self) -> Vec<u8> {
        let mut out = self.hash.encode();
        out.extend(fixed::encode4(self.length as u64).expect("u32 fits in 4 bytes"));
        out.extend(self.erasure_root.encode());
        out.extend(self.exports_root.encode());
        out
    }

    fn decode(buf: &[u8]) -> jam_codec::Result<(Self, &[u8])> {
        let (hash, buf) = Hash32::decode(buf)?;
        let (length, buf) = fixed::decode4(buf)?;
        let (erasure_root, buf) = Hash32::decode(buf)?;
        let (exports_root, buf) = Hash32::decode(buf)?;
        Ok((
            PackageSpec {
                hash,
                length: length as u32,
                erasure_root,
                exports_root,
            },
            buf,
        ))
    }
}

/// Anchors a refinement to a specific point of chain history.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RefinementContext {
    pub anchor: Hash32,
    pub state_root: Hash32,
    pub beefy_root: Hash32,
    pub lookup_anchor: Hash32,
    pub lookup_anchor_slot: u32,
    pub prerequisites: Vec<Hash32>,
}

impl Codec for RefinementContext {
    fn encode(&self) -> Vec<u8> {
        let mut out = self.anchor.encode();
        out.extend(self.state_root.encode());
        out.extend(self.beefy_root.encode());
        out.extend(self.lookup_anchor.encode());
        out.extend(
            fixed::encode4(self.lookup_anchor_slot as u64).expect("u32 fits in 4 bytes"),
        );
        out.extend(sequence::encode_var(&self.prerequisites, |h| h.encode()));
        out
    }

    fn decode(buf: &[u8]) -> jam_codec::Result<(Self, &[u8])> {
        let (anchor, buf) = Hash32::decode(buf)?;
        let (state_root, buf) = Hash32::decode(buf)?;
        let (beefy_root, buf) = Hash32::decode(buf)?;
        let (lookup_anchor, buf) = Hash32::decode(buf)?;
        let (lookup_anchor_slot, buf) = fixed::decode4(buf)?;
        let (prerequisites, buf) = sequence::decode_var(buf, |b| Hash32::decode(b))?;
        Ok((
            RefinementContext {
                anchor,
                state_root,
                beefy_root,
                lookup_anchor,
                lookup_anchor_slot: lookup_anchor_slot as u32,
                prerequisites,
            },
            buf,
        ))
    }
}

/// A work report: the authorizer that admitted the package, the package
/// spec, the refinement context it was built against, the core it was
/// assigned to, the authorizer's trace output, and the work results for
/// each work item in the package.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorkReport {
    pub authorizer_hash: Hash32,
    pub package_spec: PackageSpec,
    pub context: RefinementContext,
    pub core_index: u16,
    pub authorizer_trace: Vec<u8>,
    pub results: Vec<WorkResult>,
}

impl Codec for WorkReport {
    fn encode(&self) -> Vec<u8> {
        let mut out = self.authorizer_hash.encode();
        out.extend(self.package_spec.encode());
        out.extend(self.context.encode());
        out.extend(fixed::encode2(self.core_index as u64).expect("u16 fits in 2 bytes"));
        out.extend(blob::encode(&self.authorizer_trace));
        out.extend(sequence::encode_var(&self.results, |r| r.encode()));
        out
    }

    fn decode(buf: &[u8]) -> jam_codec::Result<(Self, &[u8])> {
        let (authorizer_hash, buf) = Hash32::decode(buf)?;
        let (package_spec, buf) = PackageSpec::decode(buf)?;
        let (context, buf) = RefinementContext::decode(buf)?;
        let (core_index, buf) = fixed::decode2(buf)?;
        let (authorizer_trace, buf) = blob::decode(buf)?;
        let (results, buf) = sequence::decode_var(buf, |b| WorkResult::decode(b))?;
        Ok((
            WorkReport {
                authorizer_hash,
                package_spec,
                context,
                core_index: core_index as u16,
                authorizer_trace,
                results,
            },
            buf,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::work::{ExecutionOutcome, RefineLoad};

    #[test]
    fn round_trip() {
        let value = WorkReport {
            authorizer_hash: Hash32::new([1; 32]),
            package_spec: PackageSpec {
                hash: Hash32::new([2; 32]),
                length: 4096,
                erasure_root: Hash32::new([3; 32]),
                exports_root: Hash32::new([4; 32]),
            },
            context: RefinementContext {
                anchor: Hash32::new([5; 32]),
                state_root: Hash32::new([6; 32]),
                beefy_root: Hash32::new([7; 32]),
                lookup_anchor: Hash32::new([8; 32]),
                lookup_anchor_slot: 42,
                prerequisites: vec![],
            },
            core_index: 3,
            authorizer_trace: vec![0xEE; 16],
            results: vec![WorkResult {
                service_id: 5,
                code_hash: Hash32::new([9; 32]),
                payload_hash: Hash32::new([10; 32]),
                accumulate_gas: 500,
                result: ExecutionOutcome::Success(vec![1, 2, 3]),
                refine_load: RefineLoad::default(),
            }],
        };
        let encoded = value.encode();
        let (decoded, rest) = WorkReport::decode(&encoded).unwrap();
        assert_eq!(decoded, value);
        assert!(rest.is_empty());
    }
}
