//! Extrinsic codecs: tickets, preimages, guarantees, disputes (§7 supplement).
//!
//! spec.md names these in its entity table but does not spell out their
//! layouts; field order below follows the same "written order is wire
//! order" discipline as every other entity in this crate.

use jam_codec::{blob, fixed, sequence, Codec};
use jam_crypto::Hash32;

use crate::config::Config;
use crate::error::Result;
use crate::privileges::ServiceId;
use crate::workreport::WorkReport;

/// A ticket submission: `id` is the candidate's Bandersnatch VRF output,
/// `attempt` the ring-VRF attempt index, `proof` the ring signature.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ticket {
    pub id: Hash32,
    pub attempt: u8,
    pub proof: Vec<u8>,
}

impl Codec for Ticket {
    fn encode(&self) -> Vec<u8> {
        let mut out = self.id.encode();
        out.extend(fixed::encode1(self.attempt as u64).expect("u8 fits in 1 byte"));
        out.extend(blob::encode(&self.proof));
        out
    }

    fn decode(buf: &[u8]) -> jam_codec::Result<(Self, &[u8])> {
        let (id, buf) = Hash32::decode(buf)?;
        let (attempt, buf) = fixed::decode1(buf)?;
        let (proof, buf) = blob::decode(buf)?;
        Ok((
            Ticket {
                id,
                attempt: attempt as u8,
                proof,
            },
            buf,
        ))
    }
}

/// Tickets extrinsic: a variable sequence of [`Ticket`], producer order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TicketsExtrinsic(pub Vec<Ticket>);

impl Codec for TicketsExtrinsic {
    fn encode(&self) -> Vec<u8> {
        sequence::encode_var(&self.0, |t| t.encode())
    }

    fn decode(buf: &[u8]) -> jam_codec::Result<(Self, &[u8])> {
        let (tickets, buf) = sequence::decode_var(buf, |b| Ticket::decode(b))?;
        Ok((TicketsExtrinsic(tickets), buf))
    }
}

/// A preimage submission: the requesting service and the raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Preimage {
    pub requester: ServiceId,
    pub blob: Vec<u8>,
}

impl Codec for Preimage {
    fn encode(&self) -> Vec<u8> {
        let mut out =
            fixed::encode4(self.requester as u64).expect("ServiceId fits in 4 bytes");
        out.extend(blob::encode(&self.blob));
        out
    }

    fn decode(buf: &[u8]) -> jam_codec::Result<(Self, &[u8])> {
        let (requester, buf) = fixed::decode4(buf)?;
        let (blob, buf) = blob::decode(buf)?;
        Ok((
            Preimage {
                requester: requester as u32,
                blob,
            },
            buf,
        ))
    }
}

/// Preimages extrinsic: a variable sequence of [`Preimage`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PreimagesExtrinsic(pub Vec<Preimage>);

impl Codec for PreimagesExtrinsic {
    fn encode(&self) -> Vec<u8> {
        sequence::encode_var(&self.0, |p| p.encode())
    }

    fn decode(buf: &[u8]) -> jam_codec::Result<(Self, &[u8])> {
        let (preimages, buf) = sequence::decode_var(buf, |b| Preimage::decode(b))?;
        Ok((PreimagesExtrinsic(preimages), buf))
    }
}

/// One validator's attestation to a work report it guarantees.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GuaranteeSignature {
    pub validator_index: u16,
    pub signature: Vec<u8>,
}

impl Codec for GuaranteeSignature {
    fn encode(&self) -> Vec<u8> {
        let mut out =
            fixed::encode2(self.validator_index as u64).expect("u16 fits in 2 bytes");
        out.extend(blob::encode(&self.signature));
        out
    }

    fn decode(buf: &[u8]) -> jam_codec::Result<(Self, &[u8])> {
        let (validator_index, buf) = fixed::decode2(buf)?;
        let (signature, buf) = blob::decode(buf)?;
        Ok((
            GuaranteeSignature {
                validator_index: validator_index as u16,
                signature,
            },
            buf,
        ))
    }
}

/// A guarantee: a work report plus the validator signature set attesting
/// to its correctness.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Guarantee {
    pub report: WorkReport,
    pub signatures: Vec<GuaranteeSignature>,
}

impl Guarantee {
    pub fn encode(&self) -> Vec<u8> {
        let mut out = self.report.encode();
        out.extend(sequence::encode_var(&self.signatures, |s| s.encode()));
        out
    }

    pub fn decode(buf: &[u8]) -> jam_codec::Result<(Self, &[u8])> {
        let (report, buf) = WorkReport::decode(buf)?;
        let (signatures, buf) =
            sequence::decode_var(buf, |b| GuaranteeSignature::decode(b))?;
        Ok((Guarantee { report, signatures }, buf))
    }
}

/// Guarantees extrinsic: a variable sequence of [`Guarantee`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GuaranteesExtrinsic(pub Vec<Guarantee>);

impl GuaranteesExtrinsic {
    pub fn encode(&self) -> Vec<u8> {
        sequence::encode_var(&self.0, |g| g.encode())
    }

    pub fn decode(buf: &[u8]) -> Result<(Self, &[u8])> {
        let (guarantees, buf) = sequence::decode_var(buf, |b| Guarantee::decode(b))?;
        Ok((GuaranteesExtrinsic(guarantees), buf))
    }
}

/// A culprit: a validator identified as having guaranteed a work report
/// later found invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Culprit {
    pub target: Hash32,
    pub key: Hash32,
    pub signature: Vec<u8>,
}

impl Codec for Culprit {
    fn encode(&self) -> Vec<u8> {
        let mut out = self.target.encode();
        out.extend(self.key.encode());
        out.extend(blob::encode(&self.signature));
        out
    }

    fn decode(buf: &[u8]) -> jam_codec::Result<(Self, &[u8])> {
        let (target, buf) = Hash32::decode(buf)?;
        let (key, buf) = Hash32::decode(buf)?;
        let (signature, buf) = blob::decode(buf)?;
        Ok((
            Culprit {
                target,
                key,
                signature,
            },
            buf,
        ))
    }
}

/// A fault: a judge's vote on a disputed report, with its Ed25519 key.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fault {
    pub target: Hash32,
    pub vote: bool,
    pub key: Hash32,
    pub signature: Vec<u8>,
}

impl Codec for Fault {
    fn encode(&self) -> Vec<u8> {
        let mut out = self.target.encode();
        out.push(self.vote as u8);
        out.extend(self.key.encode());
        out.extend(blob::encode(&self.signature));
        out
    }

    fn decode(buf: &[u8]) -> jam_codec::Result<(Self, &[u8])> {
        let (target, buf) = Hash32::decode(buf)?;
        jam_codec::error::require(buf, 1)?;
        let vote = buf[0] != 0;
        let buf = &buf[1..];
        let (key, buf) = Hash32::decode(buf)?;
        let (signature, buf) = blob::decode(buf)?;
        Ok((
            Fault {
                target,
                vote,
                key,
                signature,
            },
            buf,
        ))
    }
}

/// A verdict over a disputed report: the report's hash, the epoch its
/// judges were drawn from, and the tally of judge votes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Verdict {
    pub target: Hash32,
    pub epoch: u32,
    pub votes: Vec<(Hash32, bool)>,
}

impl Codec for Verdict {
    fn encode(&self) -> Vec<u8> {
        let mut out = self.target.encode();
        out.extend(fixed::encode4(self.epoch as u64).expect("epoch fits in 4 bytes"));
        out.extend(sequence::encode_var(&self.votes, |(key, vote)| {
            let mut entry = key.encode();
            entry.push(*vote as u8);
            entry
        }));
        out
    }

    fn decode(buf: &[u8]) -> jam_codec::Result<(Self, &[u8])> {
        let (target, buf) = Hash32::decode(buf)?;
        let (epoch, buf) = fixed::decode4(buf)?;
        let (votes, buf) = sequence::decode_var(buf, |b| {
            let (key, b) = Hash32::decode(b)?;
            jam_codec::error::require(b, 1)?;
            let vote = b[0] != 0;
            Ok(((key, vote), &b[1..]))
        })?;
        Ok((
            Verdict {
                target,
                epoch: epoch as u32,
                votes,
            },
            buf,
        ))
    }
}

/// The disputes extrinsic: verdicts, culprits, and faults, each its own
/// variable sequence, layered over the good/bad/wonky vocabulary the
/// [`crate::disputes::Disputes`] state entity accumulates into.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DisputesExtrinsic {
    pub verdicts: Vec<Verdict>,
    pub culprits: Vec<Culprit>,
    pub faults: Vec<Fault>,
}

impl Codec for DisputesExtrinsic {
    fn encode(&self) -> Vec<u8> {
        let mut out = sequence::encode_var(&self.verdicts, |v| v.encode());
        out.extend(sequence::encode_var(&self.culprits, |c| c.encode()));
        out.extend(sequence::encode_var(&self.faults, |f| f.encode()));
        out
    }

    fn decode(buf: &[u8]) -> jam_codec::Result<(Self, &[u8])> {
        let (verdicts, buf) = sequence::decode_var(buf, |b| Verdict::decode(b))?;
        let (culprits, buf) = sequence::decode_var(buf, |b| Culprit::decode(b))?;
        let (faults, buf) = sequence::decode_var(buf, |b| Fault::decode(b))?;
        Ok((
            DisputesExtrinsic {
                verdicts,
                culprits,
                faults,
            },
            buf,
        ))
    }
}

/// The full extrinsic bundle carried by a block body (§7 supplement).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Extrinsic {
    pub tickets: TicketsExtrinsic,
    pub preimages: PreimagesExtrinsic,
    pub guarantees: GuaranteesExtrinsic,
    pub assurances: crate::assurance::AssurancesExtrinsic,
    pub disputes: DisputesExtrinsic,
}

impl Extrinsic {
    pub fn encode(&self, config: &Config) -> Vec<u8> {
        let mut out = self.tickets.encode();
        out.extend(self.preimages.encode());
        out.extend(self.guarantees.encode());
        out.extend(self.assurances.encode(config));
        out.extend(self.disputes.encode());
        out
    }

    pub fn decode<'a>(buf: &'a [u8], config: &Config) -> Result<(Self, &'a [u8])> {
        let (tickets, buf) = TicketsExtrinsic::decode(buf)?;
        let (preimages, buf) = PreimagesExtrinsic::decode(buf)?;
        let (guarantees, buf) = GuaranteesExtrinsic::decode(buf)?;
        let (assurances, buf) = crate::assurance::AssurancesExtrinsic::decode(buf, config)?;
        let (disputes, buf) = DisputesExtrinsic::decode(buf)?;
        Ok((
            Extrinsic {
                tickets,
                preimages,
                guarantees,
                assurances,
                disputes,
            },
            buf,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assurance::Assurance;
    use crate::workreport::{PackageSpec, RefinementContext};
    use crate::work::{ExecutionOutcome, RefineLoad, WorkResult};

    fn report() -> WorkReport {
        WorkReport {
            authorizer_hash: Hash32::new([1; 32]),
            package_spec: PackageSpec {
                hash: Hash32::new([2; 32]),
                length: 1024,
                erasure_root: Hash32::new([3; 32]),
                exports_root: Hash32::new([4; 32]),
            },
            context: RefinementContext {
                anchor: Hash32::new([5; 32]),
                state_root: Hash32::new([6; 32]),
                beefy_root: Hash32::new([7; 32]),
                lookup_anchor: Hash32::new([8; 32]),
                lookup_anchor_slot: 9,
                prerequisites: vec![Hash32::new([10; 32])],
            },
            core_index: 1,
            authorizer_trace: vec![0xAB],
            results: vec![WorkResult {
                service_id: 1,
                code_hash: Hash32::new([11; 32]),
                payload_hash: Hash32::new([12; 32]),
                accumulate_gas: 100,
                result: ExecutionOutcome::OutOfGas,
                refine_load: RefineLoad::default(),
            }],
        }
    }

    #[test]
    fn ticket_round_trip() {
        let value = Ticket {
            id: Hash32::new([1; 32]),
            attempt: 2,
            proof: vec![0xAA; 784],
        };
        let encoded = value.encode();
        let (decoded, rest) = Ticket::decode(&encoded).unwrap();
        assert_eq!(decoded, value);
        assert!(rest.is_empty());
    }

    #[test]
    fn guarantee_round_trip() {
        let value = Guarantee {
            report: report(),
            signatures: vec![GuaranteeSignature {
                validator_index: 0,
                signature: vec![0xCD; 64],
            }],
        };
        let encoded = value.encode();
        let (decoded, rest) = Guarantee::decode(&encoded).unwrap();
        assert_eq!(decoded, value);
        assert!(rest.is_empty());
    }

    #[test]
    fn disputes_extrinsic_round_trip() {
        let value = DisputesExtrinsic {
            verdicts: vec![Verdict {
                target: Hash32::new([1; 32]),
                epoch: 3,
                votes: vec![(Hash32::new([2; 32]), true), (Hash32::new([3; 32]), false)],
            }],
            culprits: vec![Culprit {
                target: Hash32::new([4; 32]),
                key: Hash32::new([5; 32]),
                signature: vec![0x01; 64],
            }],
            faults: vec![Fault {
                target: Hash32::new([6; 32]),
                vote: false,
                key: Hash32::new([7; 32]),
                signature: vec![0x02; 64],
            }],
        };
        let encoded = value.encode();
        let (decoded, rest) = DisputesExtrinsic::decode(&encoded).unwrap();
        assert_eq!(decoded, value);
        assert!(rest.is_empty());
    }

    #[test]
    fn full_extrinsic_round_trip() {
        let config = Config::tiny();
        let bits = config.assurance_bitfield_bytes() * 8;
        let value = Extrinsic {
            tickets: TicketsExtrinsic(vec![]),
            preimages: PreimagesExtrinsic(vec![Preimage {
                requester: 7,
                blob: vec![1, 2, 3],
            }]),
            guarantees: GuaranteesExtrinsic(vec![]),
            assurances: crate::assurance::AssurancesExtrinsic(vec![Assurance {
                anchor: Hash32::new([9; 32]),
                availability: vec![true; bits],
                assurer: 0,
                signature: vec![],
            }]),
            disputes: DisputesExtrinsic::default(),
        };
        let encoded = value.encode(&config);
        let (decoded, rest) = Extrinsic::decode(&encoded, &config).unwrap();
        assert_eq!(decoded, value);
        assert!(rest.is_empty());
    }
}
