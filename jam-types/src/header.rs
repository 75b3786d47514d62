//! Block header (§7 supplement).

use jam_codec::{fixed, optional, sequence, Codec};
use jam_crypto::{Hash32, RingRoot};

/// Marks an epoch transition: the next epoch's Bandersnatch ring root
/// plus the validator keys entering the active set.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EpochMark {
    pub entropy: Hash32,
    pub ticket_entropy: Hash32,
    pub validators: Vec<Hash32>,
}

impl Codec for EpochMark {
    fn encode(&self) -> Vec<u8> {
        let mut out = self.entropy.encode();
        out.extend(self.ticket_entropy.encode());
        out.extend(sequence::encode_var(&self.validators, |v| v.encode()));
        out
    }

    fn decode(buf: &[u8]) -> jam_codec::Result<(Self, &[u8])> {
        let (entropy, buf) = Hash32::decode(buf)?;
        let (ticket_entropy, buf) = Hash32::decode(buf)?;
        let (validators, buf) = sequence::decode_var(buf, |b| Hash32::decode(b))?;
        Ok((
            EpochMark {
                entropy,
                ticket_entropy,
                validators,
            },
            buf,
        ))
    }
}

/// Marks the epoch's finalized ticket sequence, once Safrole has settled it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TicketsMark(pub Vec<Hash32>);

impl Codec for TicketsMark {
    fn encode(&self) -> Vec<u8> {
        sequence::encode_var(&self.0, |h| h.encode())
    }

    fn decode(buf: &[u8]) -> jam_codec::Result<(Self, &[u8])> {
        let (marks, buf) = sequence::decode_var(buf, |b| Hash32::decode(b))?;
        Ok((TicketsMark(marks), buf))
    }
}

/// The ring root carried by an [`EpochMark`] lives alongside validator
/// keys, not inline here — kept for callers that want the 144-byte
/// identity form without pulling in the whole safrole module.
pub type EpochRingRoot = RingRoot;

/// Block header: the fields every block commits to, independent of the
/// extrinsic content it authorizes (§7 supplement).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockHeader {
    pub parent: Hash32,
    pub prior_state_root: Hash32,
    pub extrinsic_hash: Hash32,
    pub timeslot: u32,
    pub epoch_mark: Option<EpochMark>,
    pub tickets_mark: Option<TicketsMark>,
    pub offenders_mark: Vec<Hash32>,
    pub author_index: u16,
    pub vrf_signature: Vec<u8>,
    pub seal_signature: Vec<u8>,
}

impl Codec for BlockHeader {
    fn encode(&self) -> Vec<u8> {
        let mut out = self.parent.encode();
        out.extend(self.prior_state_root.encode());
        out.extend(self.extrinsic_hash.encode());
        out.extend(fixed::encode4(self.timeslot as u64).expect("u32 fits in 4 bytes"));
        out.extend(optional::encode(&self.epoch_mark, |m| m.encode()));
        out.extend(optional::encode(&self.tickets_mark, |m| m.encode()));
        out.extend(sequence::encode_var(&self.offenders_mark, |h| h.encode()));
        out.extend(fixed::encode2(self.author_index as u64).expect("u16 fits in 2 bytes"));
        out.extend(jam_codec::blob::encode(&self.vrf_signature));
        out.extend(jam_codec::blob::encode(&self.seal_signature));
        out
    }

    fn decode(buf: &[u8]) -> jam_codec::Result<(Self, &[u8])> {
        let (parent, buf) = Hash32::decode(buf)?;
        let (prior_state_root, buf) = Hash32::decode(buf)?;
        let (extrinsic_hash, buf) = Hash32::decode(buf)?;
        let (timeslot, buf) = fixed::decode4(buf)?;
        let (epoch_mark, buf) = optional::decode(buf, |b| EpochMark::decode(b))?;
        let (tickets_mark, buf) = optional::decode(buf, |b| TicketsMark::decode(b))?;
        let (offenders_mark, buf) = sequence::decode_var(buf, |b| Hash32::decode(b))?;
        let (author_index, buf) = fixed::decode2(buf)?;
        let (vrf_signature, buf) = jam_codec::blob::decode(buf)?;
        let (seal_signature, buf) = jam_codec::blob::decode(buf)?;
        Ok((
            BlockHeader {
                parent,
                prior_state_root,
                extrinsic_hash,
                timeslot: timeslot as u32,
                epoch_mark,
                tickets_mark,
                offenders_mark,
                author_index: author_index as u16,
                vrf_signature,
                seal_signature,
            },
            buf,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(epoch_mark: Option<EpochMark>, tickets_mark: Option<TicketsMark>) -> BlockHeader {
        BlockHeader {
            parent: Hash32::new([1; 32]),
            prior_state_root: Hash32::new([2; 32]),
            extrinsic_hash: Hash32::new([3; 32]),
            timeslot: 99,
            epoch_mark,
            tickets_mark,
            offenders_mark: vec![Hash32::new([4; 32])],
            author_index: 7,
            vrf_signature: vec![0xAA; 96],
            seal_signature: vec![0xBB; 96],
        }
    }

    #[test]
    fn round_trip_without_marks() {
        let value = header(None, None);
        let encoded = value.encode();
        let (decoded, rest) = BlockHeader::decode(&encoded).unwrap();
        assert_eq!(decoded, value);
        assert!(rest.is_empty());
    }

    #[test]
    fn round_trip_with_marks() {
        let value = header(
            Some(EpochMark {
                entropy: Hash32::new([5; 32]),
                ticket_entropy: Hash32::new([6; 32]),
                validators: vec![Hash32::new([7; 32]), Hash32::new([8; 32])],
            }),
            Some(TicketsMark(vec![Hash32::new([9; 32])])),
        );
        let encoded = value.encode();
        let (decoded, rest) = BlockHeader::decode(&encoded).unwrap();
        assert_eq!(decoded, value);
        assert!(rest.is_empty());
    }
}
