//! Safrole state (§4.2 "Safrole state").

use jam_codec::{nat, sequence, Codec};
use jam_crypto::{Hash32, RingRoot};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::validator_key::ValidatorKey;

/// The two-field projection of a ticket used in state serialization
/// (distinct from the proof-bearing extrinsic ticket, see [`crate::extrinsic::Ticket`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SafroleTicket {
    pub id: Hash32,
    pub entry_index: u64,
}

impl Codec for SafroleTicket {
    fn encode(&self) -> Vec<u8> {
        let mut out = self.id.encode();
        out.extend(nat::encode(self.entry_index));
        out
    }

    fn decode(buf: &[u8]) -> jam_codec::Result<(Self, &[u8])> {
        let (id, buf) = Hash32::decode(buf)?;
        let (entry_index, buf) = nat::decode(buf)?;
        Ok((SafroleTicket { id, entry_index }, buf))
    }
}

/// The seal-tickets slot: homogeneous across the whole epoch, either all
/// [`SafroleTicket`] or all raw Bandersnatch keys — a one-byte
/// discriminator upfront selects which (§4.2).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SealTickets {
    Tickets(Vec<SafroleTicket>),
    Keys(Vec<Hash32>),
}

impl SealTickets {
    fn encode(&self) -> Vec<u8> {
        match self {
            SealTickets::Tickets(tickets) => {
                let mut out = nat::encode(0);
                out.extend(sequence::encode_fixed(tickets, |t| t.encode()));
                out
            }
            SealTickets::Keys(keys) => {
                let mut out = nat::encode(1);
                out.extend(sequence::encode_fixed(keys, |k| k.encode()));
                out
            }
        }
    }

    fn decode(buf: &[u8], epoch_length: usize) -> Result<(Self, &[u8])> {
        let (discriminator, buf) = nat::decode(buf)?;
        match discriminator {
            0 => {
                let (tickets, buf) =
                    sequence::decode_fixed(buf, epoch_length, |b| SafroleTicket::decode(b))?;
                Ok((SealTickets::Tickets(tickets), buf))
            }
            1 => {
                let (keys, buf) =
                    sequence::decode_fixed(buf, epoch_length, |b| Hash32::decode(b))?;
                Ok((SealTickets::Keys(keys), buf))
            }
            _ => Err(Error::ShapeMismatch(
                "seal-tickets discriminator must be 0 (tickets) or 1 (keys)",
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SafroleState {
    pub pending_set: Vec<ValidatorKey>,
    /// 144-byte Bandersnatch ring root. Two source files disagreed on 32
    /// vs. 144 bytes; per spec.md §9, 144 is authoritative and the 32-byte
    /// path is a stale historical artifact not implemented here.
    pub epoch_root: RingRoot,
    pub seal_tickets: SealTickets,
    pub ticket_accumulator: Vec<SafroleTicket>,
}

impl SafroleState {
    pub fn encode(&self) -> Vec<u8> {
        let mut out = sequence::encode_fixed(&self.pending_set, |k| k.encode());
        out.extend(self.epoch_root.encode());
        out.extend(self.seal_tickets.encode());
        out.extend(sequence::encode_var(&self.ticket_accumulator, |t| {
            t.encode()
        }));
        out
    }

    pub fn decode<'a>(buf: &'a [u8], config: &Config) -> Result<(Self, &'a [u8])> {
        let (pending_set, buf) =
            sequence::decode_fixed(buf, config.validator_count as usize, |b| {
                ValidatorKey::decode(b)
            })?;
        let (epoch_root, buf) = RingRoot::decode(buf)?;
        let (seal_tickets, buf) = SealTickets::decode(buf, config.epoch_length as usize)?;
        let (ticket_accumulator, buf) =
            sequence::decode_var(buf, |b| SafroleTicket::decode(b))?;
        Ok((
            SafroleState {
                pending_set,
                epoch_root,
                seal_tickets,
                ticket_accumulator,
            },
            buf,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(b: u8) -> ValidatorKey {
        ValidatorKey {
            bandersnatch: Hash32::new([b; 32]),
            ed25519: Hash32::new([b; 32]),
            bls: [b; 144],
            metadata: [b; 128],
        }
    }

    #[test]
    fn round_trip_with_ticket_variant() {
        let config = Config::tiny();
        let state = SafroleState {
            pending_set: (0..config.validator_count as u8).map(key).collect(),
            epoch_root: RingRoot::new([7; 144]),
            seal_tickets: SealTickets::Tickets(
                (0..config.epoch_length)
                    .map(|i| SafroleTicket {
                        id: Hash32::new([i as u8; 32]),
                        entry_index: i as u64,
                    })
                    .collect(),
            ),
            ticket_accumulator: vec![SafroleTicket {
                id: Hash32::new([9; 32]),
                entry_index: 3,
            }],
        };
        let encoded = state.encode();
        let (decoded, rest) = SafroleState::decode(&encoded, &config).unwrap();
        assert_eq!(decoded, state);
        assert!(rest.is_empty());
    }

    #[test]
    fn round_trip_with_keys_variant() {
        let config = Config::tiny();
        let state = SafroleState {
            pending_set: (0..config.validator_count as u8).map(key).collect(),
            epoch_root: RingRoot::new([1; 144]),
            seal_tickets: SealTickets::Keys(
                (0..config.epoch_length)
                    .map(|i| Hash32::new([i as u8; 32]))
                    .collect(),
            ),
            ticket_accumulator: vec![],
        };
        let encoded = state.encode();
        let (decoded, rest) = SafroleState::decode(&encoded, &config).unwrap();
        assert_eq!(decoded, state);
        assert!(rest.is_empty());
    }

    #[test]
    fn rejects_unknown_discriminator() {
        let mut buf = nat::encode(2);
        buf.extend(vec![0u8; 32]);
        assert!(SealTickets::decode(&buf, 1).is_err());
    }
}
