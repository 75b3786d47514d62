//! Privileges state (§4.2 "Privileges").
//!
//! `manager, firstAssigner, delegator, registrar` (4 bytes each, 16 bytes
//! total) followed by the ordered `alwaysAccers: ServiceId(4B) -> Gas(4B)`
//! dictionary. The dictionary's `Gas` entries are encoded in 4 bytes, per
//! the explicit wire layout spec.md §4.2 gives — narrower than the
//! 64-bit `Gas` domain used elsewhere (e.g. `WorkResult::accumulate_gas`,
//! `encode[8]`); this module follows the literal byte count spec.md's
//! prose specifies for this one field.

use jam_codec::{fixed, ordered, Codec};

use crate::error::Result;

pub type ServiceId = u32;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Privileges {
    pub manager: ServiceId,
    pub first_assigner: ServiceId,
    pub delegator: ServiceId,
    pub registrar: ServiceId,
    /// Ordered dictionary: service id -> always-accumulate gas budget.
    pub always_accers: Vec<(ServiceId, u32)>,
}

impl Codec for Privileges {
    fn encode(&self) -> Vec<u8> {
        let mut out = Vec::new();
        for id in [
            self.manager,
            self.first_assigner,
            self.delegator,
            self.registrar,
        ] {
            out.extend(fixed::encode4(id as u64).expect("ServiceId fits in 4 bytes"));
        }
        out.extend(ordered::encode_dict(
            &self.always_accers,
            |k| fixed::encode4(*k as u64).expect("ServiceId fits in 4 bytes"),
            |v| fixed::encode4(*v as u64).expect("Gas fits in 4 bytes"),
        ));
        out
    }

    fn decode(buf: &[u8]) -> jam_codec::Result<(Self, &[u8])> {
        let (manager, buf) = fixed::decode4(buf)?;
        let (first_assigner, buf) = fixed::decode4(buf)?;
        let (delegator, buf) = fixed::decode4(buf)?;
        let (registrar, buf) = fixed::decode4(buf)?;
        let (always_accers, buf) = ordered::decode_dict(buf, |b| {
            let (k, b) = fixed::decode4(b)?;
            let (v, b) = fixed::decode4(b)?;
            Ok(((k as u32, v as u32), b))
        })?;
        Ok((
            Privileges {
                manager: manager as u32,
                first_assigner: first_assigner as u32,
                delegator: delegator as u32,
                registrar: registrar as u32,
                always_accers,
            },
            buf,
        ))
    }
}

impl Privileges {
    pub fn decode_checked(buf: &[u8]) -> Result<Self> {
        Ok(Self::decode_exact(buf)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip() {
        let value = Privileges {
            manager: 1,
            first_assigner: 2,
            delegator: 3,
            registrar: 4,
            always_accers: vec![(10, 100), (5, 50)],
        };
        let encoded = value.encode();
        assert_eq!(&encoded[..16], &[1, 0, 0, 0, 2, 0, 0, 0, 3, 0, 0, 0, 4, 0, 0, 0]);
        let (decoded, rest) = Privileges::decode(&encoded).unwrap();
        assert_eq!(decoded.always_accers, vec![(5, 50), (10, 100)]);
        assert_eq!(decoded.manager, value.manager);
        assert!(rest.is_empty());
    }
}
