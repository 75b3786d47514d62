//! Activity statistics state (§4.2 "Activity").

use jam_codec::{fixed, nat, ordered, sequence, Codec};

use crate::config::Config;
use crate::error::Result;
use crate::privileges::ServiceId;

/// Six `u32` counters per validator per epoch, 24 bytes, no length
/// prefix (the surrounding `Activity` fixes the count at `Cvalcount`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidatorStats {
    pub blocks_produced: u32,
    pub tickets_introduced: u32,
    pub preimages_introduced: u32,
    pub preimages_bytes: u32,
    pub guarantees_reported: u32,
    pub assurances_made: u32,
}

impl Codec for ValidatorStats {
    fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(24);
        for field in [
            self.blocks_produced,
            self.tickets_introduced,
            self.preimages_introduced,
            self.preimages_bytes,
            self.guarantees_reported,
            self.assurances_made,
        ] {
            out.extend(fixed::encode4(field as u64).expect("u32 fits in 4 bytes"));
        }
        out
    }

    fn decode(buf: &[u8]) -> jam_codec::Result<(Self, &[u8])> {
        let (blocks_produced, buf) = fixed::decode4(buf)?;
        let (tickets_introduced, buf) = fixed::decode4(buf)?;
        let (preimages_introduced, buf) = fixed::decode4(buf)?;
        let (preimages_bytes, buf) = fixed::decode4(buf)?;
        let (guarantees_reported, buf) = fixed::decode4(buf)?;
        let (assurances_made, buf) = fixed::decode4(buf)?;
        Ok((
            ValidatorStats {
                blocks_produced: blocks_produced as u32,
                tickets_introduced: tickets_introduced as u32,
                preimages_introduced: preimages_introduced as u32,
                preimages_bytes: preimages_bytes as u32,
                guarantees_reported: guarantees_reported as u32,
                assurances_made: assurances_made as u32,
            },
            buf,
        ))
    }
}

/// Eight natural-number counters per core, no length prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoreStats {
    pub gas_used: u64,
    pub imports: u64,
    pub extrinsic_count: u64,
    pub extrinsic_size: u64,
    pub exports: u64,
    pub bundle_size: u64,
    pub da_load: u64,
    pub popularity: u64,
}

impl Codec for CoreStats {
    fn encode(&self) -> Vec<u8> {
        let mut out = Vec::new();
        for field in [
            self.gas_used,
            self.imports,
            self.extrinsic_count,
            self.extrinsic_size,
            self.exports,
            self.bundle_size,
            self.da_load,
            self.popularity,
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
        let (bundle_size, buf) = nat::decode(buf)?;
        let (da_load, buf) = nat::decode(buf)?;
        let (popularity, buf) = nat::decode(buf)?;
        Ok((
            CoreStats {
                gas_used,
                imports,
                extrinsic_count,
                extrinsic_size,
                exports,
                bundle_size,
                da_load,
                popularity,
            },
            buf,
        ))
    }
}

/// Per-service activity, ten natural-number fields in fixed order:
/// `provision(count, size)`, `refinement(count, gas)`, `imports`,
/// `extrinsic_count`, `extrinsic_size`, `exports`, `accumulation(count, gas)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ServiceStats {
    pub provision_count: u64,
    pub provision_size: u64,
    pub refinement_count: u64,
    pub refinement_gas: u64,
    pub imports: u64,
    pub extrinsic_count: u64,
    pub extrinsic_size: u64,
    pub exports: u64,
    pub accumulation_count: u64,
    pub accumulation_gas: u64,
}

impl Codec for ServiceStats {
    fn encode(&self) -> Vec<u8> {
        let mut out = Vec::new();
        for field in [
            self.provision_count,
            self.provision_size,
            self.refinement_count,
            self.refinement_gas,
            self.imports,
            self.extrinsic_count,
            self.extrinsic_size,
            self.exports,
            self.accumulation_count,
            self.accumulation_gas,
        ] {
            out.extend(nat::encode(field));
        }
        out
    }

    fn decode(buf: &[u8]) -> jam_codec::Result<(Self, &[u8])> {
        let (provision_count, buf) = nat::decode(buf)?;
        let (provision_size, buf) = nat::decode(buf)?;
        let (refinement_count, buf) = nat::decode(buf)?;
        let (refinement_gas, buf) = nat::decode(buf)?;
        let (imports, buf) = nat::decode(buf)?;
        let (extrinsic_count, buf) = nat::decode(buf)?;
        let (extrinsic_size, buf) = nat::decode(buf)?;
        let (exports, buf) = nat::decode(buf)?;
        let (accumulation_count, buf) = nat::decode(buf)?;
        let (accumulation_gas, buf) = nat::decode(buf)?;
        Ok((
            ServiceStats {
                provision_count,
                provision_size,
                refinement_count,
                refinement_gas,
                imports,
                extrinsic_count,
                extrinsic_size,
                exports,
                accumulation_count,
                accumulation_gas,
            },
            buf,
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Activity {
    pub validator_stats: Vec<ValidatorStats>,
    pub validator_stats_previous: Vec<ValidatorStats>,
    pub core_stats: Vec<CoreStats>,
    /// Ordered dictionary, service id -> service stats.
    pub service_stats: Vec<(ServiceId, ServiceStats)>,
}

impl Activity {
    pub fn encode(&self) -> Vec<u8> {
        let mut out = sequence::encode_fixed(&self.validator_stats, |v| v.encode());
        out.extend(sequence::encode_fixed(&self.validator_stats_previous, |v| {
            v.encode()
        }));
        out.extend(sequence::encode_fixed(&self.core_stats, |c| c.encode()));
        out.extend(ordered::encode_dict(
            &self.service_stats,
            |k| fixed::encode4(*k as u64).expect("ServiceId fits in 4 bytes"),
            |v| v.encode(),
        ));
        out
    }

    pub fn decode<'a>(buf: &'a [u8], config: &Config) -> Result<(Self, &'a [u8])> {
        let (validator_stats, buf) =
            sequence::decode_fixed(buf, config.validator_count as usize, |b| {
                ValidatorStats::decode(b)
            })?;
        let (validator_stats_previous, buf) =
            sequence::decode_fixed(buf, config.validator_count as usize, |b| {
                ValidatorStats::decode(b)
            })?;
        let (core_stats, buf) = sequence::decode_fixed(buf, config.core_count as usize, |b| {
            CoreStats::decode(b)
        })?;
        let (service_stats, buf) = ordered::decode_dict(buf, |b| {
            let (k, b) = fixed::decode4(b)?;
            let (v, b) = ServiceStats::decode(b)?;
            Ok(((k as u32, v), b))
        })?;
        Ok((
            Activity {
                validator_stats,
                validator_stats_previous,
                core_stats,
                service_stats,
            },
            buf,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip() {
        let config = Config::tiny();
        let value = Activity {
            validator_stats: vec![ValidatorStats::default(); config.validator_count as usize],
            validator_stats_previous: vec![
                ValidatorStats {
                    blocks_produced: 1,
                    ..Default::default()
                };
                config.validator_count as usize
            ],
            core_stats: vec![CoreStats::default(); config.core_count as usize],
            service_stats: vec![
                (
                    1,
                    ServiceStats {
                        provision_count: 3,
                        ..Default::default()
                    },
                ),
                (0, ServiceStats::default()),
            ],
        };
        let encoded = value.encode();
        let (decoded, rest) = Activity::decode(&encoded, &config).unwrap();
        assert_eq!(decoded.service_stats, vec![(0, ServiceStats::default()), (1, value.service_stats[0].1)]);
        assert_eq!(decoded.core_stats.len(), config.core_count as usize);
        assert!(rest.is_empty());
    }
}
