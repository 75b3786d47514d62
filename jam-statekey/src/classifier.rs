//! The storage/preimage/request classifier (§4.3.2 — "the hardest piece
//! of the core").
//!
//! Given a service's `C(s,h)` key/value entries, every key receives
//! exactly one label purely from the relationship between its key bits
//! and its value's content: there is no explicit tag on the wire.

use jam_codec::fixed;
use jam_crypto::{blake2b_256, Hash32};
use jam_pvm_format::yformat;
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::key::{self, KEY_LEN};

/// The sentinel high 4 bytes prefixed onto a preimage's own digest
/// before re-hashing, per §4.3.2 step 2.
const PREIMAGE_SENTINEL: u64 = 0xFFFF_FFFE;

/// Maximum number of pending timeslots a request entry may carry (§4.3.2
/// step 3).
const MAX_REQUEST_TIMESLOTS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Label {
    /// A preimage blob: `digest` is its own Blake2b-256 hash.
    Preimage { digest: Hash32, value: Vec<u8> },
    /// A preimage request. `digest` is the matched preimage's hash, or
    /// the zero hash for a pending request with no matching preimage
    /// yet. `timeslots` is the ascending timeslot list the entry's value
    /// carried.
    Request {
        digest: Hash32,
        timeslots: Vec<u32>,
        pending: bool,
    },
    /// Anything left over: raw key-component/value storage.
    Storage { a: [u8; 27], value: Vec<u8> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedEntry {
    pub key: [u8; KEY_LEN],
    pub label: Label,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Classification {
    pub entries: Vec<ClassifiedEntry>,
    /// `items = 2 * |requests| + |storage|` (§4.3.2); preimages do not
    /// contribute.
    pub items: u64,
}

struct PreimageRecord {
    digest: Hash32,
    length: u32,
}

fn derive_a(input: &[u8]) -> [u8; 27] {
    let digest = blake2b_256(input);
    let mut a = [0u8; 27];
    a.copy_from_slice(&digest[..27]);
    a
}

fn de_interleave_a(raw_key: &[u8; KEY_LEN]) -> [u8; 27] {
    match key::parse(raw_key) {
        key::ParsedKey::ServiceHash { a, .. } => a,
        // Chapter-only and chapter+service forms never reach the
        // classifier; callers only feed it a service's C(s,h) entries.
        _ => [0u8; 27],
    }
}

/// Does `value` parse as a recognizable preimage-shaped PVM program?
/// Only the Y-format header is checked, per §4.3.2 step 2's explicit
/// "metadata-length-prefix + Y-format header" wording.
fn looks_like_preimage_program(value: &[u8]) -> bool {
    yformat::looks_like_program(value)
}

/// Classify a service's `C(s,h)` entries into storage/preimage/request
/// buckets (§4.3.2). `current_timeslot`, if supplied, bounds which
/// request entries may be labeled pending.
pub fn classify(
    service: u32,
    entries: &[([u8; KEY_LEN], Vec<u8>)],
    current_timeslot: Option<u32>,
) -> Result<Classification> {
    let sentinel_prefix = fixed::encode4(PREIMAGE_SENTINEL)?;

    let mut labels: Vec<Option<Label>> = vec![None; entries.len()];
    let mut preimages = Vec::new();

    for (idx, (raw_key, value)) in entries.iter().enumerate() {
        let a = de_interleave_a(raw_key);
        let digest = blake2b_256(value);
        let mut candidate = sentinel_prefix.clone();
        candidate.extend_from_slice(&digest);
        let k_prime = derive_a(&candidate);

        if k_prime == a && looks_like_preimage_program(value) {
            trace!(service, idx, "entry classified as preimage");
            preimages.push(PreimageRecord {
                digest,
                length: value.len() as u32,
            });
            labels[idx] = Some(Label::Preimage {
                digest,
                value: value.clone(),
            });
        }
    }

    let mut request_count = 0u64;
    let mut storage_count = 0u64;

    for (idx, (raw_key, value)) in entries.iter().enumerate() {
        if labels[idx].is_some() {
            continue;
        }

        match parse_request_shape(value, current_timeslot) {
            Some(timeslots) => {
                let matched = preimages.iter().find(|record| {
                    let x = {
                        let mut buf = fixed::encode4(record.length as u64)
                            .expect("u32 length fits in 4 bytes");
                        buf.extend_from_slice(&record.digest);
                        buf
                    };
                    let a = derive_a(&x);
                    key::service_hash(service, &a) == *raw_key
                });

                match matched {
                    Some(record) => {
                        trace!(service, idx, "entry classified as matched request");
                        labels[idx] = Some(Label::Request {
                            digest: record.digest,
                            timeslots,
                            pending: false,
                        });
                        request_count += 1;
                    }
                    None if current_timeslot.is_some() => {
                        trace!(service, idx, "entry classified as pending request");
                        labels[idx] = Some(Label::Request {
                            digest: Hash32::zero(),
                            timeslots,
                            pending: true,
                        });
                        request_count += 1;
                    }
                    None => {
                        let a = de_interleave_a(raw_key);
                        labels[idx] = Some(Label::Storage {
                            a,
                            value: value.clone(),
                        });
                        storage_count += 1;
                    }
                }
            }
            None => {
                let a = de_interleave_a(raw_key);
                labels[idx] = Some(Label::Storage {
                    a,
                    value: value.clone(),
                });
                storage_count += 1;
            }
        }
    }

    let classified_entries = entries
        .iter()
        .zip(labels)
        .map(|((raw_key, _), label)| ClassifiedEntry {
            key: *raw_key,
            label: label.expect("every entry receives exactly one label"),
        })
        .collect();

    let items = 2 * request_count + storage_count;
    debug!(service, items, request_count, storage_count, "classified service entries");

    Ok(Classification {
        entries: classified_entries,
        items,
    })
}

/// Parse the request-entry value shape (§4.3.2 step 3): a natural length
/// `m <= 3`, then `m` little-endian `u32` timeslots, weakly ascending
/// and each `<= current_timeslot` when one is supplied. Returns `None`
/// if the shape doesn't match — the caller then falls back to storage.
fn parse_request_shape(value: &[u8], current_timeslot: Option<u32>) -> Option<Vec<u32>> {
    let (m, rest) = jam_codec::nat::decode(value).ok()?;
    if m as usize > MAX_REQUEST_TIMESLOTS {
        return None;
    }
    let m = m as usize;
    if rest.len() != m * 4 {
        return None;
    }

    let mut timeslots = Vec::with_capacity(m);
    let mut cursor = rest;
    for _ in 0..m {
        let (slot, tail) = fixed::decode4(cursor).ok()?;
        timeslots.push(slot as u32);
        cursor = tail;
    }

    if !timeslots.windows(2).all(|pair| pair[0] <= pair[1]) {
        return None;
    }
    if let Some(now) = current_timeslot {
        if timeslots.iter().any(|slot| *slot > now) {
            return None;
        }
    }

    Some(timeslots)
}

/// Surfaces `jam_codec`'s `ShapeMismatch` under this crate's own error
/// type for callers that want a hard failure instead of a fallback
/// label (e.g. a caller asserting a specific entry must be well-formed).
pub fn require_request_shape(value: &[u8], current_timeslot: Option<u32>) -> Result<Vec<u32>> {
    parse_request_shape(value, current_timeslot)
        .ok_or(Error::ShapeMismatch("request value has unexpected shape"))
}
