//! The outer fuzz wire envelope (§4.5): `discriminator(1B) ++ payload`.
//!
//! Grounded on the discriminator-plus-payload shape every
//! `pallas_network2` miniprotocol message uses (e.g.
//! `pallas-network2/src/protocol/blockfetch.rs`'s `Message` enum), but
//! built as a pure value codec over this protocol's own byte framing
//! instead of minicbor, matching this codec's non-goal of transport
//! framing (§1).

use jam_codec::{blob, fixed, union, Codec};
use jam_crypto::Hash32;
use jam_types::{BlockHeader, Block, Config};
use tracing::trace;

use crate::ancestry::Ancestry;
use crate::error::{Error, Result};
use crate::kv::KeyValueSequence;
use crate::peer_info::PeerInfo;

const TAG_PEER_INFO: u8 = 0;
const TAG_INITIALIZE: u8 = 1;
const TAG_STATE_ROOT: u8 = 2;
const TAG_IMPORT_BLOCK: u8 = 3;
const TAG_GET_STATE: u8 = 4;
const TAG_STATE: u8 = 5;
const TAG_ERROR: u8 = 0xFF;

/// The `Initialize` payload: a header (consumed by its own codec, no
/// outer length prefix), a key/value sequence, and an ancestry list.
///
/// Decoders must tolerate zero-byte padding between the header and the
/// key/value sequence — an observed producer artifact (§4.5). A leading
/// `0x00` is, however, *also* a valid empty-sequence length prefix, so
/// [`Initialize::decode`] can't just retry after stripping a zero byte
/// the moment a parse succeeds: a padding byte and a genuine empty
/// sequence are indistinguishable by that test alone. Instead it tries
/// increasing padding skips and only commits to one that accounts for
/// every remaining byte (state + ancestry leave nothing over) — the
/// only signal that tells padding apart from a real empty sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Initialize {
    pub header: BlockHeader,
    pub state: KeyValueSequence,
    pub ancestry: Ancestry,
}

/// How many leading zero bytes [`Initialize::decode`] will try skipping
/// before giving up on padding tolerance. A generous bound: legitimate
/// padding artifacts are a handful of bytes at most.
const MAX_PADDING_SKIP: usize = 8;

impl Initialize {
    pub fn encode(&self) -> Vec<u8> {
        let mut out = self.header.encode();
        out.extend(self.state.encode());
        out.extend(self.ancestry.encode());
        out
    }

    pub fn decode(buf: &[u8]) -> Result<(Self, &[u8])> {
        let (header, rest) = BlockHeader::decode(buf)?;

        let max_skip = rest.len().min(MAX_PADDING_SKIP);
        for skip in 0..=max_skip {
            if skip > 0 && rest[skip - 1] != 0 {
                break;
            }
            let Ok((state, after_state)) = KeyValueSequence::decode(&rest[skip..]) else {
                continue;
            };
            let Ok((ancestry, after_ancestry)) = Ancestry::decode(after_state) else {
                continue;
            };
            if after_ancestry.is_empty() {
                if skip > 0 {
                    trace!(skip, "tolerated zero-byte padding before Initialize state");
                }
                return Ok((
                    Initialize {
                        header,
                        state,
                        ancestry,
                    },
                    after_ancestry,
                ));
            }
        }

        // No padding skip accounted for every remaining byte. Fall back
        // to the unpadded reading so a well-formed `Initialize` followed
        // by further stream content still decodes, just without padding
        // tolerance (whatever trailing bytes remain are handed back to
        // the caller, as with every other message in this envelope).
        let (state, after_state) = KeyValueSequence::decode(rest)?;
        let (ancestry, after_ancestry) = Ancestry::decode(after_state)?;
        Ok((
            Initialize {
                header,
                state,
                ancestry,
            },
            after_ancestry,
        ))
    }
}

/// `FuzzMessage`: the outer envelope (§4.5).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FuzzMessage {
    PeerInfo(PeerInfo),
    Initialize(Initialize),
    StateRoot(Hash32),
    ImportBlock(Block),
    GetState(Hash32),
    State(KeyValueSequence),
    Error(String),
}

impl FuzzMessage {
    /// The envelope has no outer length prefix (§4.5); an outer
    /// transport, out of scope for this codec, may add one.
    pub fn encode(&self, config: &Config) -> Vec<u8> {
        match self {
            FuzzMessage::PeerInfo(info) => union::encode(TAG_PEER_INFO, &info.encode()),
            FuzzMessage::Initialize(init) => union::encode(TAG_INITIALIZE, &init.encode()),
            FuzzMessage::StateRoot(hash) => {
                union::encode(TAG_STATE_ROOT, &fixed::encode_bytes(hash))
            }
            FuzzMessage::ImportBlock(block) => {
                union::encode(TAG_IMPORT_BLOCK, &block.encode(config))
            }
            FuzzMessage::GetState(hash) => union::encode(TAG_GET_STATE, &fixed::encode_bytes(hash)),
            FuzzMessage::State(kv) => union::encode(TAG_STATE, &kv.encode()),
            FuzzMessage::Error(message) => {
                union::encode(TAG_ERROR, &blob::encode(message.as_bytes()))
            }
        }
    }

    pub fn decode<'a>(buf: &'a [u8], config: &Config) -> Result<(Self, &'a [u8])> {
        let (tag, buf) = union::decode_tag(buf)?;
        match tag {
            TAG_PEER_INFO => {
                let (info, buf) = PeerInfo::decode(buf)?;
                Ok((FuzzMessage::PeerInfo(info), buf))
            }
            TAG_INITIALIZE => {
                let (init, buf) = Initialize::decode(buf)?;
                Ok((FuzzMessage::Initialize(init), buf))
            }
            TAG_STATE_ROOT => {
                let (bytes, buf) = fixed::decode_bytes::<32>(buf)?;
                Ok((FuzzMessage::StateRoot(Hash32::new(bytes)), buf))
            }
            TAG_IMPORT_BLOCK => {
                // The entire remaining payload is a block; no extra
                // length prefix (§4.5).
                let block = Block::decode(buf, config)
                    .and_then(|(block, rest)| {
                        if rest.is_empty() {
                            Ok(block)
                        } else {
                            Err(jam_types::Error::ShapeMismatch(
                                "trailing bytes after ImportBlock payload",
                            ))
                        }
                    })?;
                Ok((FuzzMessage::ImportBlock(block), &[]))
            }
            TAG_GET_STATE => {
                let (bytes, buf) = fixed::decode_bytes::<32>(buf)?;
                Ok((FuzzMessage::GetState(Hash32::new(bytes)), buf))
            }
            TAG_STATE => {
                let (kv, buf) = KeyValueSequence::decode(buf)?;
                Ok((FuzzMessage::State(kv), buf))
            }
            TAG_ERROR => {
                let (bytes, buf) = blob::decode(buf)?;
                let message = String::from_utf8(bytes)
                    .map_err(|_| Error::ShapeMismatch("error message is not valid utf-8"))?;
                Ok((FuzzMessage::Error(message), buf))
            }
            other => Err(Error::UnknownVariant(other)),
        }
    }
}
