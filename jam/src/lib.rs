//! Canonical binary codec for the JAM consensus protocol.
//!
//! This crate doesn't provide any particular application; it's meant to be
//! used as a base layer for state-transition functions, conformance fuzzers,
//! explorers and other tooling that needs to read or write JAM's on-chain
//! and in-state byte formats. Each module here is a thin re-export of its
//! own standalone crate, so downstream users can depend on just the layer
//! they need.

#[doc(inline)]
pub use jam_codec as codec;

#[doc(inline)]
pub use jam_crypto as crypto;

#[doc(inline)]
pub use jam_types as types;

pub mod pvm {
    //! PVM program blob formats: the jump-table "deblob" layout and the
    //! preimage-embedded "Y-format" header (§6).

    #[doc(inline)]
    pub use jam_pvm_format::*;
}

#[doc(inline)]
pub use jam_statekey as statekey;

#[cfg(feature = "fuzz")]
#[doc(inline)]
pub use jam_fuzz as fuzz;
