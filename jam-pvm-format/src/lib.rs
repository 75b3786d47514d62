//! PVM program-blob header recognizers (§4.4).
//!
//! Two formats: [`deblob`], the instructions-plus-jump-table shape, and
//! [`yformat`], the preimage-embedded shape the state-key classifier's
//! preimage test relies on. PVM instruction semantics are out of scope —
//! this crate only recognizes whether a blob's header parses.

pub mod deblob;
pub mod error;
pub mod yformat;

pub use error::{Error, Result};
