use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Codec(#[from] jam_codec::Error),

    #[error("shape mismatch: {0}")]
    ShapeMismatch(&'static str),

    /// A preimage candidate's derived digest did not map back to its own
    /// key under the required Blake2b derivation (§4.3.2 step 2, §7).
    #[error("crypto mismatch: preimage candidate does not map back to its key")]
    CryptoMismatch,

    /// A preimage candidate's value did not parse as a recognizable PVM
    /// program header (§4.4, §7).
    #[error("program malformed: {0}")]
    ProgramMalformed(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
