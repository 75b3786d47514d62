use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Codec(#[from] jam_codec::Error),

    #[error("program malformed: {0}")]
    ProgramMalformed(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
