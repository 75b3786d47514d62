use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Codec(#[from] jam_codec::Error),

    #[error(transparent)]
    Types(#[from] jam_types::Error),

    #[error("unknown fuzz message discriminator: {0:#04x}")]
    UnknownVariant(u8),

    #[error("shape mismatch: {0}")]
    ShapeMismatch(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
