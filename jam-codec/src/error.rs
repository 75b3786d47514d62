use thiserror::Error;

/// The flat error taxonomy shared by every decoder in this crate and by
/// every crate built on top of it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("insufficient data: needed {needed} bytes, had {available}")]
    InsufficientData { needed: usize, available: usize },

    #[error("value out of range for target encoding")]
    OutOfRange,

    #[error("unknown discriminator variant: {0}")]
    UnknownVariant(u8),

    #[error("invalid optional tag: {0:#04x}")]
    InvalidOptionalTag(u8),

    #[error("shape mismatch: {0}")]
    ShapeMismatch(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Require at least `needed` bytes to remain in `buf`. Exposed so that
/// downstream crates composing new primitives over this kernel (the
/// PVM-format recognizer, the state-key parser) can reuse the same
/// bounds-check discipline instead of re-deriving it.
#[inline]
pub fn require(buf: &[u8], needed: usize) -> Result<()> {
    if buf.len() < needed {
        Err(Error::InsufficientData {
            needed,
            available: buf.len(),
        })
    } else {
        Ok(())
    }
}
