//! Hash and digest primitives for the JAM codec.

pub mod hash;
pub mod hasher;

pub use hash::{Hash, Hash32, RingRoot};
pub use hasher::{blake2b_256, Hasher};
