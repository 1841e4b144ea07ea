//! Shuffler
//!
//! Uniformly random, in-place permutation of an integer sequence using the
//! backward Fisher-Yates (Knuth) shuffle.
//!
//! - `shuffle` seeds a fresh generator from OS entropy on every call
//! - `try_shuffle` reports absent sequences and entropy failures as errors
//! - `shuffle_with` runs the same algorithm with a caller-supplied generator

pub mod error;
pub mod shuffle;

pub use error::{Result, ShuffleError};
pub use shuffle::{shuffle, shuffle_with, try_shuffle};
