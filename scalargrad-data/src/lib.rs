//! # scalargrad-data
//!
//! Small in-memory datasets for training `scalargrad-core` networks: a
//! [`Dataset`] trait, a [`VecDataset`] of `(input, target)` vectors, and the
//! toy XOR and two-moons problems.

pub mod datasets;

// Re-export main components
pub use datasets::{moons, xor, Dataset, VecDataset};
