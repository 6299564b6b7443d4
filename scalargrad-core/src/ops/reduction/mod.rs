// src/ops/reduction/mod.rs
// Reductions over a sequence of scalars, built from binary ops.

pub mod mean;
pub mod sum;

pub use mean::mean_op;
pub use sum::sum_op;
