//! # Scalar Operations Module (`ops`)
//!
//! The fixed vocabulary of differentiable operations. Each operation reads its
//! operands' current values, computes the result together with the local
//! derivative of the result with respect to every operand, and appends one
//! new node to the [`Graph`](crate::graph::Graph). Operands are never
//! mutated.
//!
//! ## Structure:
//!
//! - **`_op` Functions:** every operation has a free function (`add_op`,
//!   `relu_op`, ...) taking the graph explicitly.
//! - **`Graph` methods:** the same operations as methods (`graph.add(a, b)`),
//!   defined next to each `_op` function.
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: add, sub, mul, div, pow (plus `neg`, built from `mul`).
//! - [`activation`]: relu.
//! - [`reduction`]: sum and mean over a slice, built from `add` and `div`.

pub mod activation;
pub mod arithmetic;
pub mod reduction;

pub use activation::relu_op;
pub use arithmetic::{add_op, div_op, mul_op, neg_op, pow_op, sub_op};
pub use reduction::{mean_op, sum_op};
