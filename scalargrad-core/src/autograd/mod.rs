//! # Autograd Module
//!
//! Reverse-mode differentiation over the scalar [`Graph`](crate::graph::Graph):
//!
//! - [`graph`]: iterative topological sort of the subgraph behind a root.
//! - `backward`: `Graph::backward`, the chain-rule accumulation pass.
//! - [`grad_check`]: finite-difference verification of analytical gradients.
//! - [`dot`]: read-only Graphviz export for debugging.

pub mod backward;
pub mod dot;
pub mod grad_check;
pub mod graph;

pub use dot::to_dot;
pub use grad_check::{check_grad, GradCheckError};
pub use graph::topological_sort;
