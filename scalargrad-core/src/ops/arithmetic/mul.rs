// scalargrad-core/src/ops/arithmetic/mul.rs

use crate::error::ScalarGradError;
use crate::graph::{Graph, NodeId};
use crate::types::{Op, Tag};

/// Multiplies two scalars: `a * b`.
///
/// Local derivatives: `[b, a]`, captured at construction time.
pub fn mul_op(graph: &mut Graph, a: NodeId, b: NodeId) -> Result<NodeId, ScalarGradError> {
    let a_val = graph.value(a)?;
    let b_val = graph.value(b)?;
    graph.push_op(a_val * b_val, vec![a, b], vec![b_val, a_val], Tag::Op(Op::Mul))
}

impl Graph {
    /// Builds `a * b`. See [`mul_op`].
    pub fn mul(&mut self, a: NodeId, b: NodeId) -> Result<NodeId, ScalarGradError> {
        mul_op(self, a, b)
    }
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
