// scalargrad-core/src/ops/arithmetic/sub.rs

use crate::error::ScalarGradError;
use crate::graph::{Graph, NodeId};
use crate::types::{Op, Tag};

/// Subtracts two scalars: `a - b`.
///
/// Local derivatives: `[1, -1]`.
pub fn sub_op(graph: &mut Graph, a: NodeId, b: NodeId) -> Result<NodeId, ScalarGradError> {
    let a_val = graph.value(a)?;
    let b_val = graph.value(b)?;
    graph.push_op(a_val - b_val, vec![a, b], vec![1.0, -1.0], Tag::Op(Op::Sub))
}

impl Graph {
    /// Builds `a - b`. See [`sub_op`].
    pub fn sub(&mut self, a: NodeId, b: NodeId) -> Result<NodeId, ScalarGradError> {
        sub_op(self, a, b)
    }
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
