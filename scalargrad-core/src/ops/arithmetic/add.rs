// scalargrad-core/src/ops/arithmetic/add.rs

use crate::error::ScalarGradError;
use crate::graph::{Graph, NodeId};
use crate::types::{Op, Tag};

/// Adds two scalars: `a + b`.
///
/// Local derivatives: `[1, 1]`.
pub fn add_op(graph: &mut Graph, a: NodeId, b: NodeId) -> Result<NodeId, ScalarGradError> {
    let a_val = graph.value(a)?;
    let b_val = graph.value(b)?;
    graph.push_op(a_val + b_val, vec![a, b], vec![1.0, 1.0], Tag::Op(Op::Add))
}

impl Graph {
    /// Builds `a + b`. See [`add_op`].
    pub fn add(&mut self, a: NodeId, b: NodeId) -> Result<NodeId, ScalarGradError> {
        add_op(self, a, b)
    }
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
