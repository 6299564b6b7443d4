use crate::error::ScalarGradError;
use crate::graph::{Graph, NodeId};
use crate::types::{Op, Tag};

// --- Forward Operation ---

/// Applies the Rectified Linear Unit: `relu(a) = max(a, 0)`.
///
/// Local derivative: `[1]` if `a > 0`, otherwise `[0]`. The subgradient at
/// exactly 0 is 0.
pub fn relu_op(graph: &mut Graph, a: NodeId) -> Result<NodeId, ScalarGradError> {
    let a_val = graph.value(a)?;
    let (value, derivative) = if a_val > 0.0 { (a_val, 1.0) } else { (0.0, 0.0) };
    graph.push_op(value, vec![a], vec![derivative], Tag::Op(Op::Relu))
}

impl Graph {
    /// Builds `relu(a)`. See [`relu_op`].
    pub fn relu(&mut self, a: NodeId) -> Result<NodeId, ScalarGradError> {
        relu_op(self, a)
    }
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
