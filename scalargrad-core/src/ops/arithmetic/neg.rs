// scalargrad-core/src/ops/arithmetic/neg.rs

use crate::error::ScalarGradError;
use crate::graph::{Graph, NodeId};

/// Negates a scalar: `-a`, built as `a * (-1)` with a constant leaf.
pub fn neg_op(graph: &mut Graph, a: NodeId) -> Result<NodeId, ScalarGradError> {
    graph.check(a)?;
    let minus_one = graph.constant(-1.0);
    graph.mul(a, minus_one)
}

impl Graph {
    /// Builds `-a`. See [`neg_op`].
    pub fn neg(&mut self, a: NodeId) -> Result<NodeId, ScalarGradError> {
        neg_op(self, a)
    }
}
