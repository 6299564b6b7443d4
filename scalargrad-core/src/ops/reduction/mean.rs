// scalargrad-core/src/ops/reduction/mean.rs

use crate::error::ScalarGradError;
use crate::graph::{Graph, NodeId};

/// Averages a sequence of scalars: `sum(terms) / len(terms)`.
///
/// The count enters the graph as a constant leaf.
pub fn mean_op(graph: &mut Graph, terms: &[NodeId]) -> Result<NodeId, ScalarGradError> {
    if terms.is_empty() {
        return Err(ScalarGradError::EmptyInput {
            operation: "mean".to_string(),
        });
    }
    let total = graph.sum(terms)?;
    let count = graph.constant(terms.len() as f64);
    graph.div(total, count)
}

impl Graph {
    /// Builds the mean of `terms`. See [`mean_op`].
    pub fn mean(&mut self, terms: &[NodeId]) -> Result<NodeId, ScalarGradError> {
        mean_op(self, terms)
    }
}
