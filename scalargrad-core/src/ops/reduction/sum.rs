// scalargrad-core/src/ops/reduction/sum.rs

use crate::error::ScalarGradError;
use crate::graph::{Graph, NodeId};

/// Sums a sequence of scalars as a left fold of binary `add` nodes.
///
/// A single-element slice returns that element unchanged.
///
/// # Errors
/// `EmptyInput` for an empty slice; `UnknownNode` if any handle is invalid
/// (checked before the first node is built).
pub fn sum_op(graph: &mut Graph, terms: &[NodeId]) -> Result<NodeId, ScalarGradError> {
    let (&first, rest) = terms.split_first().ok_or_else(|| ScalarGradError::EmptyInput {
        operation: "sum".to_string(),
    })?;
    for &term in terms {
        graph.check(term)?;
    }
    rest.iter().try_fold(first, |acc, &term| graph.add(acc, term))
}

impl Graph {
    /// Builds the sum of `terms`. See [`sum_op`].
    pub fn sum(&mut self, terms: &[NodeId]) -> Result<NodeId, ScalarGradError> {
        sum_op(self, terms)
    }
}

#[cfg(test)]
#[path = "sum_test.rs"]
mod tests;
