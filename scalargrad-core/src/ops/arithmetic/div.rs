// scalargrad-core/src/ops/arithmetic/div.rs

use crate::error::ScalarGradError;
use crate::graph::{Graph, NodeId};
use crate::types::{Op, Tag};

/// Divides two scalars: `a / b`.
///
/// Local derivatives: `[1 / b, -a / b^2]`.
///
/// # Errors
/// Returns `ScalarGradError::DivisionByZero` when `b` is 0, before any node
/// is built. The engine never lets an infinite or NaN quotient into the graph.
pub fn div_op(graph: &mut Graph, a: NodeId, b: NodeId) -> Result<NodeId, ScalarGradError> {
    let a_val = graph.value(a)?;
    let b_val = graph.value(b)?;
    if b_val == 0.0 {
        return Err(ScalarGradError::DivisionByZero {
            operation: "div".to_string(),
            numerator: a_val,
        });
    }
    graph.push_op(
        a_val / b_val,
        vec![a, b],
        vec![1.0 / b_val, -a_val / (b_val * b_val)],
        Tag::Op(Op::Div),
    )
}

impl Graph {
    /// Builds `a / b`. See [`div_op`].
    pub fn div(&mut self, a: NodeId, b: NodeId) -> Result<NodeId, ScalarGradError> {
        div_op(self, a, b)
    }
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
