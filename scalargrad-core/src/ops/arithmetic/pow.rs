// scalargrad-core/src/ops/arithmetic/pow.rs

use crate::error::ScalarGradError;
use crate::graph::{Graph, NodeId};
use crate::types::{Op, Tag};

/// Raises a scalar to a constant real power: `a ^ n`.
///
/// The exponent is a plain `f64`, not a node, so no gradient flows into it.
/// Local derivative: `[n * a^(n - 1)]`.
///
/// Domain policy (every case fails before a node is built):
/// * negative base with a non-integral exponent has no real result;
/// * zero base with a negative exponent is infinite;
/// * zero base with `0 < n < 1` has an infinite derivative.
///
/// `n == 0` yields 1 with derivative 0 for every base, zero included.
pub fn pow_op(graph: &mut Graph, a: NodeId, n: f64) -> Result<NodeId, ScalarGradError> {
    let base = graph.value(a)?;
    let tag = Tag::Op(Op::Pow(n));

    if !n.is_finite() {
        return Err(ScalarGradError::domain("pow", format!("exponent {} is not finite", n)));
    }
    if n == 0.0 {
        return graph.push_op(1.0, vec![a], vec![0.0], tag);
    }
    if base < 0.0 && n.fract() != 0.0 {
        return Err(ScalarGradError::domain(
            "pow",
            format!("negative base {} with non-integral exponent {}", base, n),
        ));
    }
    if base == 0.0 && n < 0.0 {
        return Err(ScalarGradError::domain(
            "pow",
            format!("zero base with negative exponent {}", n),
        ));
    }
    if base == 0.0 && n < 1.0 {
        return Err(ScalarGradError::domain(
            "pow",
            format!("derivative of 0^{} is infinite", n),
        ));
    }

    let value = base.powf(n);
    let derivative = n * base.powf(n - 1.0);
    graph.push_op(value, vec![a], vec![derivative], tag)
}

impl Graph {
    /// Builds `a ^ n`. See [`pow_op`].
    pub fn pow(&mut self, a: NodeId, n: f64) -> Result<NodeId, ScalarGradError> {
        pow_op(self, a, n)
    }
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
