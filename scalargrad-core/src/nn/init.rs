use crate::error::ScalarGradError;
use crate::graph::{Graph, NodeId};
use crate::types::Role;
use rand::Rng;

/// Creates `count` leaves drawn independently from `U[low, high]`.
///
/// # Errors
/// `InvalidArchitecture` if the bounds are not finite or `low > high`.
pub fn uniform<R: Rng + ?Sized>(
    graph: &mut Graph,
    rng: &mut R,
    count: usize,
    low: f64,
    high: f64,
    role: Role,
) -> Result<Vec<NodeId>, ScalarGradError> {
    if !(low.is_finite() && high.is_finite()) || low > high {
        return Err(ScalarGradError::InvalidArchitecture(format!(
            "invalid uniform init range [{}, {}]",
            low, high
        )));
    }
    Ok((0..count)
        .map(|_| graph.leaf(rng.gen_range(low..=high), role))
        .collect())
}

/// Creates one leaf with value 0.
pub fn zeros(graph: &mut Graph, role: Role) -> NodeId {
    graph.leaf(0.0, role)
}

// --- Tests ---
#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
