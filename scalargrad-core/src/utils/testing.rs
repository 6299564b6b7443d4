use crate::graph::{Graph, NodeId};

/// Checks that the values of `ids` match `expected` within `tolerance`.
///
/// Panics with the offending index if a handle is invalid, the lengths
/// differ, or any value is off by more than `tolerance`.
pub fn check_values_near(graph: &Graph, ids: &[NodeId], expected: &[f64], tolerance: f64) {
    assert_eq!(ids.len(), expected.len(), "Length mismatch");
    for (i, (&id, e)) in ids.iter().zip(expected).enumerate() {
        let a = match graph.value(id) {
            Ok(v) => v,
            Err(err) => panic!("Invalid node at index {}: {}", i, err),
        };
        let diff = (a - e).abs();
        if diff > tolerance {
            panic!(
                "Value mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i, a, e, diff, tolerance
            );
        }
    }
}

/// Same as [`check_values_near`] for the accumulated gradients of `ids`.
pub fn check_grads_near(graph: &Graph, ids: &[NodeId], expected: &[f64], tolerance: f64) {
    assert_eq!(ids.len(), expected.len(), "Length mismatch");
    for (i, (&id, e)) in ids.iter().zip(expected).enumerate() {
        let a = match graph.grad(id) {
            Ok(g) => g,
            Err(err) => panic!("Invalid node at index {}: {}", i, err),
        };
        let diff = (a - e).abs();
        if diff > tolerance {
            panic!(
                "Gradient mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i, a, e, diff, tolerance
            );
        }
    }
}
