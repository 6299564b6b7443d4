// src/graph/debug.rs
use super::{Graph, NodeId};
use std::fmt;

// Manual implementation of Debug: one line per node instead of the raw
// vectors, so a failing test prints something readable.
impl fmt::Debug for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Graph(len={}) {{", self.nodes.len())?;
        for (i, (node, grad)) in self.nodes.iter().zip(&self.grads).enumerate() {
            let operands: Vec<usize> = node.operands.iter().map(NodeId::index).collect();
            writeln!(
                f,
                "  N{}: {} value={} grad={} operands={:?} local_derivatives={:?}",
                i, node.tag, node.value, grad, operands, node.local_derivatives
            )?;
        }
        write!(f, "}}")
    }
}
