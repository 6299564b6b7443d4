use crate::autograd::graph::topological_sort;
use crate::error::ScalarGradError;
use crate::graph::{Graph, NodeId};

impl Graph {
    /// Performs the backward pass starting from `root`.
    ///
    /// Seeds `root`'s gradient with 1, then walks the reachable subgraph in
    /// topological order (consumers before producers) and, for every node and
    /// every `(operand, local_derivative)` pair, accumulates
    /// `grad[operand] += grad[node] * local_derivative`.
    ///
    /// Gradients are **added to**, never overwritten (except the root seed).
    /// After the call, every reachable node holds `d root / d node`, provided
    /// its gradient was 0 beforehand. Resetting gradients between training
    /// steps is the caller's job; see [`Graph::zero_grads`].
    ///
    /// # Errors
    /// Returns `UnknownNode` if `root` is not a node of this graph.
    pub fn backward(&mut self, root: NodeId) -> Result<(), ScalarGradError> {
        let order = topological_sort(self, root)?;
        log::debug!(
            "backward from node {}: {} of {} nodes reachable",
            root.index(),
            order.len(),
            self.nodes.len()
        );

        self.grads[root.index()] = 1.0;
        for node_id in order {
            let node_grad = self.grads[node_id.index()];
            for (operand, local) in self.nodes[node_id.index()].edges() {
                self.grads[operand.index()] += node_grad * local;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "backward_test.rs"]
mod tests;
