use crate::error::ScalarGradError;
use crate::graph::{Graph, NodeId};

/// Builds a topological sort of the subgraph reachable from `root`.
///
/// Iterative depth-first postorder: a node is appended to the build order
/// only after all its operands, and a visited set keyed by node index makes
/// sure each node is visited exactly once even when it feeds several
/// consumers (diamonds). The returned order is the reversed build order:
/// `root` first, and every node appears after all of its consumers within
/// the traversed subgraph.
///
/// An explicit stack replaces recursion so deep graphs (long chains of
/// additions, deep networks) cannot overflow the call stack.
pub fn topological_sort(graph: &Graph, root: NodeId) -> Result<Vec<NodeId>, ScalarGradError> {
    graph.check(root)?;

    let mut visited = vec![false; root.index() + 1];
    let mut build_order = Vec::new();
    // (node, index of the next operand to explore)
    let mut stack: Vec<(NodeId, usize)> = vec![(root, 0)];
    visited[root.index()] = true;

    while let Some(frame) = stack.last_mut() {
        let (node, next) = *frame;
        let operands = &graph.nodes[node.index()].operands;
        if let Some(&operand) = operands.get(next) {
            frame.1 += 1;
            // Operands are always older than their consumer, so they fall
            // inside the visited buffer sized from the root.
            let slot = visited.get_mut(operand.index()).ok_or_else(|| {
                ScalarGradError::InternalError(format!(
                    "operand {} of node {} is not older than its consumer",
                    operand.index(),
                    node.index()
                ))
            })?;
            if !*slot {
                *slot = true;
                stack.push((operand, 0));
            }
        } else {
            build_order.push(node);
            stack.pop();
        }
    }

    build_order.reverse();
    Ok(build_order)
}

impl Graph {
    /// Returns the nodes reachable from `root` in backward-processing order
    /// (`root` first). See [`topological_sort`].
    pub fn topological_order(&self, root: NodeId) -> Result<Vec<NodeId>, ScalarGradError> {
        topological_sort(self, root)
    }
}
