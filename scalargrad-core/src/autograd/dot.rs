use crate::autograd::graph::topological_sort;
use crate::error::ScalarGradError;
use crate::graph::{Graph, NodeId};
use std::collections::HashMap;
use std::fmt::Write;

/// Renders the subgraph reachable from `root` in Graphviz DOT format.
///
/// Each scalar becomes a record `tag | { data v | grad g }`; parameters are
/// filled yellow and zero-valued nodes white. Edges point from operand to
/// consumer. Purely read-only: values and gradients are not touched.
pub fn to_dot(graph: &Graph, root: NodeId) -> Result<String, ScalarGradError> {
    // Oldest first so the output reads in construction order.
    let mut nodes = topological_sort(graph, root)?;
    nodes.reverse();
    let labels: HashMap<NodeId, usize> = nodes.iter().enumerate().map(|(i, &n)| (n, i)).collect();

    let mut out = String::from("digraph D {\n");
    for (i, &id) in nodes.iter().enumerate() {
        let node = graph.node(id)?;
        let fill = if node.tag().is_parameter() {
            "yellow"
        } else if node.value() == 0.0 {
            "white"
        } else {
            ""
        };
        // Writing into a String cannot fail.
        let _ = writeln!(
            out,
            "  N{} [shape=record style=\"filled\" fillcolor=\"{}\" label=\"{}|{{ data {:.2} | grad {:.2} }}\"]",
            i,
            fill,
            node.tag(),
            node.value(),
            graph.grad(id)?
        );
    }
    for &id in &nodes {
        for operand in graph.operands(id)? {
            let _ = writeln!(out, "  N{} -> N{}", labels[operand], labels[&id]);
        }
    }
    out.push('}');
    Ok(out)
}

impl Graph {
    /// Graphviz export of the subgraph behind `root`. See [`to_dot`].
    pub fn to_dot(&self, root: NodeId) -> Result<String, ScalarGradError> {
        to_dot(self, root)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ScalarGradError;
    use crate::graph::Graph;
    use crate::types::Role;

    #[test]
    fn test_to_dot() -> Result<(), ScalarGradError> {
        let mut graph = Graph::new();
        let w = graph.leaf(0.5, Role::Weight);
        let x = graph.leaf(2.0, Role::Input);
        let b = graph.leaf(0.0, Role::Bias);
        let wx = graph.mul(w, x)?;
        let y = graph.add(wx, b)?;
        graph.backward(y)?;

        let dot = graph.to_dot(y)?;
        assert!(dot.starts_with("digraph D {"));
        assert!(dot.ends_with('}'));
        assert!(dot.contains("label=\"weight|{ data 0.50 | grad 2.00 }\""));
        assert!(dot.contains("label=\"+|{ data 1.00 | grad 1.00 }\""));
        assert_eq!(dot.matches("fillcolor=\"yellow\"").count(), 2);
        assert_eq!(dot.matches(" -> ").count(), 4);
        Ok(())
    }

    #[test]
    fn test_to_dot_is_read_only() -> Result<(), ScalarGradError> {
        let mut graph = Graph::new();
        let a = graph.scalar(3.0);
        let b = graph.pow(a, 2.0)?;
        let before = format!("{:?}", graph);
        graph.to_dot(b)?;
        assert_eq!(format!("{:?}", graph), before);
        Ok(())
    }
}
