// src/graph/mod.rs

use crate::error::ScalarGradError;
use crate::node::Node;
use crate::types::{Role, Tag};

mod accessors;
mod debug;

/// Handle to a node stored in a [`Graph`].
///
/// Handles are plain indices: cheap to copy, and only meaningful for the
/// graph that created them. A handle to a node removed by
/// [`Graph::rewind`] is rejected with `UnknownNode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in its graph's arena.
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A saved arena length, used to discard everything built after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Mark(usize);

/// Append-only arena holding every scalar of a computation.
///
/// `Graph` stores:
/// 1.  **Nodes** (`Vec<Node>`): value, operands, local derivatives and tag.
///     Nodes are only ever appended, so every operand index is strictly
///     smaller than the index of the node referencing it and the graph is
///     acyclic by construction.
/// 2.  **Gradients** (`Vec<f64>`): one accumulator per node, kept parallel to
///     the node vector. Many consumers write into the same operand's slot
///     during backward without any shared mutable node.
///
/// Parameters are created once and live at the front of the arena. The
/// transient nodes of a training step are appended after them and dropped
/// with [`Graph::rewind`] once the step is done.
#[derive(Default, Clone)]
pub struct Graph {
    pub(crate) nodes: Vec<Node>,
    pub(crate) grads: Vec<f64>,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Graph {
            nodes: Vec::new(),
            grads: Vec::new(),
        }
    }

    /// Creates an empty graph with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Graph {
            nodes: Vec::with_capacity(capacity),
            grads: Vec::with_capacity(capacity),
        }
    }

    /// Number of nodes currently stored.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Creates a leaf node with the given value and role.
    pub fn leaf(&mut self, value: f64, role: Role) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::leaf(value, Tag::Leaf(role)));
        self.grads.push(0.0);
        id
    }

    /// Creates an untagged leaf node.
    pub fn scalar(&mut self, value: f64) -> NodeId {
        self.leaf(value, Role::Value)
    }

    /// Creates a leaf node tagged as a literal constant.
    pub fn constant(&mut self, value: f64) -> NodeId {
        self.leaf(value, Role::Constant)
    }

    /// Returns the current arena length as a [`Mark`].
    pub fn mark(&self) -> Mark {
        Mark(self.nodes.len())
    }

    /// Drops every node created after `mark`.
    ///
    /// Nodes before the mark, their values and their gradients are left
    /// untouched. Rewinding to a mark beyond the current length is a no-op.
    pub fn rewind(&mut self, mark: Mark) {
        if mark.0 >= self.nodes.len() {
            return;
        }
        log::trace!(
            "rewinding graph from {} to {} nodes",
            self.nodes.len(),
            mark.0
        );
        self.nodes.truncate(mark.0);
        self.grads.truncate(mark.0);
    }

    /// Checks that `id` refers to a live node of this graph.
    pub(crate) fn check(&self, id: NodeId) -> Result<(), ScalarGradError> {
        if id.0 < self.nodes.len() {
            Ok(())
        } else {
            Err(ScalarGradError::UnknownNode {
                index: id.0,
                len: self.nodes.len(),
            })
        }
    }

    /// Appends a non-leaf node produced by an operation.
    ///
    /// Operands must already be validated by the caller; the invariants
    /// (matching lengths, operands strictly older than the new node, finite
    /// operand values, finite value and derivatives) are re-checked here so
    /// no op can break them.
    pub(crate) fn push_op(
        &mut self,
        value: f64,
        operands: Vec<NodeId>,
        local_derivatives: Vec<f64>,
        tag: Tag,
    ) -> Result<NodeId, ScalarGradError> {
        if operands.len() != local_derivatives.len() {
            return Err(ScalarGradError::InternalError(format!(
                "{} operands but {} local derivatives for {}",
                operands.len(),
                local_derivatives.len(),
                tag
            )));
        }
        let index = self.nodes.len();
        if let Some(bad) = operands.iter().find(|op| op.0 >= index) {
            return Err(ScalarGradError::UnknownNode {
                index: bad.0,
                len: index,
            });
        }
        if let Some(bad) = operands.iter().find(|op| !self.nodes[op.0].value.is_finite()) {
            return Err(ScalarGradError::domain(
                &tag.to_string(),
                format!(
                    "operand N{} has non-finite value {}",
                    bad.0, self.nodes[bad.0].value
                ),
            ));
        }
        if !value.is_finite() {
            return Err(ScalarGradError::domain(
                &tag.to_string(),
                format!("result {} is not finite", value),
            ));
        }
        if let Some(d) = local_derivatives.iter().find(|d| !d.is_finite()) {
            return Err(ScalarGradError::domain(
                &tag.to_string(),
                format!("local derivative {} is not finite", d),
            ));
        }

        self.nodes.push(Node {
            value,
            operands,
            local_derivatives,
            tag,
        });
        self.grads.push(0.0);
        Ok(NodeId(index))
    }
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
