// src/node.rs
use crate::graph::NodeId;
use crate::types::Tag;

/// Internal record of one scalar in the computation graph.
///
/// A `Node` is immutable once pushed into a [`Graph`](crate::graph::Graph):
/// its gradient lives in a separate array owned by the graph, and only leaf
/// values may be reassigned (by an optimizer).
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// The numeric result of this node.
    pub(crate) value: f64,
    /// Earlier nodes this one was computed from. Empty for leaves.
    pub(crate) operands: Vec<NodeId>,
    /// `d value / d operand_i`, evaluated at construction time.
    /// Always the same length as `operands`.
    pub(crate) local_derivatives: Vec<f64>,
    /// Producing operation or leaf role.
    pub(crate) tag: Tag,
}

impl Node {
    pub(crate) fn leaf(value: f64, tag: Tag) -> Self {
        Node {
            value,
            operands: Vec::new(),
            local_derivatives: Vec::new(),
            tag,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn operands(&self) -> &[NodeId] {
        &self.operands
    }

    pub fn local_derivatives(&self) -> &[f64] {
        &self.local_derivatives
    }

    pub fn tag(&self) -> Tag {
        self.tag
    }

    pub fn is_leaf(&self) -> bool {
        self.operands.is_empty()
    }

    /// Iterates over `(operand, local_derivative)` pairs.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, f64)> + '_ {
        self.operands
            .iter()
            .copied()
            .zip(self.local_derivatives.iter().copied())
    }
}
