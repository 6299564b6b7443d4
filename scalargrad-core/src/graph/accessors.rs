use super::{Graph, NodeId};
use crate::error::ScalarGradError;
use crate::node::Node;
use crate::types::Tag;

impl Graph {
    /// Returns the full node record.
    pub fn node(&self, id: NodeId) -> Result<&Node, ScalarGradError> {
        self.check(id)?;
        Ok(&self.nodes[id.0])
    }

    /// Returns the value of a node.
    pub fn value(&self, id: NodeId) -> Result<f64, ScalarGradError> {
        Ok(self.node(id)?.value)
    }

    /// Returns the values of several nodes, in order.
    pub fn values(&self, ids: &[NodeId]) -> Result<Vec<f64>, ScalarGradError> {
        ids.iter().map(|&id| self.value(id)).collect()
    }

    /// Returns the accumulated gradient of a node.
    pub fn grad(&self, id: NodeId) -> Result<f64, ScalarGradError> {
        self.check(id)?;
        Ok(self.grads[id.0])
    }

    pub fn operands(&self, id: NodeId) -> Result<&[NodeId], ScalarGradError> {
        Ok(&self.node(id)?.operands)
    }

    pub fn local_derivatives(&self, id: NodeId) -> Result<&[f64], ScalarGradError> {
        Ok(&self.node(id)?.local_derivatives)
    }

    pub fn tag(&self, id: NodeId) -> Result<Tag, ScalarGradError> {
        Ok(self.node(id)?.tag)
    }

    /// Overwrites the value of a leaf node.
    ///
    /// Only leaves may be reassigned: changing an operation result would make
    /// its recorded local derivatives stale.
    pub fn set_value(&mut self, id: NodeId, value: f64) -> Result<(), ScalarGradError> {
        self.check(id)?;
        let node = &mut self.nodes[id.0];
        if !node.is_leaf() {
            return Err(ScalarGradError::NotALeaf { index: id.0 });
        }
        node.value = value;
        Ok(())
    }

    /// Overwrites the gradient accumulator of a node.
    pub fn set_grad(&mut self, id: NodeId, grad: f64) -> Result<(), ScalarGradError> {
        self.check(id)?;
        self.grads[id.0] = grad;
        Ok(())
    }

    /// Resets one gradient to 0.
    pub fn zero_grad(&mut self, id: NodeId) -> Result<(), ScalarGradError> {
        self.set_grad(id, 0.0)
    }

    /// Resets the gradients of the given nodes to 0.
    ///
    /// All handles are validated before anything is reset.
    pub fn zero_grads(&mut self, ids: &[NodeId]) -> Result<(), ScalarGradError> {
        for &id in ids {
            self.check(id)?;
        }
        for &id in ids {
            self.grads[id.0] = 0.0;
        }
        Ok(())
    }

    /// Resets every gradient in the graph to 0.
    pub fn zero_all_grads(&mut self) {
        self.grads.iter_mut().for_each(|g| *g = 0.0);
    }
}
