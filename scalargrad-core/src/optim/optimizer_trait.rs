use crate::error::ScalarGradError;
use crate::graph::{Graph, NodeId};

/// Trait defining the common interface for all optimizers.
///
/// Optimizers are responsible for updating parameter leaves of a [`Graph`]
/// based on the gradients accumulated there by the last backward pass.
pub trait Optimizer {
    /// Performs a single optimization step.
    ///
    /// # Returns
    ///
    /// `Ok(())` if every parameter was updated. On error no parameter has
    /// been modified.
    fn step(&mut self, graph: &mut Graph) -> Result<(), ScalarGradError>;

    /// Clears the gradients of all parameters managed by the optimizer.
    ///
    /// Called before the backward pass of each training iteration; only the
    /// optimizer's parameters are reset.
    fn zero_grad(&mut self, graph: &mut Graph) -> Result<(), ScalarGradError>;

    /// The parameters updated by [`Optimizer::step`], in update order.
    fn params(&self) -> &[NodeId];

    fn learning_rate(&self) -> f64;

    /// Changes the learning rate used by subsequent steps.
    fn set_learning_rate(&mut self, lr: f64) -> Result<(), ScalarGradError>;
}
