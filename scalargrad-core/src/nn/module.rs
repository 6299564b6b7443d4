use crate::error::ScalarGradError;
use crate::graph::{Graph, NodeId};

/// The base trait for all network modules (neurons, layers, MLPs).
///
/// A module owns parameter leaves living in a [`Graph`] and knows how to
/// evaluate itself by appending new nodes to that same graph. Modules never
/// hold the transient nodes they build.
pub trait Module: std::fmt::Debug {
    /// Performs a forward evaluation of the module.
    ///
    /// # Arguments
    /// * `graph`: The graph owning the module's parameters.
    /// * `inputs`: Exactly `n_inputs()` scalar nodes.
    ///
    /// # Returns
    /// `n_outputs()` new scalar nodes, or `ShapeMismatch` (raised before any
    /// node is built) when `inputs` has the wrong length.
    fn evaluate(&self, graph: &mut Graph, inputs: &[NodeId]) -> Result<Vec<NodeId>, ScalarGradError>;

    /// Returns all trainable parameters as a flat sequence.
    ///
    /// The order is stable across calls.
    fn parameters(&self) -> Vec<NodeId>;

    /// Returns all parameters with hierarchical names, in the same order as
    /// [`Module::parameters`] (e.g. "layers.1.neurons.0.weight.2").
    fn named_parameters(&self) -> Vec<(String, NodeId)>;

    /// Expected length of the input vector.
    fn n_inputs(&self) -> usize;

    /// Length of the output vector.
    fn n_outputs(&self) -> usize;

    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }

    /// Reads the current value of every parameter, in parameter order.
    fn parameter_values(&self, graph: &Graph) -> Result<Vec<f64>, ScalarGradError> {
        graph.values(&self.parameters())
    }
}

/// Fails with `ShapeMismatch` unless `actual == expected`.
pub(crate) fn check_len(expected: usize, actual: usize, operation: &str) -> Result<(), ScalarGradError> {
    if expected != actual {
        return Err(ScalarGradError::ShapeMismatch {
            expected,
            actual,
            operation: operation.to_string(),
        });
    }
    Ok(())
}

/// Prefixes every name of a child's named parameters.
pub(crate) fn prefixed(prefix: &str, named: Vec<(String, NodeId)>) -> impl Iterator<Item = (String, NodeId)> + '_ {
    named
        .into_iter()
        .map(move |(name, id)| (format!("{}.{}", prefix, name), id))
}
