use crate::error::ScalarGradError;
use crate::graph::{Graph, NodeId};
use crate::nn::init;
use crate::nn::module::{check_len, Module};
use crate::types::Role;
use rand::Rng;

/// A single rectified unit: `relu(bias + Σ x_i * w_i)`.
#[derive(Debug, Clone)]
pub struct Neuron {
    weights: Vec<NodeId>,
    bias: NodeId,
}

impl Neuron {
    /// Creates a new neuron with `n_inputs` weights.
    ///
    /// Weights are drawn independently from `U[-1, 1]`; the bias starts at 0.
    ///
    /// # Errors
    /// `InvalidArchitecture` if `n_inputs == 0`.
    pub fn new<R: Rng + ?Sized>(graph: &mut Graph, rng: &mut R, n_inputs: usize) -> Result<Self, ScalarGradError> {
        if n_inputs == 0 {
            return Err(ScalarGradError::InvalidArchitecture(
                "a neuron needs at least one input".to_string(),
            ));
        }
        let weights = init::uniform(graph, rng, n_inputs, -1.0, 1.0, Role::Weight)?;
        let bias = init::zeros(graph, Role::Bias);
        Ok(Neuron { weights, bias })
    }

    /// Creates a neuron with fixed parameter values.
    pub fn from_weights(graph: &mut Graph, weights: &[f64], bias: f64) -> Result<Self, ScalarGradError> {
        if weights.is_empty() {
            return Err(ScalarGradError::InvalidArchitecture(
                "a neuron needs at least one input".to_string(),
            ));
        }
        let weights = weights.iter().map(|&w| graph.leaf(w, Role::Weight)).collect();
        let bias = graph.leaf(bias, Role::Bias);
        Ok(Neuron { weights, bias })
    }

    pub fn weights(&self) -> &[NodeId] {
        &self.weights
    }

    pub fn bias(&self) -> NodeId {
        self.bias
    }

    /// Evaluates the neuron on one input vector and returns its single output.
    pub fn activate(&self, graph: &mut Graph, inputs: &[NodeId]) -> Result<NodeId, ScalarGradError> {
        check_len(self.weights.len(), inputs.len(), "Neuron evaluate")?;
        for &x in inputs {
            graph.check(x)?;
        }
        let mut acc = self.bias;
        for (&x, &w) in inputs.iter().zip(&self.weights) {
            let term = graph.mul(x, w)?;
            acc = graph.add(acc, term)?;
        }
        graph.relu(acc)
    }
}

impl Module for Neuron {
    fn evaluate(&self, graph: &mut Graph, inputs: &[NodeId]) -> Result<Vec<NodeId>, ScalarGradError> {
        Ok(vec![self.activate(graph, inputs)?])
    }

    fn parameters(&self) -> Vec<NodeId> {
        let mut params = self.weights.clone();
        params.push(self.bias);
        params
    }

    fn named_parameters(&self) -> Vec<(String, NodeId)> {
        let mut params: Vec<(String, NodeId)> = self
            .weights
            .iter()
            .enumerate()
            .map(|(i, &w)| (format!("weight.{}", i), w))
            .collect();
        params.push(("bias".to_string(), self.bias));
        params
    }

    fn n_inputs(&self) -> usize {
        self.weights.len()
    }

    fn n_outputs(&self) -> usize {
        1
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
