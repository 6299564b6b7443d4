use crate::error::ScalarGradError;
use crate::graph::{Graph, NodeId};
use crate::nn::layers::Neuron;
use crate::nn::module::{check_len, prefixed, Module};
use rand::Rng;

/// A fully connected layer of independent [`Neuron`]s sharing one input vector.
#[derive(Debug, Clone)]
pub struct Layer {
    neurons: Vec<Neuron>,
    in_features: usize,
}

impl Layer {
    /// Creates a new layer.
    ///
    /// # Arguments
    ///
    /// * `n_inputs` - Size of each input vector.
    /// * `n_outputs` - Number of neurons, i.e. size of the output vector.
    pub fn new<R: Rng + ?Sized>(
        graph: &mut Graph,
        rng: &mut R,
        n_inputs: usize,
        n_outputs: usize,
    ) -> Result<Self, ScalarGradError> {
        if n_inputs == 0 || n_outputs == 0 {
            return Err(ScalarGradError::InvalidArchitecture(format!(
                "layer sizes must be positive, got {} -> {}",
                n_inputs, n_outputs
            )));
        }
        let neurons = (0..n_outputs)
            .map(|_| Neuron::new(graph, rng, n_inputs))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Layer {
            neurons,
            in_features: n_inputs,
        })
    }

    /// Builds a layer from already constructed neurons.
    ///
    /// All neurons must take the same number of inputs.
    pub fn from_neurons(neurons: Vec<Neuron>) -> Result<Self, ScalarGradError> {
        let in_features = neurons
            .first()
            .map(|n| n.n_inputs())
            .ok_or_else(|| ScalarGradError::InvalidArchitecture("a layer needs at least one neuron".to_string()))?;
        if let Some(odd) = neurons.iter().find(|n| n.n_inputs() != in_features) {
            return Err(ScalarGradError::InvalidArchitecture(format!(
                "neurons disagree on input size: {} vs {}",
                in_features,
                odd.n_inputs()
            )));
        }
        Ok(Layer { neurons, in_features })
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }
}

impl Module for Layer {
    fn evaluate(&self, graph: &mut Graph, inputs: &[NodeId]) -> Result<Vec<NodeId>, ScalarGradError> {
        check_len(self.in_features, inputs.len(), "Layer evaluate")?;
        self.neurons
            .iter()
            .map(|neuron| neuron.activate(graph, inputs))
            .collect()
    }

    fn parameters(&self) -> Vec<NodeId> {
        self.neurons.iter().flat_map(|n| n.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, NodeId)> {
        let mut params = Vec::new();
        for (j, neuron) in self.neurons.iter().enumerate() {
            let name = format!("neurons.{}", j);
            params.extend(prefixed(&name, neuron.named_parameters()));
        }
        params
    }

    fn n_inputs(&self) -> usize {
        self.in_features
    }

    fn n_outputs(&self) -> usize {
        self.neurons.len()
    }
}

#[cfg(test)]
#[path = "layer_test.rs"]
mod tests;
