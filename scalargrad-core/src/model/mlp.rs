use crate::error::ScalarGradError;
use crate::graph::{Graph, NodeId};
use crate::nn::layers::Layer;
use crate::nn::module::{check_len, prefixed, Module};
use rand::Rng;

/// A multi-layer perceptron: layers chained `sizes[i] -> sizes[i + 1]`.
///
/// Every layer, the last one included, applies relu to its outputs.
#[derive(Debug, Clone)]
pub struct Mlp {
    layers: Vec<Layer>,
}

impl Mlp {
    /// Creates a new MLP.
    ///
    /// # Arguments
    /// * `sizes` - Input size followed by the width of every layer; at least
    ///   two entries, all positive.
    pub fn new<R: Rng + ?Sized>(graph: &mut Graph, rng: &mut R, sizes: &[usize]) -> Result<Self, ScalarGradError> {
        if sizes.len() < 2 {
            return Err(ScalarGradError::InvalidArchitecture(format!(
                "an MLP needs at least two sizes, got {:?}",
                sizes
            )));
        }
        if sizes.contains(&0) {
            return Err(ScalarGradError::InvalidArchitecture(format!(
                "MLP sizes must be positive, got {:?}",
                sizes
            )));
        }
        let layers = sizes
            .windows(2)
            .map(|pair| Layer::new(graph, rng, pair[0], pair[1]))
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!("built MLP {:?}", sizes);
        Ok(Mlp { layers })
    }

    /// Chains already constructed layers. Adjacent sizes must agree.
    pub fn from_layers(layers: Vec<Layer>) -> Result<Self, ScalarGradError> {
        if layers.is_empty() {
            return Err(ScalarGradError::InvalidArchitecture(
                "an MLP needs at least one layer".to_string(),
            ));
        }
        for (k, pair) in layers.windows(2).enumerate() {
            if pair[0].n_outputs() != pair[1].n_inputs() {
                return Err(ScalarGradError::InvalidArchitecture(format!(
                    "layer {} outputs {} values but layer {} expects {}",
                    k,
                    pair[0].n_outputs(),
                    k + 1,
                    pair[1].n_inputs()
                )));
            }
        }
        Ok(Mlp { layers })
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Input size followed by every layer width.
    pub fn sizes(&self) -> Vec<usize> {
        let mut sizes = vec![self.n_inputs()];
        sizes.extend(self.layers.iter().map(|l| l.n_outputs()));
        sizes
    }
}

impl Module for Mlp {
    fn evaluate(&self, graph: &mut Graph, inputs: &[NodeId]) -> Result<Vec<NodeId>, ScalarGradError> {
        check_len(self.n_inputs(), inputs.len(), "Mlp evaluate")?;
        let mut current = inputs.to_vec();
        for layer in &self.layers {
            current = layer.evaluate(graph, &current)?;
        }
        Ok(current)
    }

    fn parameters(&self) -> Vec<NodeId> {
        let mut params = Vec::new();
        for layer in &self.layers {
            params.extend(layer.parameters());
        }
        params
    }

    fn named_parameters(&self) -> Vec<(String, NodeId)> {
        let mut params = Vec::new();
        for (k, layer) in self.layers.iter().enumerate() {
            let name = format!("layers.{}", k);
            params.extend(prefixed(&name, layer.named_parameters()));
        }
        params
    }

    // `layers` is never empty once constructed.
    fn n_inputs(&self) -> usize {
        self.layers.first().map_or(0, |l| l.n_inputs())
    }

    fn n_outputs(&self) -> usize {
        self.layers.last().map_or(0, |l| l.n_outputs())
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
