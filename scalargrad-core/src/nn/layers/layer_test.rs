use super::*;
use crate::types::Role;
use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_layer_creation() -> Result<(), ScalarGradError> {
    let mut graph = Graph::new();
    let mut rng = StdRng::seed_from_u64(3);
    let layer = Layer::new(&mut graph, &mut rng, 3, 2)?;

    assert_eq!(layer.n_inputs(), 3);
    assert_eq!(layer.n_outputs(), 2);
    assert_eq!(layer.neurons().len(), 2);
    assert_eq!(layer.num_parameters(), 2 * (3 + 1));
    // Parameters are all leaves created up front.
    assert_eq!(graph.len(), 8);
    Ok(())
}

#[test]
fn test_layer_invalid_sizes() {
    let mut graph = Graph::new();
    let mut rng = StdRng::seed_from_u64(3);
    assert!(matches!(
        Layer::new(&mut graph, &mut rng, 0, 2),
        Err(ScalarGradError::InvalidArchitecture(_))
    ));
    assert!(matches!(
        Layer::new(&mut graph, &mut rng, 2, 0),
        Err(ScalarGradError::InvalidArchitecture(_))
    ));
}

#[test]
fn test_layer_evaluate_in_neuron_order() -> Result<(), ScalarGradError> {
    let mut graph = Graph::new();
    let n0 = Neuron::from_weights(&mut graph, &[1.0, 1.0], 0.0)?;
    let n1 = Neuron::from_weights(&mut graph, &[2.0, 0.0], 1.0)?;
    let layer = Layer::from_neurons(vec![n0, n1])?;

    let x0 = graph.leaf(1.0, Role::Input);
    let x1 = graph.leaf(3.0, Role::Input);
    let out = layer.evaluate(&mut graph, &[x0, x1])?;
    assert_eq!(out.len(), 2);
    assert_relative_eq!(graph.value(out[0])?, 4.0);
    assert_relative_eq!(graph.value(out[1])?, 3.0);
    Ok(())
}

#[test]
fn test_layer_from_neurons_mismatch() -> Result<(), ScalarGradError> {
    let mut graph = Graph::new();
    let n0 = Neuron::from_weights(&mut graph, &[1.0, 1.0], 0.0)?;
    let n1 = Neuron::from_weights(&mut graph, &[2.0], 1.0)?;
    assert!(Layer::from_neurons(vec![n0, n1]).is_err());
    assert!(Layer::from_neurons(Vec::new()).is_err());
    Ok(())
}

#[test]
fn test_layer_shape_mismatch() -> Result<(), ScalarGradError> {
    let mut graph = Graph::new();
    let mut rng = StdRng::seed_from_u64(3);
    let layer = Layer::new(&mut graph, &mut rng, 2, 2)?;
    let x = graph.leaf(1.0, Role::Input);
    let len_before = graph.len();
    assert!(matches!(
        layer.evaluate(&mut graph, &[x, x, x]),
        Err(ScalarGradError::ShapeMismatch { expected: 2, actual: 3, .. })
    ));
    assert_eq!(graph.len(), len_before);
    Ok(())
}

#[test]
fn test_layer_parameter_order_and_names() -> Result<(), ScalarGradError> {
    let mut graph = Graph::new();
    let mut rng = StdRng::seed_from_u64(3);
    let layer = Layer::new(&mut graph, &mut rng, 2, 2)?;

    let expected: Vec<NodeId> = layer.neurons().iter().flat_map(|n| n.parameters()).collect();
    assert_eq!(layer.parameters(), expected);
    assert_eq!(layer.parameters(), layer.parameters());

    let named = layer.named_parameters();
    assert_eq!(named[0].0, "neurons.0.weight.0");
    assert_eq!(named[2].0, "neurons.0.bias");
    assert_eq!(named[5].0, "neurons.1.bias");
    Ok(())
}
