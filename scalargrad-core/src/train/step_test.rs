use super::*;
use crate::model::Mlp;
use crate::nn::layers::{Layer, Neuron};
use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn single_neuron(graph: &mut Graph, w: f64, b: f64) -> Neuron {
    Neuron::from_weights(graph, &[w], b).unwrap()
}

#[test]
fn test_train_step_loss_and_update() -> Result<(), ScalarGradError> {
    let mut graph = Graph::new();
    let neuron = single_neuron(&mut graph, 0.5, 0.0);
    let w = neuron.weights()[0];
    let b = neuron.bias();

    // Outputs relu(0.5 * x): 0.5 and 1.0 against targets 1 and 3.
    let xs = vec![vec![1.0], vec![2.0]];
    let ys = vec![vec![1.0], vec![3.0]];
    let loss = train_step(&mut graph, &neuron, &xs, &ys, 0.1)?;

    // ((1 - 0.5)^2 + (3 - 1)^2) / 2 = 2.125
    assert_relative_eq!(graph.value(loss)?, 2.125, epsilon = 1e-12);
    // dL/dw = (2 (0.5 - 1) * 1 + 2 (1 - 3) * 2) / 2 = -4.5
    assert_relative_eq!(graph.grad(w)?, -4.5, epsilon = 1e-12);
    // dL/db = (2 (0.5 - 1) + 2 (1 - 3)) / 2 = -2.5
    assert_relative_eq!(graph.grad(b)?, -2.5, epsilon = 1e-12);
    assert_relative_eq!(graph.value(w)?, 0.95, epsilon = 1e-12);
    assert_relative_eq!(graph.value(b)?, 0.25, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_train_step_resets_parameter_grads() -> Result<(), ScalarGradError> {
    let mut graph = Graph::new();
    let neuron = single_neuron(&mut graph, 0.5, 0.0);
    let w = neuron.weights()[0];
    graph.set_grad(w, 100.0)?;

    let xs = [[1.0]];
    let ys = [[1.0]];
    train_step(&mut graph, &neuron, &xs, &ys, 0.0)?;
    // 2 (0.5 - 1) * 1 with no stale contribution.
    assert_relative_eq!(graph.grad(w)?, -1.0, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_train_step_shape_errors_build_nothing() -> Result<(), ScalarGradError> {
    let mut graph = Graph::new();
    let mut rng = StdRng::seed_from_u64(2);
    let mlp = Mlp::new(&mut graph, &mut rng, &[2, 3, 1])?;
    let len_before = graph.len();

    let bad_x = train_step(&mut graph, &mlp, &[vec![1.0]], &[vec![1.0]], 0.1);
    assert!(matches!(bad_x, Err(ScalarGradError::ShapeMismatch { expected: 2, actual: 1, .. })));

    let bad_y = train_step(&mut graph, &mlp, &[vec![1.0, 2.0]], &[vec![1.0, 0.0]], 0.1);
    assert!(matches!(bad_y, Err(ScalarGradError::ShapeMismatch { expected: 1, actual: 2, .. })));

    let uneven = train_step(&mut graph, &mlp, &[vec![1.0, 2.0]], &Vec::<Vec<f64>>::new(), 0.1);
    assert!(matches!(uneven, Err(ScalarGradError::ShapeMismatch { .. })));

    let empty: Vec<Vec<f64>> = Vec::new();
    assert_eq!(
        train_step(&mut graph, &mlp, &empty, &empty, 0.1),
        Err(ScalarGradError::EmptyBatch)
    );

    let bad_lr = train_step(&mut graph, &mlp, &[vec![1.0, 2.0]], &[vec![1.0]], f64::NAN);
    assert!(matches!(bad_lr, Err(ScalarGradError::InvalidConfig(_))));

    assert_eq!(graph.len(), len_before);
    Ok(())
}

#[test]
fn test_train_step_domain_error_rolls_back() -> Result<(), ScalarGradError> {
    let mut graph = Graph::new();
    let neuron = single_neuron(&mut graph, 1e200, 0.0);
    let len_before = graph.len();

    // Output 1e300; its square overflows.
    let result = train_step(&mut graph, &neuron, &[[1e100]], &[[0.0]], 0.1);
    assert!(matches!(result, Err(ScalarGradError::DomainError { .. })));
    assert_eq!(graph.len(), len_before);
    assert_eq!(graph.value(neuron.weights()[0])?, 1e200);
    Ok(())
}

#[test]
fn test_train_step_update_overflow_keeps_values_and_gradients() -> Result<(), ScalarGradError> {
    let mut graph = Graph::new();
    let neuron = single_neuron(&mut graph, 1e-300, 0.0);
    let w = neuron.weights()[0];
    let len_before = graph.len();

    // Loss is about 1 but dL/dw is about 2e300, so w - grad * lr overflows.
    let result = train_step(&mut graph, &neuron, &[[1e300]], &[[0.0]], 1e10);
    assert!(matches!(result, Err(ScalarGradError::DomainError { .. })));
    assert_eq!(graph.len(), len_before);
    assert_eq!(graph.value(w)?, 1e-300);
    assert_eq!(graph.value(neuron.bias())?, 0.0);
    assert!(graph.grad(w)? > 1e300);
    assert!(graph.grad(neuron.bias())? > 0.0);
    Ok(())
}

#[test]
fn test_train_step_works_through_trait_object() -> Result<(), ScalarGradError> {
    let mut graph = Graph::new();
    let mut rng = StdRng::seed_from_u64(9);
    let layer = Layer::new(&mut graph, &mut rng, 2, 2)?;
    let model: &dyn Module = &layer;
    let loss = train_step(&mut graph, model, &[[0.5, -0.5]], &[[1.0, 0.0]], 0.05)?;
    assert!(graph.value(loss)? >= 0.0);
    Ok(())
}

#[test]
fn test_train_step_lowers_loss() -> Result<(), ScalarGradError> {
    let mut graph = Graph::new();
    let neuron = single_neuron(&mut graph, 0.5, 0.1);
    let xs = [[1.0], [2.0], [3.0]];
    let ys = [[2.0], [4.0], [6.0]];

    let mark = graph.mark();
    let first_loss = train_step(&mut graph, &neuron, &xs, &ys, 0.02)?;
    let first = graph.value(first_loss)?;
    graph.rewind(mark);
    let second_loss = train_step(&mut graph, &neuron, &xs, &ys, 0.02)?;
    let second = graph.value(second_loss)?;
    assert!(second < first, "{} !< {}", second, first);
    Ok(())
}
