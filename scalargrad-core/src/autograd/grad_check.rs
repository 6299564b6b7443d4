use crate::error::ScalarGradError;
use crate::graph::{Graph, NodeId};
use crate::types::Role;
use approx::{abs_diff_eq, relative_eq};
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical_grad} != numerical grad {numerical_grad} (difference {difference})")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },

    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(ScalarGradError),

    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(ScalarGradError),

    #[error("Numerical gradient is NaN or infinite for input {input_index} (f(x+eps) = {loss_plus}, f(x-eps) = {loss_minus})")]
    NumericalGradNonFinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("Analytical gradient is NaN or infinite for input {input_index}: {value}")]
    AnalyticalGradNonFinite { input_index: usize, value: f64 },

    #[error("Graph error during gradient check: {0}")]
    GraphError(ScalarGradError),
}

// Map ScalarGradError to GradCheckError::GraphError
impl From<ScalarGradError> for GradCheckError {
    fn from(err: ScalarGradError) -> Self {
        GradCheckError::GraphError(err)
    }
}

/// Checks analytical gradients against numerical gradients using central
/// finite differences: `(f(x + eps) - f(x - eps)) / (2 * eps)`.
///
/// `func` builds a scalar expression from one leaf per entry of `inputs` and
/// returns its root. It is called once for the analytical pass and twice per
/// input for the numerical estimate; each numerical evaluation is built after
/// a [`Mark`](crate::graph::Mark) and rewound afterwards.
///
/// An input passes when the two gradients agree within `tolerance`, either
/// absolutely or relative to the larger magnitude.
///
/// # Returns
/// The analytical gradients, one per input.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<Vec<f64>, GradCheckError>
where
    F: Fn(&mut Graph, &[NodeId]) -> Result<NodeId, ScalarGradError>,
{
    let mut graph = Graph::new();

    // --- 1. Analytical gradients ---
    let leaves: Vec<NodeId> = inputs.iter().map(|&v| graph.leaf(v, Role::Input)).collect();
    let root = func(&mut graph, &leaves).map_err(GradCheckError::ForwardPassError)?;
    graph.backward(root).map_err(GradCheckError::BackwardPassError)?;
    let analytical: Vec<f64> = leaves
        .iter()
        .map(|&leaf| graph.grad(leaf))
        .collect::<Result<_, _>>()?;

    let base = graph.mark();

    // --- 2. Numerical gradient per input ---
    for (i, &analytical_grad) in analytical.iter().enumerate() {
        let loss_plus = evaluate_perturbed(&mut graph, &func, inputs, i, epsilon)?;
        graph.rewind(base);
        let loss_minus = evaluate_perturbed(&mut graph, &func, inputs, i, -epsilon)?;
        graph.rewind(base);

        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);

        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNonFinite {
                input_index: i,
                loss_plus,
                loss_minus,
            });
        }
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNonFinite {
                input_index: i,
                value: analytical_grad,
            });
        }

        let close = abs_diff_eq!(analytical_grad, numerical_grad, epsilon = tolerance)
            || relative_eq!(analytical_grad, numerical_grad, max_relative = tolerance);
        if !close {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
        log::trace!(
            "grad check input {}: analytical {} numerical {}",
            i,
            analytical_grad,
            numerical_grad
        );
    }

    Ok(analytical)
}

/// Evaluates `func` with input `index` shifted by `delta`.
fn evaluate_perturbed<F>(
    graph: &mut Graph,
    func: &F,
    inputs: &[f64],
    index: usize,
    delta: f64,
) -> Result<f64, GradCheckError>
where
    F: Fn(&mut Graph, &[NodeId]) -> Result<NodeId, ScalarGradError>,
{
    let leaves: Vec<NodeId> = inputs
        .iter()
        .enumerate()
        .map(|(j, &v)| {
            let v = if j == index { v + delta } else { v };
            graph.leaf(v, Role::Input)
        })
        .collect();
    let root = func(graph, &leaves).map_err(GradCheckError::ForwardPassError)?;
    Ok(graph.value(root)?)
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
