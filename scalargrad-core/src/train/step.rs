// scalargrad-core/src/train/step.rs

use crate::error::ScalarGradError;
use crate::graph::{Graph, NodeId};
use crate::nn::losses::{MseLoss, Reduction};
use crate::nn::module::Module;
use crate::optim::{Optimizer, Sgd};
use crate::types::Role;

/// Runs one full-batch gradient descent step and returns the loss node.
///
/// For every example the inputs are wrapped as `Input` leaves and evaluated
/// through `model`; the targets are wrapped as `Target` leaves. The loss is
/// the mean of `(target - output)^2` over every component of every example.
/// The gradients of the model's parameters (and only those) are reset, the
/// loss is backpropagated, and each parameter moves by
/// `-gradient * learning_rate`.
///
/// The returned node stays valid until the caller rewinds the graph; its
/// value is the loss before the update.
///
/// # Errors
/// * `ShapeMismatch` if `xs` and `ys` differ in length or an example does
///   not match `model.n_inputs()` / `model.n_outputs()`.
/// * `EmptyBatch` if there are no examples.
/// * `InvalidConfig` if `learning_rate` is not finite.
///
/// These are all raised before any node is built. A `DomainError` during
/// evaluation or the update discards the nodes built by this call and
/// leaves every parameter value untouched. If it is raised by the update,
/// the parameter gradients already hold this step's backward result.
pub fn train_step<M, X, Y>(
    graph: &mut Graph,
    model: &M,
    xs: &[X],
    ys: &[Y],
    learning_rate: f64,
) -> Result<NodeId, ScalarGradError>
where
    M: Module + ?Sized,
    X: AsRef<[f64]>,
    Y: AsRef<[f64]>,
{
    check_batch(model, xs, ys)?;
    let mut optimizer = Sgd::new(model.parameters(), learning_rate)?;

    let mark = graph.mark();
    let result = run_step(graph, model, xs, ys, &mut optimizer);
    if result.is_err() {
        graph.rewind(mark);
    }
    result
}

fn check_batch<M, X, Y>(model: &M, xs: &[X], ys: &[Y]) -> Result<(), ScalarGradError>
where
    M: Module + ?Sized,
    X: AsRef<[f64]>,
    Y: AsRef<[f64]>,
{
    if xs.len() != ys.len() {
        return Err(ScalarGradError::ShapeMismatch {
            expected: xs.len(),
            actual: ys.len(),
            operation: "train_step targets".to_string(),
        });
    }
    if xs.is_empty() {
        return Err(ScalarGradError::EmptyBatch);
    }
    for x in xs {
        if x.as_ref().len() != model.n_inputs() {
            return Err(ScalarGradError::ShapeMismatch {
                expected: model.n_inputs(),
                actual: x.as_ref().len(),
                operation: "train_step inputs".to_string(),
            });
        }
    }
    for y in ys {
        if y.as_ref().len() != model.n_outputs() {
            return Err(ScalarGradError::ShapeMismatch {
                expected: model.n_outputs(),
                actual: y.as_ref().len(),
                operation: "train_step targets".to_string(),
            });
        }
    }
    Ok(())
}

fn run_step<M, X, Y>(
    graph: &mut Graph,
    model: &M,
    xs: &[X],
    ys: &[Y],
    optimizer: &mut Sgd,
) -> Result<NodeId, ScalarGradError>
where
    M: Module + ?Sized,
    X: AsRef<[f64]>,
    Y: AsRef<[f64]>,
{
    let loss_fn = MseLoss::new(Reduction::Mean);
    let mut terms = Vec::new();
    for (x, y) in xs.iter().zip(ys) {
        let inputs: Vec<NodeId> = x.as_ref().iter().map(|&v| graph.leaf(v, Role::Input)).collect();
        let outputs = model.evaluate(graph, &inputs)?;
        let targets: Vec<NodeId> = y.as_ref().iter().map(|&v| graph.leaf(v, Role::Target)).collect();
        terms.extend(loss_fn.squared_errors(graph, &outputs, &targets)?);
    }
    let loss = loss_fn.reduce(graph, &terms)?;

    optimizer.zero_grad(graph)?;
    graph.backward(loss)?;
    optimizer.step(graph)?;
    Ok(loss)
}

#[cfg(test)]
#[path = "step_test.rs"]
mod tests;
