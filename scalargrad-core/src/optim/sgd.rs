use crate::error::ScalarGradError;
use crate::graph::{Graph, NodeId};
use crate::optim::optimizer_trait::Optimizer;

/// Implements plain Stochastic Gradient Descent:
/// `value -= gradient * learning_rate` for every parameter.
#[derive(Debug, Clone)]
pub struct Sgd {
    params: Vec<NodeId>,
    lr: f64,
}

fn check_lr(lr: f64) -> Result<(), ScalarGradError> {
    if !lr.is_finite() {
        return Err(ScalarGradError::InvalidConfig(format!(
            "learning rate must be finite, got {}",
            lr
        )));
    }
    Ok(())
}

impl Sgd {
    /// Creates a new `Sgd` optimizer.
    ///
    /// # Arguments
    ///
    /// * `params`: The parameter leaves to optimize.
    /// * `lr`: The learning rate. Must be finite; zero and negative values
    ///   are accepted.
    pub fn new(params: impl IntoIterator<Item = NodeId>, lr: f64) -> Result<Self, ScalarGradError> {
        check_lr(lr)?;
        Ok(Sgd {
            params: params.into_iter().collect(),
            lr,
        })
    }
}

impl Optimizer for Sgd {
    fn step(&mut self, graph: &mut Graph) -> Result<(), ScalarGradError> {
        // Compute everything first so a failure leaves the graph untouched.
        let mut updates = Vec::with_capacity(self.params.len());
        for &param in &self.params {
            if !graph.node(param)?.is_leaf() {
                return Err(ScalarGradError::NotALeaf { index: param.index() });
            }
            let value = graph.value(param)?;
            let grad = graph.grad(param)?;
            let new_value = value - grad * self.lr;
            if !new_value.is_finite() {
                return Err(ScalarGradError::domain(
                    "sgd step",
                    format!(
                        "update of node {} gives {} (value {}, grad {}, lr {})",
                        param.index(),
                        new_value,
                        value,
                        grad,
                        self.lr
                    ),
                ));
            }
            updates.push((param, new_value));
        }
        for (param, new_value) in updates {
            graph.set_value(param, new_value)?;
        }
        log::trace!("sgd step updated {} parameters", self.params.len());
        Ok(())
    }

    fn zero_grad(&mut self, graph: &mut Graph) -> Result<(), ScalarGradError> {
        graph.zero_grads(&self.params)
    }

    fn params(&self) -> &[NodeId] {
        &self.params
    }

    fn learning_rate(&self) -> f64 {
        self.lr
    }

    fn set_learning_rate(&mut self, lr: f64) -> Result<(), ScalarGradError> {
        check_lr(lr)?;
        self.lr = lr;
        Ok(())
    }
}
