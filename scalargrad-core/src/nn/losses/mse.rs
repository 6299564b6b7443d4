// scalargrad-core/src/nn/losses/mse.rs

use crate::error::ScalarGradError;
use crate::graph::{Graph, NodeId};
use std::fmt;
use std::str::FromStr;

/// Specifies the reduction applied to the squared errors:
/// 'mean' | 'sum'
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reduction {
    #[default]
    Mean,
    Sum,
}

impl FromStr for Reduction {
    type Err = ScalarGradError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mean" => Ok(Reduction::Mean),
            "sum" => Ok(Reduction::Sum),
            _ => Err(ScalarGradError::InvalidConfig(format!(
                "Unsupported reduction type: {}",
                s
            ))),
        }
    }
}

impl fmt::Display for Reduction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reduction::Mean => write!(f, "mean"),
            Reduction::Sum => write!(f, "sum"),
        }
    }
}

/// Computes the Mean Squared Error loss between predicted and target scalars.
///
/// Every error term is `(target - output)^2`, built from `sub` and `pow`, so
/// the loss is an ordinary node of the graph and differentiates like any
/// other. With [`Reduction::Mean`] the terms are divided by their count.
#[derive(Debug, Clone, Default)]
pub struct MseLoss {
    reduction: Reduction,
}

impl MseLoss {
    pub fn new(reduction: Reduction) -> Self {
        MseLoss { reduction }
    }

    /// Creates an `MseLoss` from a reduction name (`"mean"` or `"sum"`).
    pub fn from_name(name: &str) -> Result<Self, ScalarGradError> {
        Ok(MseLoss::new(name.parse()?))
    }

    pub fn reduction(&self) -> Reduction {
        self.reduction
    }

    /// Builds one `(target - output)^2` node per component.
    ///
    /// # Errors
    /// `ShapeMismatch` if the slices differ in length, before any node is built.
    pub fn squared_errors(
        &self,
        graph: &mut Graph,
        outputs: &[NodeId],
        targets: &[NodeId],
    ) -> Result<Vec<NodeId>, ScalarGradError> {
        if outputs.len() != targets.len() {
            return Err(ScalarGradError::ShapeMismatch {
                expected: targets.len(),
                actual: outputs.len(),
                operation: "MseLoss calculate".to_string(),
            });
        }
        outputs
            .iter()
            .zip(targets)
            .map(|(&output, &target)| {
                let diff = graph.sub(target, output)?;
                graph.pow(diff, 2.0)
            })
            .collect()
    }

    /// Reduces already built error terms to a single loss node.
    ///
    /// # Errors
    /// `EmptyBatch` if `terms` is empty.
    pub fn reduce(&self, graph: &mut Graph, terms: &[NodeId]) -> Result<NodeId, ScalarGradError> {
        if terms.is_empty() {
            return Err(ScalarGradError::EmptyBatch);
        }
        match self.reduction {
            Reduction::Mean => graph.mean(terms),
            Reduction::Sum => graph.sum(terms),
        }
    }

    /// Loss of one output vector against one target vector.
    pub fn calculate(
        &self,
        graph: &mut Graph,
        outputs: &[NodeId],
        targets: &[NodeId],
    ) -> Result<NodeId, ScalarGradError> {
        if outputs.is_empty() && targets.is_empty() {
            return Err(ScalarGradError::EmptyBatch);
        }
        let terms = self.squared_errors(graph, outputs, targets)?;
        self.reduce(graph, &terms)
    }

    /// Loss over a batch of `(outputs, targets)` pairs.
    ///
    /// The reduction runs over every component of every example, so
    /// `Reduction::Mean` divides by the total number of terms.
    pub fn calculate_batch<O, T>(
        &self,
        graph: &mut Graph,
        outputs: &[O],
        targets: &[T],
    ) -> Result<NodeId, ScalarGradError>
    where
        O: AsRef<[NodeId]>,
        T: AsRef<[NodeId]>,
    {
        if outputs.len() != targets.len() {
            return Err(ScalarGradError::ShapeMismatch {
                expected: targets.len(),
                actual: outputs.len(),
                operation: "MseLoss calculate_batch".to_string(),
            });
        }
        if let Some((o, t)) = outputs
            .iter()
            .zip(targets)
            .find(|(o, t)| o.as_ref().len() != t.as_ref().len())
        {
            return Err(ScalarGradError::ShapeMismatch {
                expected: t.as_ref().len(),
                actual: o.as_ref().len(),
                operation: "MseLoss calculate_batch".to_string(),
            });
        }
        let mut terms = Vec::new();
        for (o, t) in outputs.iter().zip(targets) {
            terms.extend(self.squared_errors(graph, o.as_ref(), t.as_ref())?);
        }
        self.reduce(graph, &terms)
    }
}

// Note: tests live in mse_test.rs.
#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
