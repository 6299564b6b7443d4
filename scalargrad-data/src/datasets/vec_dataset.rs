use super::traits::Dataset;
use scalargrad_core::ScalarGradError;

/// A dataset of `(input, target)` vectors held in two parallel `Vec`s.
///
/// [`inputs`](VecDataset::inputs) and [`targets`](VecDataset::targets) can be
/// passed straight to `scalargrad_core::train_step` or `Trainer::fit`.
#[derive(Debug, Clone, PartialEq)]
pub struct VecDataset {
    pub(crate) inputs: Vec<Vec<f64>>,
    pub(crate) targets: Vec<Vec<f64>>,
}

impl VecDataset {
    /// Creates a new `VecDataset`.
    ///
    /// # Errors
    ///
    /// `ShapeMismatch` if `inputs` and `targets` differ in length.
    pub fn new(inputs: Vec<Vec<f64>>, targets: Vec<Vec<f64>>) -> Result<Self, ScalarGradError> {
        if inputs.len() != targets.len() {
            return Err(ScalarGradError::ShapeMismatch {
                expected: inputs.len(),
                actual: targets.len(),
                operation: "VecDataset::new".to_string(),
            });
        }
        Ok(Self { inputs, targets })
    }

    pub fn inputs(&self) -> &[Vec<f64>] {
        &self.inputs
    }

    pub fn targets(&self) -> &[Vec<f64>] {
        &self.targets
    }

    /// Iterates over `(input, target)` pairs without cloning.
    pub fn iter(&self) -> impl Iterator<Item = (&[f64], &[f64])> {
        self.inputs
            .iter()
            .zip(&self.targets)
            .map(|(x, y)| (x.as_slice(), y.as_slice()))
    }
}

impl Dataset for VecDataset {
    type Item = (Vec<f64>, Vec<f64>);

    /// Returns a clone of the pair at `index`.
    fn get(&self, index: usize) -> Result<Self::Item, ScalarGradError> {
        match (self.inputs.get(index), self.targets.get(index)) {
            (Some(x), Some(y)) => Ok((x.clone(), y.clone())),
            _ => Err(ScalarGradError::IndexOutOfBounds {
                index,
                len: self.inputs.len(),
            }),
        }
    }

    fn len(&self) -> usize {
        self.inputs.len()
    }
}

#[cfg(test)]
#[path = "vec_dataset_test.rs"]
mod tests;
