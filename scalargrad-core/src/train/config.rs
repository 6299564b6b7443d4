//! Training configuration

use crate::error::ScalarGradError;

/// Configuration of a [`Trainer`](super::Trainer) run.
#[derive(Clone, Debug, PartialEq)]
pub struct TrainConfig {
    /// Number of full-batch training steps.
    pub steps: usize,

    /// Gradient descent step size.
    pub learning_rate: f64,

    /// Log the loss every N steps (0 = only the last step).
    pub log_interval: usize,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            steps: 100,
            learning_rate: 0.1,
            log_interval: 10,
        }
    }
}

impl TrainConfig {
    /// Create a new training configuration
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }

    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    /// Set logging interval
    pub fn with_log_interval(mut self, interval: usize) -> Self {
        self.log_interval = interval;
        self
    }

    /// Checks the configuration before a run.
    ///
    /// # Errors
    /// `InvalidConfig` for zero steps or a learning rate that is not a
    /// positive finite number.
    pub fn validate(&self) -> Result<(), ScalarGradError> {
        if self.steps == 0 {
            return Err(ScalarGradError::InvalidConfig(
                "steps must be at least 1".to_string(),
            ));
        }
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(ScalarGradError::InvalidConfig(format!(
                "learning rate must be positive and finite, got {}",
                self.learning_rate
            )));
        }
        Ok(())
    }
}
