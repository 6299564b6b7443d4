use super::config::TrainConfig;
use super::step::train_step;
use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::nn::module::Module;
use log::{info, warn};

/// Loss history of a finished run, one entry per step.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrainReport {
    pub losses: Vec<f64>,
}

impl TrainReport {
    pub fn steps(&self) -> usize {
        self.losses.len()
    }

    pub fn first_loss(&self) -> Option<f64> {
        self.losses.first().copied()
    }

    pub fn final_loss(&self) -> Option<f64> {
        self.losses.last().copied()
    }
}

/// Repeats [`train_step`] for a configured number of steps.
///
/// The graph is rewound to its pre-step length after every step, so only the
/// model's parameters persist and memory stays flat over a run.
#[derive(Clone, Debug, Default)]
pub struct Trainer {
    config: TrainConfig,
}

impl Trainer {
    pub fn new(config: TrainConfig) -> Self {
        Trainer { config }
    }

    pub fn config(&self) -> &TrainConfig {
        &self.config
    }

    /// Trains `model` on the full batch `(xs, ys)`.
    ///
    /// # Errors
    /// `InvalidConfig` from [`TrainConfig::validate`], or the first error
    /// returned by a step. The graph is rewound in both cases.
    pub fn fit<M, X, Y>(
        &self,
        graph: &mut Graph,
        model: &M,
        xs: &[X],
        ys: &[Y],
    ) -> Result<TrainReport, ScalarGradError>
    where
        M: Module + ?Sized,
        X: AsRef<[f64]>,
        Y: AsRef<[f64]>,
    {
        self.config.validate()?;
        if self.config.learning_rate > 1.0 {
            warn!(
                "learning rate {} is above 1.0; training may diverge",
                self.config.learning_rate
            );
        }
        info!(
            "training {} parameters on {} examples for {} steps (lr {})",
            model.num_parameters(),
            xs.len(),
            self.config.steps,
            self.config.learning_rate
        );

        let mark = graph.mark();
        let mut report = TrainReport::default();
        for step in 0..self.config.steps {
            let loss = train_step(graph, model, xs, ys, self.config.learning_rate)?;
            let value = graph.value(loss)?;
            graph.rewind(mark);
            report.losses.push(value);

            let last = step + 1 == self.config.steps;
            let interval = self.config.log_interval;
            if last || (interval > 0 && step % interval == 0) {
                info!("step {} loss {:.6}", step, value);
            }
        }
        Ok(report)
    }
}
