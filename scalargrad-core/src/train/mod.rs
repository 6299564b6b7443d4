//! # Training loop
//!
//! [`train_step`] is one full-batch gradient descent step; [`Trainer`]
//! repeats it according to a [`TrainConfig`].

pub mod config;
pub mod step;
pub mod trainer;

pub use config::TrainConfig;
pub use step::train_step;
pub use trainer::{TrainReport, Trainer};
