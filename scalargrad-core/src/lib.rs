//! # scalargrad-core
//!
//! A scalar reverse-mode automatic differentiation engine with a tiny neural
//! network layer on top.
//!
//! Every number of a computation is a node in a [`Graph`] arena. Operations
//! (`add`, `sub`, `mul`, `div`, `pow`, `relu`) append new nodes and record
//! their local derivatives; [`Graph::backward`] walks the graph once in
//! reverse topological order and accumulates `d root / d node` into every
//! ancestor. [`Neuron`](nn::Neuron), [`Layer`](nn::Layer) and [`Mlp`] are
//! plain compositions of those operations, trained with [`train_step`].

// Déclare les modules principaux de la crate
pub mod autograd;
pub mod error;
pub mod graph;
pub mod node;
pub mod ops;
pub mod types;

pub mod model;
pub mod nn;
pub mod optim;
pub mod train;
pub mod utils;

pub use error::ScalarGradError;
pub use graph::{Graph, Mark, NodeId};
pub use model::Mlp;
pub use nn::{Layer, Module, MseLoss, Neuron, Reduction};
pub use optim::{Optimizer, Sgd};
pub use train::{train_step, TrainConfig, TrainReport, Trainer};
pub use types::{Op, Role, Tag};
