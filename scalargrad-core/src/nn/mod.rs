// src/nn/mod.rs
// Network building blocks composed purely from the scalar operation set.

pub mod init;
pub mod layers;
pub mod losses;
pub mod module; // Trait Module

// Re-export common items
pub use layers::{Layer, Neuron};
pub use losses::{MseLoss, Reduction};
pub use module::Module;
