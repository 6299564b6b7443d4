use thiserror::Error;

/// Custom error type for the ScalarGrad engine.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum ScalarGradError {
    #[error("Shape mismatch: expected {expected}, got {actual} during operation {operation}")]
    ShapeMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("Division by zero in {operation}: divisor is 0 (numerator {numerator})")]
    DivisionByZero { operation: String, numerator: f64 },

    #[error("Domain error in {operation}: {reason}")]
    DomainError { operation: String, reason: String },

    #[error("Unknown node {index}: graph holds {len} nodes")]
    UnknownNode { index: usize, len: usize },

    #[error("Node {index} is not a leaf; only leaf values can be assigned")]
    NotALeaf { index: usize },

    #[error("Operation {operation} needs at least one operand")]
    EmptyInput { operation: String },

    #[error("Index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Cannot build a loss from an empty batch")]
    EmptyBatch,

    #[error("Invalid architecture: {0}")]
    InvalidArchitecture(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ScalarGradError {
    /// Shorthand used by the arithmetic ops when a result leaves the real line.
    pub(crate) fn domain(operation: &str, reason: impl Into<String>) -> Self {
        ScalarGradError::DomainError {
            operation: operation.to_string(),
            reason: reason.into(),
        }
    }
}
