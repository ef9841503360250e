use thiserror::Error;

/// Custom error type for the neurograd crate.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum NeuroGradError {
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    #[error("Domain error in {operation}: {reason}")]
    DomainError { operation: String, reason: String },

    #[error("Cycle detected in the computation graph during backward pass.")]
    CyclicGraph,

    #[error("Parameter count mismatch: expected {expected} values, got {actual}")]
    ParameterCountMismatch { expected: usize, actual: usize },

    #[error("Operation {operation} expects {expected} operand(s), got {actual}")]
    ArityMismatch {
        operation: String,
        expected: usize,
        actual: usize,
    },

    #[error("Dimension mismatch: expected {expected} inputs, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Storage error for {path}: {reason}")]
    StorageError { path: String, reason: String },

    #[error("Corrupted persisted state: {0}")]
    CorruptedState(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl NeuroGradError {
    pub(crate) fn domain(operation: &str, reason: impl Into<String>) -> Self {
        NeuroGradError::DomainError {
            operation: operation.to_string(),
            reason: reason.into(),
        }
    }
}
