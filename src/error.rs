use thiserror::Error;

/// Errors returned by the solver entry points.
///
/// Inputs are validated up front, so a failing call returns before any table,
/// memo or trace has been allocated and never leaves partial state behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    /// Out-of-range or malformed arguments (oversized Fibonacci index,
    /// zero weights or values, duplicate item ids or denominations).
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl SolverError {
    /// Creates an `InvalidInput` error with the given message.
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        SolverError::InvalidInput(message.into())
    }
}

/// Result type for solver operations.
pub type Result<T> = std::result::Result<T, SolverError>;
