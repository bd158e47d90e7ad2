use thiserror::Error;

/// Custom error type for the scalograd framework.
///
/// Engine arithmetic never produces one of these: division by zero and friends follow
/// IEEE-754 and propagate infinities or NaN. Errors come from the edges of the system
/// (operand validation, network wiring, losses, optimizer and training configuration).
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum ScalogradError {
    #[error("Invalid operand for {operation}: {reason}")]
    InvalidOperand { operation: String, reason: String },

    #[error("Dimension mismatch during {operation}: expected {expected}, got {actual}")]
    DimensionMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("Length mismatch during {operation}: {left} vs {right}")]
    LengthMismatch {
        left: usize,
        right: usize,
        operation: String,
    },

    #[error("Cannot compute {0} over an empty input")]
    EmptyInput(String),

    #[error("Index out of bounds: index {index} for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Failed to parse {key}={value:?}: {message}")]
    ConfigParse {
        key: String,
        value: String,
        message: String,
    },
}

impl ScalogradError {
    pub(crate) fn invalid_operand(operation: &str, reason: impl Into<String>) -> Self {
        ScalogradError::InvalidOperand {
            operation: operation.to_string(),
            reason: reason.into(),
        }
    }
}
