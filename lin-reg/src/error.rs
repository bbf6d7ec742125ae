use thiserror::Error;

/// Convenient result alias
pub type Result<T> = std::result::Result<T, RegressionError>;

/// Everything that can go wrong while fitting or evaluating a regression
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegressionError {
    /// The shapes of the operands do not fit the requested operation
    #[error("dimension mismatch in {operation}: expected {expected}, found {found}")]
    DimensionMismatch {
        /// The operation that was attempted
        operation: &'static str,
        /// The dimension the operation required
        expected: usize,
        /// The dimension it was given
        found: usize,
    },

    /// A pivot vanished during elimination
    #[error("singular matrix, no usable pivot in column {column}")]
    SingularMatrix {
        /// Column of the offending pivot
        column: usize,
    },

    /// Predictions and actuals are of different length
    #[error("length mismatch: {predictions} predictions vs {actuals} actuals")]
    LengthMismatch {
        /// Number of predictions
        predictions: usize,
        /// Number of actual values
        actuals: usize,
    },

    /// A penalty strength that is negative or not finite
    #[error("regularization coefficient must be finite and non-negative, got {0}")]
    InvalidRegularization(f64),
}
