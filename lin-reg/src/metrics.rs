use crate::{RegressionError, Result};

/// Mean of the squared differences between predictions and actual values.
/// An empty pair of sequences has no error.
pub fn mean_squared_error(predictions: &[f64], actuals: &[f64]) -> Result<f64> {
    if predictions.len() != actuals.len() {
        return Err(RegressionError::LengthMismatch {
            predictions: predictions.len(),
            actuals: actuals.len(),
        });
    }
    if predictions.is_empty() {
        return Ok(0.0);
    }

    let sum: f64 = predictions.iter().zip(actuals).map(|(p, a)| (p - a).powi(2)).sum();

    Ok(sum / predictions.len() as f64)
}
