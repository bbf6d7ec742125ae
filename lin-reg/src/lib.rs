#[macro_use]
extern crate log;

use common::Coefficients;
use nalgebra::{DMatrix, DVector};

mod error;
mod lasso_shrinkage;
mod matrix;
mod metrics;
mod ordinary_least_squares;
mod solver;
mod tikhonov_regularization;

pub use error::{RegressionError, Result};
pub use lasso_shrinkage::{soft_threshold, LassoShrinkage, DEFAULT_NUM_PASSES, THRESHOLD_DIVISOR};
pub use matrix::{multiply, multiply_vector, transpose};
pub use metrics::mean_squared_error;
pub use ordinary_least_squares::{NormalEquations, OrdinaryLeastSquares};
pub use solver::solve;
pub use tikhonov_regularization::TikhonovRegularization;

/// Generic way of performing linear regression and fitting the coefficients
pub trait LinReg: Clone {
    /// Fit the coefficients, mapping rows of the design to the targets
    ///
    /// # Parameters
    /// design: Input data, where the first column should be just 1s
    /// targets: One target per row of the design
    fn fit(&self, design: &DMatrix<f64>, targets: &DVector<f64>) -> Result<Coefficients> {
        let equations = NormalEquations::new(design, targets)?;
        self.fit_normal_equations(&equations)
    }

    /// Fit the coefficients from already assembled normal equations,
    /// so several regressors can share one `X^T X` and `X^T y`
    fn fit_normal_equations(&self, equations: &NormalEquations) -> Result<Coefficients>;
}

/// Ensure a regularization coefficient is usable as a penalty
pub(crate) fn validate_regularization(regularization_coeff: f64) -> Result<f64> {
    if regularization_coeff.is_finite() && regularization_coeff >= 0.0 {
        Ok(regularization_coeff)
    } else {
        Err(RegressionError::InvalidRegularization(regularization_coeff))
    }
}
