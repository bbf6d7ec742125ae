//! A simplified stand-in for lasso regression.
//!
//! Instead of coordinate descent against the residuals, the soft-thresholding
//! operator is applied repeatedly to the OLS coefficients. This does not
//! minimize the L1 penalized objective, it only reproduces the qualitative
//! effect of lasso: coefficients shrink towards zero and, once their magnitude
//! falls below the threshold, land exactly on zero and stay there.

use common::Coefficients;

use super::LinReg;
use crate::{validate_regularization, NormalEquations, OrdinaryLeastSquares, Result};

/// The threshold of every pass is `regularization_coeff / THRESHOLD_DIVISOR`
pub const THRESHOLD_DIVISOR: f64 = 20.0;

/// Number of shrinkage passes unless configured otherwise
pub const DEFAULT_NUM_PASSES: usize = 100;

/// The soft-thresholding operator `sign(v) * max(0, |v| - threshold)`
#[inline(always)]
pub fn soft_threshold(v: f64, threshold: f64) -> f64 {
    if v == 0.0 {
        return v;
    }
    v.signum() * (v.abs() - threshold).max(0.0)
}

/// Iterated soft-thresholding of the OLS solution, leaving the intercept alone
#[derive(Debug, Clone)]
pub struct LassoShrinkage {
    /// Lasso parameter
    pub regularization_coeff: f64,
    /// How often the soft-thresholding is applied
    pub num_passes: usize,
}

impl LassoShrinkage {
    /// Lasso shrinkage with the default number of passes
    pub fn new(regularization_coeff: f64) -> Self {
        Self {
            regularization_coeff,
            num_passes: DEFAULT_NUM_PASSES,
        }
    }

    /// Shrink the given OLS coefficients.
    /// Each pass thresholds the already shrunk values of the previous pass.
    pub fn shrink(&self, ols: &Coefficients) -> Result<Coefficients> {
        let threshold = validate_regularization(self.regularization_coeff)? / THRESHOLD_DIVISOR;

        let mut coefficients = *ols;
        for pass in 0..self.num_passes {
            // index 0 is the intercept
            coefficients.iter_mut().skip(1).for_each(|v| *v = soft_threshold(*v, threshold));

            if coefficients.iter().skip(1).all(|v| *v == 0.0) {
                // zero is a fixed point of the operator
                debug!("all coefficients vanished after {} passes", pass + 1);
                break;
            }
        }

        Ok(coefficients)
    }
}

impl LinReg for LassoShrinkage {
    fn fit_normal_equations(&self, equations: &NormalEquations) -> Result<Coefficients> {
        let ols = OrdinaryLeastSquares.fit_normal_equations(equations)?;
        self.shrink(&ols)
    }
}
