//! Fits OLS, ridge and lasso to an observation set and evaluates the fits.
//!
//! Every computation is pure: the same observations and penalties always
//! yield the same result, and nothing is cached between calls.

#[macro_use]
extern crate log;

use common::{Coefficients, Observation, ObservationSet};
use lin_reg::{
    LassoShrinkage, LinReg, NormalEquations, OrdinaryLeastSquares, TikhonovRegularization,
};

mod evaluation;
mod params;
mod result;
mod sweep;

pub use evaluation::{Evaluation, PredictionRow};
pub use lin_reg::{mean_squared_error, RegressionError, Result};
pub use params::Params;
pub use result::{CoefficientRow, Model, RegressionKind, RegressionResult};
pub use sweep::{sweep, SweepPoint};

/// Fit all three regressions with the given penalties, penalizing the
/// intercept in ridge like every other coefficient
///
/// # Arguments
/// observations: At least four observations, fewer leave OLS underdetermined
/// ridge_lambda: Non-negative ridge penalty
/// lasso_lambda: Non-negative lasso penalty
pub fn compute_regressions(
    observations: &ObservationSet,
    ridge_lambda: f64,
    lasso_lambda: f64,
) -> Result<RegressionResult> {
    let params = Params {
        ridge_lambda,
        lasso_lambda,
        ..Default::default()
    };
    compute_with_params(observations, &params)
}

/// Fit all three regressions as configured by `params`
pub fn compute_with_params(
    observations: &ObservationSet,
    params: &Params,
) -> Result<RegressionResult> {
    let design = observations.design_matrix();
    let targets = observations.targets();
    let equations = NormalEquations::new(&design, &targets)?;

    let ols = OrdinaryLeastSquares.fit_normal_equations(&equations)?;
    let ridge = TikhonovRegularization {
        regularization_coeff: params.ridge_lambda,
        penalize_intercept: params.penalize_intercept,
    }
    .fit_normal_equations(&equations)?;
    let lasso = LassoShrinkage {
        regularization_coeff: params.lasso_lambda,
        num_passes: params.lasso_passes,
    }
    .shrink(&ols)?;

    info!(
        "fitted {} observations, ridge lambda: {}, lasso lambda: {}",
        observations.len(),
        params.ridge_lambda,
        params.lasso_lambda
    );
    debug!("ols: {}, ridge: {}, lasso: {}", ols.transpose(), ridge.transpose(), lasso.transpose());

    Ok(RegressionResult { ols, ridge, lasso })
}

/// The prediction `c0 + c1 * x1 + c2 * x2 + c3 * x3` for one observation
#[inline]
pub fn predict(coefficients: &Coefficients, observation: &Observation) -> f64 {
    coefficients.dot(&observation.design_row())
}
