use lin_reg::DEFAULT_NUM_PASSES;

use crate::RegressionKind;

/// The parameters of one regression run
#[derive(Debug, Clone)]
pub struct Params {
    /// Ridge penalty strength
    pub ridge_lambda: f64,
    /// Lasso penalty strength
    pub lasso_lambda: f64,
    /// Whether ridge penalizes the intercept as well
    pub penalize_intercept: bool,
    /// Number of soft-thresholding passes of the lasso shrinkage
    pub lasso_passes: usize,
}

impl Params {
    /// The penalty strength of the given regression
    #[inline]
    pub fn lambda(&self, kind: RegressionKind) -> f64 {
        match kind {
            RegressionKind::Ridge => self.ridge_lambda,
            RegressionKind::Lasso => self.lasso_lambda,
        }
    }

    /// Replace the penalty strength of the given regression
    pub fn set_lambda(&mut self, kind: RegressionKind, lambda: f64) {
        match kind {
            RegressionKind::Ridge => self.ridge_lambda = lambda,
            RegressionKind::Lasso => self.lasso_lambda = lambda,
        }
    }
}

impl Default for Params {
    fn default() -> Self {
        Self {
            ridge_lambda: 1.0,
            lasso_lambda: 1.0,
            penalize_intercept: true,
            lasso_passes: DEFAULT_NUM_PASSES,
        }
    }
}
