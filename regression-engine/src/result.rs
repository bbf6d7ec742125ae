use common::{Coefficients, ObservationSet, COEFFICIENT_NAMES, NUM_COEFFICIENTS};

use crate::{Evaluation, Result};

/// One of the three fitted models
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Model {
    /// Ordinary least squares
    Ols,
    /// Ridge regression
    Ridge,
    /// Lasso shrinkage of the OLS fit
    Lasso,
}

impl Model {
    /// All models, in reporting order
    pub const ALL: [Model; 3] = [Model::Ols, Model::Ridge, Model::Lasso];

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Model::Ols => "OLS",
            Model::Ridge => "Ridge",
            Model::Lasso => "Lasso",
        }
    }
}

/// The penalized regression whose penalty is currently being tuned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegressionKind {
    /// L2 penalty
    #[default]
    Ridge,
    /// L1 penalty
    Lasso,
}

impl RegressionKind {
    /// The model fitted with this kind of penalty
    #[inline(always)]
    pub fn model(&self) -> Model {
        match self {
            RegressionKind::Ridge => Model::Ridge,
            RegressionKind::Lasso => Model::Lasso,
        }
    }
}

/// The coefficients of all three models for one coefficient
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoefficientRow {
    pub name: &'static str,
    pub ols: f64,
    pub ridge: f64,
    pub lasso: f64,
}

/// The fitted coefficients of one engine run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegressionResult {
    pub ols: Coefficients,
    pub ridge: Coefficients,
    pub lasso: Coefficients,
}

impl RegressionResult {
    /// The coefficients of `model`
    #[inline]
    pub fn coefficients(&self, model: Model) -> &Coefficients {
        match model {
            Model::Ols => &self.ols,
            Model::Ridge => &self.ridge,
            Model::Lasso => &self.lasso,
        }
    }

    /// The coefficients of the penalized regression `kind`
    #[inline]
    pub fn penalized(&self, kind: RegressionKind) -> &Coefficients {
        self.coefficients(kind.model())
    }

    /// The models side by side, one row per coefficient
    pub fn coefficient_rows(&self) -> [CoefficientRow; NUM_COEFFICIENTS] {
        let mut rows = [CoefficientRow {
            name: "",
            ols: 0.0,
            ridge: 0.0,
            lasso: 0.0,
        }; NUM_COEFFICIENTS];
        for (i, row) in rows.iter_mut().enumerate() {
            *row = CoefficientRow {
                name: COEFFICIENT_NAMES[i],
                ols: self.ols[i],
                ridge: self.ridge[i],
                lasso: self.lasso[i],
            };
        }

        rows
    }

    /// Predictions and mean squared errors of all models on `observations`
    pub fn evaluate(&self, observations: &ObservationSet) -> Result<Evaluation> {
        Evaluation::new(self, observations)
    }
}
