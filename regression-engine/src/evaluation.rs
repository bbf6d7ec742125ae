use std::cmp::Ordering;

use common::ObservationSet;

use crate::{mean_squared_error, predict, Model, RegressionResult, Result};

/// One observation with the predictions of every model
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionRow {
    pub id: usize,
    pub x1: f64,
    pub y: f64,
    pub ols: f64,
    pub ridge: f64,
    pub lasso: f64,
}

impl PredictionRow {
    /// The prediction of `model`
    #[inline]
    pub fn prediction(&self, model: Model) -> f64 {
        match model {
            Model::Ols => self.ols,
            Model::Ridge => self.ridge,
            Model::Lasso => self.lasso,
        }
    }
}

/// Predictions and mean squared errors of a regression result on a set of observations
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    rows: Vec<PredictionRow>,
    // indexed like Model::ALL
    mse: [f64; 3],
}

impl Evaluation {
    pub(crate) fn new(result: &RegressionResult, observations: &ObservationSet) -> Result<Self> {
        let rows: Vec<PredictionRow> = observations
            .iter()
            .map(|o| PredictionRow {
                id: o.id(),
                x1: o.x1(),
                y: o.y(),
                ols: predict(&result.ols, o),
                ridge: predict(&result.ridge, o),
                lasso: predict(&result.lasso, o),
            })
            .collect();
        let actuals: Vec<f64> = rows.iter().map(|r| r.y).collect();

        let mut mse = [0.0; 3];
        for (i, model) in Model::ALL.iter().enumerate() {
            let predictions: Vec<f64> = rows.iter().map(|r| r.prediction(*model)).collect();
            mse[i] = mean_squared_error(&predictions, &actuals)?;
        }
        debug!("mse: ols: {:.3}, ridge: {:.3}, lasso: {:.3}", mse[0], mse[1], mse[2]);

        Ok(Self { rows, mse })
    }

    /// Rows in observation order
    #[inline(always)]
    pub fn rows(&self) -> &[PredictionRow] {
        &self.rows
    }

    /// The predictions of `model`, in observation order
    pub fn predictions(&self, model: Model) -> Vec<f64> {
        self.rows.iter().map(|r| r.prediction(model)).collect()
    }

    /// The mean squared error of `model`
    #[inline]
    pub fn mse(&self, model: Model) -> f64 {
        match model {
            Model::Ols => self.mse[0],
            Model::Ridge => self.mse[1],
            Model::Lasso => self.mse[2],
        }
    }

    /// Rows ordered by `x1`, ready to be drawn as lines over `x1`
    pub fn series_by_x1(&self) -> Vec<PredictionRow> {
        let mut rows = self.rows.clone();
        rows.sort_by(|a, b| a.x1.partial_cmp(&b.x1).unwrap_or(Ordering::Equal));
        rows
    }
}
