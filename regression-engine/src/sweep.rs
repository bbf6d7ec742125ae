//! Recompute the regressions over a grid of penalty strengths

use std::{cmp::max, sync::Arc};

use common::ObservationSet;
use crossbeam::channel::unbounded;
use threadpool::ThreadPool;

use crate::{compute_with_params, Model, Params, RegressionResult, Result};

/// The regressions at one penalty strength of a sweep
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepPoint {
    /// Used as both the ridge and the lasso penalty
    pub lambda: f64,
    pub result: RegressionResult,
    pub ridge_mse: f64,
    pub lasso_mse: f64,
}

/// Fit the regressions for every `lambda`, in parallel.
/// Each lambda serves as ridge and lasso penalty at once, all other
/// settings are taken from `params`.
///
/// # Returns
/// One point per lambda, in the order of `lambdas`, or the first error
/// in that order
pub fn sweep(
    observations: &ObservationSet,
    lambdas: &[f64],
    params: &Params,
) -> Result<Vec<SweepPoint>> {
    let pool = ThreadPool::new(max(num_cpus::get().saturating_sub(2), 1));
    let observations = Arc::new(observations.clone());

    let (ch_point_s, ch_point_r) = unbounded();
    for (i, lambda) in lambdas.iter().copied().enumerate() {
        let ch_point_s = ch_point_s.clone();
        let observations = observations.clone();
        let params = Params {
            ridge_lambda: lambda,
            lasso_lambda: lambda,
            ..params.clone()
        };
        pool.execute(move || {
            let point = sweep_point(&observations, lambda, &params);
            // the receiver drains until every sender is gone, so this can not fail
            let _ = ch_point_s.send((i, point));
        });
    }
    drop(ch_point_s);

    let mut points = Vec::with_capacity(lambdas.len());
    while let Ok(point) = ch_point_r.recv() {
        points.push(point);
    }
    assert_eq!(points.len(), lambdas.len(), "a sweep job panicked");
    points.sort_by_key(|(i, _)| *i);
    info!("swept {} lambdas over {} observations", lambdas.len(), observations.len());

    points.into_iter().map(|(_, point)| point).collect()
}

fn sweep_point(observations: &ObservationSet, lambda: f64, params: &Params) -> Result<SweepPoint> {
    let result = compute_with_params(observations, params)?;
    let evaluation = result.evaluate(observations)?;

    Ok(SweepPoint {
        lambda,
        result,
        ridge_mse: evaluation.mse(Model::Ridge),
        lasso_mse: evaluation.mse(Model::Lasso),
    })
}
