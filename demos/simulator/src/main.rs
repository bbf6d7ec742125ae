//! Terminal front end: tune the ridge and lasso penalties and watch the
//! coefficients and errors respond. Output goes through the logger,
//! `RUST_LOG` overrides the default `info` level.

#[macro_use]
extern crate log;

use std::io;

use common::ObservationSet;
use data_gen::{DataGenerator, Params as GeneratorParams};
use dialoguer::{theme::ColorfulTheme, Input, Select};
use log::LevelFilter;
use regression_engine::{compute_with_params, sweep, Model, Params, RegressionKind};

const LAMBDA_MIN: f64 = 0.0;
const LAMBDA_MAX: f64 = 10.0;
const LAMBDA_STEP: f64 = 0.1;
const SWEEP_POINTS: usize = 11;

const ACTIONS: [&str; 6] = [
    "Ridge regression",
    "Lasso regression",
    "Set lambda",
    "Generate new data",
    "Sweep lambda",
    "Quit",
];

fn main() -> io::Result<()> {
    pretty_env_logger::formatted_builder()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let generator_params = GeneratorParams::default();
    let mut generator = DataGenerator::from_params(&generator_params);
    let mut observations = generator.generate(generator_params.num_observations);
    info!("got {} observations", observations.len());

    let mut params = Params::default();
    let mut kind = RegressionKind::default();
    report(&observations, &params, kind);

    let theme = ColorfulTheme::default();
    loop {
        let selection = Select::with_theme(&theme)
            .with_prompt(format!("{:?} regression, lambda: {:.1}", kind, params.lambda(kind)))
            .items(&ACTIONS)
            .default(0)
            .interact()?;
        match selection {
            0 => kind = RegressionKind::Ridge,
            1 => kind = RegressionKind::Lasso,
            2 => {
                let lambda: f64 = Input::with_theme(&theme)
                    .with_prompt(format!("{:?} lambda", kind))
                    .default(params.lambda(kind))
                    .validate_with(|v: &f64| -> Result<(), String> {
                        if (LAMBDA_MIN..=LAMBDA_MAX).contains(v) {
                            Ok(())
                        } else {
                            Err(format!("lambda must lie in [{}, {}]", LAMBDA_MIN, LAMBDA_MAX))
                        }
                    })
                    .interact_text()?;
                params.set_lambda(kind, snap_to_step(lambda));
            }
            3 => observations = generator.generate(generator_params.num_observations),
            4 => {
                report_sweep(&observations, &params, kind);
                continue;
            }
            _ => return Ok(()),
        }
        report(&observations, &params, kind);
    }
}

/// Round to the slider resolution
fn snap_to_step(lambda: f64) -> f64 {
    ((lambda / LAMBDA_STEP).round() * LAMBDA_STEP).clamp(LAMBDA_MIN, LAMBDA_MAX)
}

fn report(observations: &ObservationSet, params: &Params, kind: RegressionKind) {
    let result = match compute_with_params(observations, params) {
        Ok(result) => result,
        Err(e) => {
            error!("regression failed: {}", e);
            return;
        }
    };
    let evaluation = match result.evaluate(observations) {
        Ok(evaluation) => evaluation,
        Err(e) => {
            error!("evaluation failed: {}", e);
            return;
        }
    };

    info!("{:<10} {:>8} {:>8} {:>8}", "", "OLS", "Ridge", "Lasso");
    for row in result.coefficient_rows() {
        info!("{:<10} {:>8.3} {:>8.3} {:>8.3}", row.name, row.ols, row.ridge, row.lasso);
    }
    for model in Model::ALL {
        info!("MSE {:<6} {:.3}", model.name(), evaluation.mse(model));
    }
    info!(
        "{:?} coefficients: {:.3}",
        kind,
        result.penalized(kind).transpose()
    );
}

fn report_sweep(observations: &ObservationSet, params: &Params, kind: RegressionKind) {
    let lambdas: Vec<f64> = (0..SWEEP_POINTS)
        .map(|i| LAMBDA_MIN + (LAMBDA_MAX - LAMBDA_MIN) * i as f64 / (SWEEP_POINTS - 1) as f64)
        .collect();
    let points = match sweep(observations, &lambdas, params) {
        Ok(points) => points,
        Err(e) => {
            error!("sweep failed: {}", e);
            return;
        }
    };

    info!("{:>6} {:>8} {:>8} {:>8} {:>8}", "lambda", "X1", "X2", "X3", "MSE");
    for point in points {
        let coefficients = point.result.penalized(kind);
        let mse = match kind {
            RegressionKind::Ridge => point.ridge_mse,
            RegressionKind::Lasso => point.lasso_mse,
        };
        info!(
            "{:>6.1} {:>8.3} {:>8.3} {:>8.3} {:>8.3}",
            point.lambda, coefficients[1], coefficients[2], coefficients[3], mse
        );
    }
}
