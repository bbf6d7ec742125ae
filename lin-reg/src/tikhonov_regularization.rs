use common::Coefficients;

use super::LinReg;
use crate::{validate_regularization, NormalEquations, Result};

/// Tikhonov regularization aka ridge regression
/// It is particularly useful to mitigate the problem of multicollinearity in
/// linear regression
#[derive(Debug, Clone)]
pub struct TikhonovRegularization {
    /// Ridge parameter
    pub regularization_coeff: f64,
    /// Whether the intercept's diagonal entry is penalized like the others
    pub penalize_intercept: bool,
}

impl TikhonovRegularization {
    /// Ridge regression penalizing every coefficient, the intercept included
    pub fn new(regularization_coeff: f64) -> Self {
        Self {
            regularization_coeff,
            penalize_intercept: true,
        }
    }
}

impl LinReg for TikhonovRegularization {
    fn fit_normal_equations(&self, equations: &NormalEquations) -> Result<Coefficients> {
        let penalty = validate_regularization(self.regularization_coeff)?;
        let first_penalized = if self.penalize_intercept { 0 } else { 1 };

        equations.solve_penalized(penalty, first_penalized)
    }
}

#[cfg(test)]
mod tests {
    use nalgebra::{DMatrix, DVector};
    use nanorand::{Rng, WyRand};
    use round::round;

    use super::*;
    use crate::{OrdinaryLeastSquares, RegressionError};

    fn get_random_problem(rng: &mut WyRand) -> (DMatrix<f64>, DVector<f64>) {
        let design = DMatrix::from_fn(30, 4, |_, j| {
            if j == 0 {
                1.0
            } else {
                rng.generate::<f64>() * 10.0 - 5.0
            }
        });
        let targets = DVector::from_fn(30, |i, _| {
            2.0 + design[(i, 1)] + 0.5 * design[(i, 2)] + rng.generate::<f64>() - 0.5
        });

        (design, targets)
    }

    #[test]
    fn tikhonov_regularization() {
        if let Err(_) = pretty_env_logger::try_init() {}

        // Note the first column being just ones
        let design = DMatrix::from_row_slice(
            5,
            4,
            &[
                1.0, 0.0, 0.0, 1.0, //
                1.0, 1.0, 0.0, 0.0, //
                1.0, 2.0, 1.0, 0.0, //
                1.0, 3.0, 2.0, 1.0, //
                1.0, 0.0, 1.0, 2.0,
            ],
        );
        let targets = DVector::from_vec(vec![1.0, 2.0, 3.0, 4.0, 1.0]);
        info!("design: {}, targets: {}", design, targets);

        let regressor = TikhonovRegularization::new(0.0);
        let mut coefficients = regressor.fit(&design, &targets).unwrap();
        info!("coefficients: {}", coefficients);

        // round coefficients
        coefficients.iter_mut().for_each(|v| *v = round(*v, 1));

        assert_eq!(coefficients, Coefficients::new(1.0, 1.0, 0.0, 0.0))
    }

    #[test]
    fn zero_penalty_matches_ols() {
        if let Err(_) = pretty_env_logger::try_init() {}

        let mut rng = WyRand::new_seed(0);
        for _ in 0..20 {
            let (design, targets) = get_random_problem(&mut rng);
            let ols = OrdinaryLeastSquares.fit(&design, &targets).unwrap();
            let ridge = TikhonovRegularization::new(0.0).fit(&design, &targets).unwrap();

            for (o, r) in ols.iter().zip(ridge.iter()) {
                assert!((o - r).abs() <= 1e-9 * o.abs().max(1.0), "ols: {}, ridge: {}", o, r);
            }
        }
    }

    #[test]
    fn penalty_shrinks_strong_coefficients() {
        if let Err(_) = pretty_env_logger::try_init() {}

        let mut rng = WyRand::new_seed(1);
        let (design, targets) = get_random_problem(&mut rng);
        let ols = OrdinaryLeastSquares.fit(&design, &targets).unwrap();

        // a penalized intercept leaks into correlated features for small penalties
        let mut previous = ols;
        for lambda in [1.0, 10.0, 100.0, 1000.0] {
            let regressor = TikhonovRegularization {
                regularization_coeff: lambda,
                penalize_intercept: false,
            };
            let ridge = regressor.fit(&design, &targets).unwrap();
            info!("lambda: {}, ridge: {}", lambda, ridge.transpose());
            assert!(ridge[1].abs() < previous[1].abs());
            previous = ridge;
        }

        let ridge = TikhonovRegularization::new(1000.0).fit(&design, &targets).unwrap();
        assert!(ridge[1].abs() < ols[1].abs());
        assert!(ridge[2].abs() < ols[2].abs());
    }

    #[test]
    fn intercept_exclusion() {
        if let Err(_) = pretty_env_logger::try_init() {}

        // constant targets are explained by the intercept alone
        let mut rng = WyRand::new_seed(2);
        let (design, _) = get_random_problem(&mut rng);
        let targets = DVector::from_element(design.nrows(), 3.0);

        let penalized = TikhonovRegularization::new(100.0).fit(&design, &targets).unwrap();
        let regressor = TikhonovRegularization {
            regularization_coeff: 100.0,
            penalize_intercept: false,
        };
        let unpenalized = regressor.fit(&design, &targets).unwrap();
        info!("penalized: {}, unpenalized: {}", penalized, unpenalized);

        assert!(penalized[0] < 3.0);
        assert!((unpenalized[0] - 3.0).abs() < 1e-9);
        assert!(unpenalized.rows(1, 3).amax() < 1e-9);
    }

    #[test]
    fn negative_penalty() {
        if let Err(_) = pretty_env_logger::try_init() {}

        let mut rng = WyRand::new_seed(3);
        let (design, targets) = get_random_problem(&mut rng);
        assert_eq!(
            TikhonovRegularization::new(-1.0).fit(&design, &targets),
            Err(RegressionError::InvalidRegularization(-1.0))
        );
        assert!(matches!(
            TikhonovRegularization::new(f64::NAN).fit(&design, &targets),
            Err(RegressionError::InvalidRegularization(_))
        ));
    }
}
