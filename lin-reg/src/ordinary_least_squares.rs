use common::{Coefficients, NUM_COEFFICIENTS};
use nalgebra::{DMatrix, DVector};

use super::LinReg;
use crate::{multiply, multiply_vector, solve, transpose, RegressionError, Result};

/// The normal equations `X^T X b = X^T y` of a design `X` and targets `y`
#[derive(Debug, Clone, PartialEq)]
pub struct NormalEquations {
    xtx: DMatrix<f64>,
    xty: DVector<f64>,
}

impl NormalEquations {
    /// Assemble the normal equations
    ///
    /// # Parameters
    /// design: `n x 4` matrix with rows `[1, x1, x2, x3]`
    /// targets: `n` targets, one per row of the design
    pub fn new(design: &DMatrix<f64>, targets: &DVector<f64>) -> Result<Self> {
        if design.ncols() != NUM_COEFFICIENTS {
            return Err(RegressionError::DimensionMismatch {
                operation: "normal_equations",
                expected: NUM_COEFFICIENTS,
                found: design.ncols(),
            });
        }

        let design_t = transpose(design);
        let xtx = multiply(&design_t, design)?;
        let xty = multiply_vector(&design_t, targets)?;

        Ok(Self { xtx, xty })
    }

    /// `X^T X`
    #[inline(always)]
    pub fn xtx(&self) -> &DMatrix<f64> {
        &self.xtx
    }

    /// `X^T y`
    #[inline(always)]
    pub fn xty(&self) -> &DVector<f64> {
        &self.xty
    }

    /// Solve the equations, optionally with `penalty` added to the diagonal
    /// of `X^T X`, starting at `first_penalized`
    pub(crate) fn solve_penalized(&self, penalty: f64, first_penalized: usize) -> Result<Coefficients> {
        let mut lhs = self.xtx.clone();
        for i in first_penalized..lhs.nrows() {
            lhs[(i, i)] += penalty;
        }
        let solution = solve(&lhs, &self.xty)?;

        // the design has NUM_COEFFICIENTS columns, so the solution has as many entries
        Ok(Coefficients::from_iterator(solution.iter().copied()))
    }
}

/// Ordinary least squares, the unpenalized fit
#[derive(Debug, Clone, Copy, Default)]
pub struct OrdinaryLeastSquares;

impl LinReg for OrdinaryLeastSquares {
    fn fit_normal_equations(&self, equations: &NormalEquations) -> Result<Coefficients> {
        equations.solve_penalized(0.0, 0)
    }
}

#[cfg(test)]
mod tests {
    use round::round;

    use super::*;

    /// Design with rows `[1, x1, x2, x3]`, in row order
    fn get_design() -> DMatrix<f64> {
        DMatrix::from_row_slice(
            6,
            4,
            &[
                1.0, 0.0, 0.0, 1.0, //
                1.0, 1.0, 0.0, 0.0, //
                1.0, 2.0, 1.0, 0.0, //
                1.0, 3.0, 2.0, 1.0, //
                1.0, -1.0, 1.0, 2.0, //
                1.0, 0.5, -2.0, -1.0,
            ],
        )
    }

    #[test]
    fn ols_recovers_exact_fit() {
        if let Err(_) = pretty_env_logger::try_init() {}

        let design = get_design();
        let truth = Coefficients::new(1.0, 2.0, -0.5, 0.25);
        let targets = &design * DVector::from_column_slice(truth.as_slice());
        info!("design: {}, targets: {}", design, targets);

        let mut coefficients = OrdinaryLeastSquares.fit(&design, &targets).unwrap();
        info!("coefficients: {}", coefficients);

        coefficients.iter_mut().for_each(|v| *v = round(*v, 6));
        assert_eq!(coefficients, truth);
    }

    #[test]
    fn normal_equations_shapes() {
        if let Err(_) = pretty_env_logger::try_init() {}

        let design = get_design();
        let targets = DVector::from_element(design.nrows(), 1.0);
        let equations = NormalEquations::new(&design, &targets).unwrap();

        assert_eq!(equations.xtx().shape(), (4, 4));
        assert_eq!(equations.xty().len(), 4);
        // the intercept column sums to the number of observations
        assert_eq!(equations.xtx()[(0, 0)], 6.0);
        assert_eq!(equations.xty()[0], 6.0);
    }

    #[test]
    fn wrong_number_of_columns() {
        if let Err(_) = pretty_env_logger::try_init() {}

        let design = DMatrix::from_element(5, 3, 1.0);
        let targets = DVector::from_element(5, 1.0);
        assert_eq!(
            OrdinaryLeastSquares.fit(&design, &targets),
            Err(RegressionError::DimensionMismatch {
                operation: "normal_equations",
                expected: 4,
                found: 3,
            })
        );
    }

    #[test]
    fn targets_do_not_match_design() {
        if let Err(_) = pretty_env_logger::try_init() {}

        let design = get_design();
        let targets = DVector::from_element(4, 1.0);
        assert!(matches!(
            OrdinaryLeastSquares.fit(&design, &targets),
            Err(RegressionError::DimensionMismatch { expected: 6, found: 4, .. })
        ));
    }

    #[test]
    fn too_few_observations() {
        if let Err(_) = pretty_env_logger::try_init() {}

        // three rows can not determine four coefficients
        let design = get_design().rows(0, 3).into_owned();
        let targets = DVector::from_element(3, 1.0);
        assert!(matches!(
            OrdinaryLeastSquares.fit(&design, &targets),
            Err(RegressionError::SingularMatrix { .. })
        ));
    }
}
