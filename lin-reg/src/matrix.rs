//! Dense matrix primitives with explicit shape checks.
//! nalgebra panics on mismatched shapes, these return an error instead.

use nalgebra::{DMatrix, DVector};

use crate::{RegressionError, Result};

/// The `c x r` transpose of an `r x c` matrix, as a new matrix
#[inline]
pub fn transpose(m: &DMatrix<f64>) -> DMatrix<f64> {
    m.transpose()
}

/// The matrix product `a * b`
pub fn multiply(a: &DMatrix<f64>, b: &DMatrix<f64>) -> Result<DMatrix<f64>> {
    check_inner_dims("multiply", a.ncols(), b.nrows())?;
    Ok(a * b)
}

/// The product of a matrix and a column vector
pub fn multiply_vector(a: &DMatrix<f64>, v: &DVector<f64>) -> Result<DVector<f64>> {
    check_inner_dims("multiply_vector", a.ncols(), v.len())?;
    Ok(a * v)
}

#[inline(always)]
fn check_inner_dims(operation: &'static str, expected: usize, found: usize) -> Result<()> {
    if expected != found {
        return Err(RegressionError::DimensionMismatch {
            operation,
            expected,
            found,
        });
    }
    Ok(())
}
