use nalgebra::{DMatrix, DVector};

use crate::{RegressionError, Result};

/// Solve `a * x = b` by Gaussian elimination with partial pivoting.
///
/// Works on copies, the inputs are left untouched.
/// Sized for the small, well conditioned systems of the normal equations,
/// not a general purpose solver.
///
/// # Errors
/// `DimensionMismatch` if `a` is not square or `b` does not match it,
/// `SingularMatrix` if a pivot vanishes or the solution is not finite.
pub fn solve(a: &DMatrix<f64>, b: &DVector<f64>) -> Result<DVector<f64>> {
    let n = a.nrows();
    if a.ncols() != n {
        return Err(RegressionError::DimensionMismatch {
            operation: "solve",
            expected: n,
            found: a.ncols(),
        });
    }
    if b.len() != n {
        return Err(RegressionError::DimensionMismatch {
            operation: "solve",
            expected: n,
            found: b.len(),
        });
    }

    let mut a = a.clone();
    let mut b = b.clone();

    // pivots are judged relative to the largest entry
    let tolerance = f64::EPSILON * n as f64 * a.amax();

    for i in 0..n {
        let pivot_row = (i + 1..n).fold(i, |best, j| {
            if a[(j, i)].abs() > a[(best, i)].abs() {
                j
            } else {
                best
            }
        });
        if a[(pivot_row, i)].abs() <= tolerance {
            return Err(RegressionError::SingularMatrix { column: i });
        }
        if pivot_row != i {
            debug!("column {}: swapping rows {} and {}", i, i, pivot_row);
            a.swap_rows(i, pivot_row);
            b.swap_rows(i, pivot_row);
        }

        let pivot = a[(i, i)];
        for j in i + 1..n {
            let factor = a[(j, i)] / pivot;
            let b_i = b[i];
            b[j] -= factor * b_i;
            for k in i..n {
                let a_ik = a[(i, k)];
                a[(j, k)] -= factor * a_ik;
            }
        }
    }

    let mut x = DVector::zeros(n);
    for i in (0..n).rev() {
        let sum: f64 = (i + 1..n).map(|j| a[(i, j)] * x[j]).sum();
        x[i] = (b[i] - sum) / a[(i, i)];
    }

    if let Some(column) = x.iter().position(|v| !v.is_finite()) {
        return Err(RegressionError::SingularMatrix { column });
    }

    Ok(x)
}

#[cfg(test)]
mod tests {
    use nanorand::{Rng, WyRand};
    use round::round;

    use super::*;

    #[test]
    fn solve_2x2() {
        if let Err(_) = pretty_env_logger::try_init() {}

        let a = DMatrix::from_row_slice(2, 2, &[2.0, 1.0, 1.0, 3.0]);
        let b = DVector::from_vec(vec![3.0, 5.0]);
        let mut x = solve(&a, &b).unwrap();
        info!("x: {}", x);

        x.iter_mut().for_each(|v| *v = round(*v, 6));
        assert_eq!(x, DVector::from_vec(vec![0.8, 1.4]));
    }

    #[test]
    fn solve_needs_pivoting() {
        if let Err(_) = pretty_env_logger::try_init() {}

        // zero in the top left corner, naive elimination would divide by zero
        let a = DMatrix::from_row_slice(3, 3, &[0.0, 2.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 0.0]);
        let b = DVector::from_vec(vec![5.0, 4.0, 4.0]);
        let mut x = solve(&a, &b).unwrap();

        x.iter_mut().for_each(|v| *v = round(*v, 6));
        assert_eq!(x, DVector::from_vec(vec![1.0, 2.0, 1.0]));
    }

    #[test]
    fn solve_leaves_inputs_untouched() {
        if let Err(_) = pretty_env_logger::try_init() {}

        let a = DMatrix::from_row_slice(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let b = DVector::from_vec(vec![1.0, 1.0]);
        let (a_before, b_before) = (a.clone(), b.clone());

        solve(&a, &b).unwrap();

        assert_eq!(a, a_before);
        assert_eq!(b, b_before);
    }

    #[test]
    fn solution_satisfies_system() {
        if let Err(_) = pretty_env_logger::try_init() {}

        let mut rng = WyRand::new_seed(0);
        for _ in 0..100 {
            // diagonally dominant, hence well conditioned
            let a = DMatrix::from_fn(4, 4, |i, j| {
                let v = rng.generate::<f64>() * 2.0 - 1.0;
                if i == j {
                    v + 10.0
                } else {
                    v
                }
            });
            let b = DVector::from_fn(4, |_, _| rng.generate::<f64>() * 20.0 - 10.0);

            let x = solve(&a, &b).unwrap();
            let residual = &a * &x - &b;
            assert!(residual.amax() < 1e-9, "residual too large: {}", residual);
        }
    }

    #[test]
    fn singular() {
        if let Err(_) = pretty_env_logger::try_init() {}

        let a = DMatrix::from_row_slice(2, 2, &[1.0, 2.0, 2.0, 4.0]);
        let b = DVector::from_vec(vec![1.0, 2.0]);
        assert_eq!(solve(&a, &b), Err(RegressionError::SingularMatrix { column: 1 }));

        let zeros = DMatrix::zeros(4, 4);
        let b = DVector::zeros(4);
        assert_eq!(solve(&zeros, &b), Err(RegressionError::SingularMatrix { column: 0 }));
    }

    #[test]
    fn not_square() {
        if let Err(_) = pretty_env_logger::try_init() {}

        let a = DMatrix::from_element(2, 3, 1.0);
        let b = DVector::from_element(2, 1.0);
        assert!(matches!(solve(&a, &b), Err(RegressionError::DimensionMismatch { .. })));

        let a = DMatrix::identity(3, 3);
        assert!(matches!(
            solve(&a, &b),
            Err(RegressionError::DimensionMismatch { expected: 3, found: 2, .. })
        ));
    }
}
