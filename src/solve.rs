//! Normal-equations least-squares solver.
//!
//! Solves `XᵀXβ = Xᵀy` by direct inversion of the Gram matrix. A Gram
//! matrix that cannot be inverted is surfaced as
//! [`FitError::SingularDesignMatrix`] rather than silently degraded to a
//! pseudo-inverse solution.

use nalgebra::{DMatrix, DVector};

use crate::error::{FitError, Result};

/// Solved least-squares system.
#[derive(Debug, Clone)]
pub struct LeastSquares {
    /// Coefficient vector β in increasing-power order (index 0 = intercept).
    pub beta: DVector<f64>,
    /// Inverse Gram matrix (XᵀX)⁻¹, retained for coefficient covariance.
    pub gram_inverse: DMatrix<f64>,
}

/// Solves `β = (XᵀX)⁻¹ Xᵀy` for the design matrix `x` (n×p) and response
/// vector `y` (length n).
///
/// # Algorithm
///
/// Forms the p×p Gram matrix `XᵀX` (symmetric positive-definite when X has
/// full column rank) and inverts it directly.
///
/// Assumes finite input; NaN/Inf screening is owned by the caller.
///
/// # Errors
///
/// [`FitError::SingularDesignMatrix`] when the Gram matrix is not
/// invertible — any linear dependency among the polynomial columns, most
/// commonly fewer than p distinct x-values.
///
/// # Examples
///
/// ```
/// use nalgebra::DVector;
/// use polyreg::design::vandermonde;
/// use polyreg::solve::solve_normal_equations;
///
/// // y = 2 + 3x on x = [0, 1, 2]
/// let x = vandermonde(&[0.0, 1.0, 2.0], 2);
/// let y = DVector::from_column_slice(&[2.0, 5.0, 8.0]);
/// let ls = solve_normal_equations(&x, &y).unwrap();
/// assert!((ls.beta[0] - 2.0).abs() < 1e-9);
/// assert!((ls.beta[1] - 3.0).abs() < 1e-9);
/// ```
pub fn solve_normal_equations(x: &DMatrix<f64>, y: &DVector<f64>) -> Result<LeastSquares> {
    let xt = x.transpose();
    let gram = &xt * x;
    let gram_inverse = gram.try_inverse().ok_or(FitError::SingularDesignMatrix)?;
    let beta = &gram_inverse * (xt * y);
    Ok(LeastSquares { beta, gram_inverse })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::vandermonde;

    #[test]
    fn recovers_line() {
        let x = vandermonde(&[0.0, 1.0, 2.0, 3.0], 2);
        let y = DVector::from_column_slice(&[1.0, 3.0, 5.0, 7.0]); // y = 1 + 2x
        let ls = solve_normal_equations(&x, &y).expect("should solve");
        assert!((ls.beta[0] - 1.0).abs() < 1e-10, "β₀ = {}", ls.beta[0]);
        assert!((ls.beta[1] - 2.0).abs() < 1e-10, "β₁ = {}", ls.beta[1]);
    }

    #[test]
    fn coefficient_count_matches_parameters() {
        let x = vandermonde(&[0.0, 1.0, 2.0, 3.0, 4.0], 3);
        let y = DVector::from_column_slice(&[4.0, 1.0, 0.0, 1.0, 4.0]);
        let ls = solve_normal_equations(&x, &y).expect("should solve");
        assert_eq!(ls.beta.len(), 3);
        assert_eq!((ls.gram_inverse.nrows(), ls.gram_inverse.ncols()), (3, 3));
    }

    #[test]
    fn repeated_x_is_singular() {
        // No distinct x-values: the linear column duplicates the intercept
        let x = vandermonde(&[1.0, 1.0, 1.0], 2);
        let y = DVector::from_column_slice(&[1.0, 2.0, 3.0]);
        assert_eq!(
            solve_normal_equations(&x, &y).unwrap_err(),
            FitError::SingularDesignMatrix
        );
    }

    #[test]
    fn too_few_distinct_x_is_singular() {
        // Two distinct x-values cannot identify three parameters
        let x = vandermonde(&[1.0, 2.0, 1.0, 2.0], 3);
        let y = DVector::from_column_slice(&[1.0, 2.0, 1.1, 2.1]);
        assert_eq!(
            solve_normal_equations(&x, &y).unwrap_err(),
            FitError::SingularDesignMatrix
        );
    }

    #[test]
    fn gram_inverse_is_inverse() {
        let x = vandermonde(&[0.0, 1.0, 2.0, 3.0, 4.0], 2);
        let y = DVector::from_column_slice(&[1.1, 2.9, 5.2, 6.8, 9.1]);
        let ls = solve_normal_equations(&x, &y).expect("should solve");

        let gram = x.transpose() * &x;
        let product = &gram * &ls.gram_inverse;
        for i in 0..2 {
            for j in 0..2 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!(
                    (product[(i, j)] - expected).abs() < 1e-10,
                    "(XᵀX)(XᵀX)⁻¹[{i},{j}] = {}",
                    product[(i, j)]
                );
            }
        }
    }

    #[test]
    fn square_system_interpolates() {
        // n = p: the polynomial passes through every point
        let x = vandermonde(&[0.0, 1.0, 2.0], 3);
        let y = DVector::from_column_slice(&[1.0, 0.0, 3.0]);
        let ls = solve_normal_equations(&x, &y).expect("should solve");
        let fitted = &x * &ls.beta;
        for i in 0..3 {
            assert!((fitted[i] - y[i]).abs() < 1e-8, "ŷ[{i}] = {}", fitted[i]);
        }
    }
}
