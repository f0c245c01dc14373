//! Polynomial design matrix construction.

use nalgebra::DMatrix;

/// Builds the n×p polynomial (Vandermonde) design matrix for the sample
/// `x`, with columns in increasing-power order: column `j` holds `xᵢʲ`,
/// so column 0 is the all-ones intercept term.
///
/// Coefficient index `j` of any model solved against this matrix is
/// therefore the coefficient of `xʲ`.
///
/// Any real `x` is valid; `p ≥ 1` is a precondition owned by the caller
/// (degree validation lives outside the engine).
///
/// # Examples
///
/// ```
/// use polyreg::design::vandermonde;
///
/// let m = vandermonde(&[2.0, 3.0], 3);
/// assert_eq!(m.nrows(), 2);
/// assert_eq!(m[(0, 0)], 1.0);
/// assert_eq!(m[(0, 1)], 2.0);
/// assert_eq!(m[(0, 2)], 4.0);
/// ```
pub fn vandermonde(x: &[f64], p: usize) -> DMatrix<f64> {
    DMatrix::from_fn(x.len(), p, |i, j| x[i].powi(j as i32))
}
