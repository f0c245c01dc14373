//! Polynomial regression engine.
//!
//! Runs the full pipeline — design matrix, normal equations, fit
//! evaluation, significance analysis — as one stateless computation per
//! call. Every invocation allocates its own matrices and touches no
//! shared state, so concurrent callers need no locking.
//!
//! # Examples
//!
//! ```
//! use polyreg::{fit_polynomial, SignificanceMethod};
//!
//! let x = [0.0, 1.0, 2.0, 3.0];
//! let y = [1.0, 3.0, 5.0, 7.0];
//! let fit = fit_polynomial(&x, &y, 1, SignificanceMethod::Omnibus).unwrap();
//! assert!((fit.coefficients[0] - 1.0).abs() < 1e-8);
//! assert!((fit.coefficients[1] - 2.0).abs() < 1e-8);
//! assert!((fit.r_squared - 1.0).abs() < 1e-9);
//! ```

use nalgebra::DVector;
use serde::Serialize;

use crate::design::vandermonde;
use crate::error::{FitError, Result};
use crate::evaluate::evaluate_fit;
use crate::significance::{omnibus_f_test, wald_tests, Significance, SignificanceMethod};
use crate::solve::solve_normal_equations;

/// Result of a single polynomial fit.
///
/// Created fresh per call and fully populated on success — there are no
/// partial results.
#[derive(Debug, Clone, Serialize)]
pub struct PolynomialFit {
    /// Coefficient vector of length degree + 1, increasing-power order
    /// (index 0 = intercept, index j = coefficient of xʲ).
    pub coefficients: Vec<f64>,
    /// Pearson correlation between observed and fitted y
    /// (0 when either series has zero variance).
    pub correlation_coefficient: f64,
    /// Coefficient of determination (0 for a constant response).
    pub r_squared: f64,
    /// Adjusted R² = 1 − (1 − R²)(n − 1)/(n − p); equals R² when n = p.
    pub adjusted_r_squared: f64,
    /// Residual standard error √(SSR/(n − p)); 0 when n = p.
    pub residual_se: f64,
    /// Fitted values ŷ.
    pub fitted: Vec<f64>,
    /// Residuals y − ŷ.
    pub residuals: Vec<f64>,
    /// Sum of squared residuals.
    pub ss_res: f64,
    /// Total sum of squares.
    pub ss_tot: f64,
    /// Sample size.
    pub n: usize,
    /// Outcome of the selected significance analysis.
    pub significance: Significance,
}

/// Fits a polynomial of the given degree to `(x, y)` by ordinary least
/// squares and runs the selected significance analysis.
///
/// The engine assumes finite input (NaN/Inf screening belongs to the
/// caller) and `degree ≥ 1` for the significance analyses to have
/// positive degrees of freedom; `degree = 0` fits an intercept-only
/// model, which is meaningful for the Wald variant only.
///
/// # Errors
///
/// * [`FitError::LengthMismatch`] when the samples differ in length,
///   detected before any matrix construction.
/// * [`FitError::SingularDesignMatrix`] when the Gram matrix cannot be
///   inverted (fewer than degree + 1 distinct x-values).
///
/// # Examples
///
/// ```
/// use polyreg::{fit_polynomial, Significance, SignificanceMethod};
///
/// let x = [0.0, 1.0, 2.0, 3.0, 4.0];
/// let y = [4.0, 1.0, 0.0, 1.0, 4.0]; // (x − 2)²
/// let fit = fit_polynomial(&x, &y, 2, SignificanceMethod::PerCoefficient).unwrap();
/// assert_eq!(fit.coefficients.len(), 3);
/// if let Significance::PerCoefficient(tests) = &fit.significance {
///     assert_eq!(tests.len(), 3);
/// }
/// ```
pub fn fit_polynomial(
    x: &[f64],
    y: &[f64],
    degree: usize,
    method: SignificanceMethod,
) -> Result<PolynomialFit> {
    let n = x.len();
    if y.len() != n {
        return Err(FitError::LengthMismatch {
            x_len: n,
            y_len: y.len(),
        });
    }

    let p = degree + 1;
    let design = vandermonde(x, p);
    let response = DVector::from_column_slice(y);

    let solved = solve_normal_equations(&design, &response)?;
    let evaluation = evaluate_fit(&design, &solved.beta, &response);

    let significance = match method {
        SignificanceMethod::Omnibus => {
            Significance::Omnibus(omnibus_f_test(n, p, evaluation.ss_res, evaluation.ss_tot))
        }
        SignificanceMethod::PerCoefficient => Significance::PerCoefficient(wald_tests(
            n,
            p,
            evaluation.ss_res,
            &solved.gram_inverse,
            &solved.beta,
        )),
    };

    let df_residual = n as f64 - p as f64;
    let (adjusted_r_squared, residual_se) = if df_residual > 0.0 {
        (
            1.0 - (1.0 - evaluation.r_squared) * (n as f64 - 1.0) / df_residual,
            (evaluation.ss_res / df_residual).sqrt(),
        )
    } else {
        (evaluation.r_squared, 0.0)
    };

    Ok(PolynomialFit {
        coefficients: solved.beta.as_slice().to_vec(),
        correlation_coefficient: evaluation.correlation,
        r_squared: evaluation.r_squared,
        adjusted_r_squared,
        residual_se,
        fitted: evaluation.fitted,
        residuals: evaluation.residuals,
        ss_res: evaluation.ss_res,
        ss_tot: evaluation.ss_tot,
        n,
        significance,
    })
}

/// Evaluates a fitted polynomial at new x values (Horner's scheme,
/// increasing-power coefficient order).
///
/// # Examples
///
/// ```
/// use polyreg::predict;
///
/// // y = 1 + 2x
/// assert_eq!(predict(&[1.0, 2.0], &[0.0, 4.0]), vec![1.0, 9.0]);
/// ```
pub fn predict(coefficients: &[f64], x: &[f64]) -> Vec<f64> {
    x.iter()
        .map(|&xi| coefficients.iter().rev().fold(0.0, |acc, &c| acc * xi + c))
        .collect()
}
