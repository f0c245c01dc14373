//! Fit evaluation: predictions, residuals, and goodness-of-fit.

use nalgebra::{DMatrix, DVector};

/// Goodness-of-fit summary derived from a solved model.
#[derive(Debug, Clone)]
pub struct FitEvaluation {
    /// Fitted values ŷ = Xβ.
    pub fitted: Vec<f64>,
    /// Residuals yᵢ − ŷᵢ.
    pub residuals: Vec<f64>,
    /// Sum of squared residuals Σeᵢ².
    pub ss_res: f64,
    /// Total sum of squares Σ(yᵢ − ȳ)².
    pub ss_tot: f64,
    /// Pearson correlation between observed and fitted y.
    pub correlation: f64,
    /// Coefficient of determination (R²).
    pub r_squared: f64,
}

/// Evaluates a solved model against the observed response.
///
/// # Algorithm
///
/// ŷ = Xβ, e = y − ŷ, SSR = Σe², SST = Σ(y − ȳ)²,
/// r = Pearson(y, ŷ), R² = 1 − SSR/SST.
///
/// Degenerate cases stay finite instead of propagating NaN/Inf: the
/// correlation is 0 when either series has zero variance, and R² is 0
/// when SST = 0 (constant response).
///
/// Purely arithmetic; no failure modes given valid finite inputs.
///
/// # Examples
///
/// ```
/// use nalgebra::DVector;
/// use polyreg::design::vandermonde;
/// use polyreg::evaluate::evaluate_fit;
///
/// let x = vandermonde(&[0.0, 1.0, 2.0, 3.0], 2);
/// let y = DVector::from_column_slice(&[1.0, 3.0, 5.0, 7.0]);
/// let beta = DVector::from_column_slice(&[1.0, 2.0]); // y = 1 + 2x exactly
/// let ev = evaluate_fit(&x, &beta, &y);
/// assert_eq!(ev.ss_res, 0.0);
/// assert_eq!(ev.r_squared, 1.0);
/// assert!((ev.correlation - 1.0).abs() < 1e-10);
/// ```
pub fn evaluate_fit(x: &DMatrix<f64>, beta: &DVector<f64>, y: &DVector<f64>) -> FitEvaluation {
    let fitted = x * beta;
    let residuals = y - &fitted;

    let ss_res: f64 = residuals.iter().map(|e| e * e).sum();

    let y_mean = y.iter().sum::<f64>() / y.len() as f64;
    let ss_tot: f64 = y.iter().map(|&yi| (yi - y_mean).powi(2)).sum();

    let correlation = pearson(y.as_slice(), fitted.as_slice());

    let r_squared = if ss_tot > 0.0 { 1.0 - ss_res / ss_tot } else { 0.0 };

    FitEvaluation {
        fitted: fitted.as_slice().to_vec(),
        residuals: residuals.as_slice().to_vec(),
        ss_res,
        ss_tot,
        correlation,
        r_squared,
    }
}

/// Pearson correlation with an explicit zero-variance guard: 0.0 when
/// either series is constant, clamped to [-1, 1] against fp drift.
fn pearson(a: &[f64], b: &[f64]) -> f64 {
    let n = a.len() as f64;
    let mean_a = a.iter().sum::<f64>() / n;
    let mean_b = b.iter().sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_a = 0.0;
    let mut var_b = 0.0;
    for (&ai, &bi) in a.iter().zip(b.iter()) {
        let da = ai - mean_a;
        let db = bi - mean_b;
        cov += da * db;
        var_a += da * da;
        var_b += db * db;
    }

    if var_a < 1e-300 || var_b < 1e-300 {
        return 0.0;
    }

    (cov / (var_a.sqrt() * var_b.sqrt())).clamp(-1.0, 1.0)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::design::vandermonde;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn fitted_plus_residual_reconstructs_y(
            data in proptest::collection::vec(-1e3_f64..1e3, 3..=30)
                .prop_flat_map(|x| {
                    let n = x.len();
                    (Just(x), proptest::collection::vec(-1e3_f64..1e3, n..=n))
                }),
            b0 in -10.0_f64..10.0,
            b1 in -10.0_f64..10.0,
        ) {
            let (x, y) = data;
            let design = vandermonde(&x, 2);
            let response = DVector::from_column_slice(&y);
            let beta = DVector::from_column_slice(&[b0, b1]);
            let ev = evaluate_fit(&design, &beta, &response);

            for i in 0..y.len() {
                prop_assert!((ev.fitted[i] + ev.residuals[i] - y[i]).abs() < 1e-6,
                    "ŷ + e ≠ y at {i}");
            }
        }

        #[test]
        fn correlation_bounded(
            data in proptest::collection::vec(-1e3_f64..1e3, 3..=30)
                .prop_flat_map(|x| {
                    let n = x.len();
                    (Just(x), proptest::collection::vec(-1e3_f64..1e3, n..=n))
                }),
        ) {
            let (x, y) = data;
            let design = vandermonde(&x, 2);
            let response = DVector::from_column_slice(&y);
            let beta = DVector::from_column_slice(&[1.0, 1.0]);
            let ev = evaluate_fit(&design, &beta, &response);

            prop_assert!((-1.0..=1.0).contains(&ev.correlation),
                "r = {}", ev.correlation);
        }
    }
}
