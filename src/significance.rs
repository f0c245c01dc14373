//! Model significance analysis.
//!
//! Two interchangeable analyses consume the fit evaluator's output: an
//! omnibus F-test for joint significance of all non-intercept
//! coefficients, and a per-coefficient Wald t-test with standard errors.
//! Both are pure, single-pass computations selected per fit by
//! [`SignificanceMethod`].

use nalgebra::{DMatrix, DVector};
use serde::Serialize;
use statrs::distribution::{ContinuousCDF, FisherSnedecor, StudentsT};

/// Selects which significance analysis a fit runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignificanceMethod {
    /// Omnibus F-test: one statistic and p-value for the whole model.
    #[default]
    Omnibus,
    /// Wald t-test per coefficient, with standard errors.
    PerCoefficient,
}

/// Outcome of the selected significance analysis.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Significance {
    /// Joint F-test over all non-intercept coefficients.
    Omnibus(FTest),
    /// One Wald test per model parameter, index-aligned with the
    /// coefficient vector.
    PerCoefficient(Vec<CoefficientTest>),
}

/// Omnibus F-test result.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FTest {
    /// F statistic, saturated to the finite range (see [`omnibus_f_test`]).
    pub f_stat: f64,
    /// Right-tail p-value.
    pub p_value: f64,
}

/// Wald test result for a single coefficient.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CoefficientTest {
    /// Estimated coefficient βⱼ.
    pub coefficient: f64,
    /// Standard error of βⱼ.
    pub std_error: f64,
    /// t statistic βⱼ / seⱼ.
    pub t_stat: f64,
    /// Two-sided p-value.
    pub p_value: f64,
}

// ---------------------------------------------------------------------------
// Omnibus F-test
// ---------------------------------------------------------------------------

/// Computes the omnibus F-test for overall model significance.
///
/// # Algorithm
///
/// df_regression = p − 1 (intercept excluded), df_residual = n − p,
/// F = ((SST − SSR) / df_regression) / (SSR / df_residual),
/// p = 1 − CDF_F(F; df_regression, df_residual).
///
/// An F of ±∞ (SSR → 0 on a perfect fit, or other degenerate divisions)
/// is saturated to `f64::MAX`/`f64::MIN` so the statistic stays
/// representable across a serialization boundary; the reported p-value is
/// then the CDF limit (0 and 1 respectively). The saturation slightly
/// distorts the truly infinite statistic.
///
/// `p ≥ 2` and `n > p` are preconditions owned by the caller; violating
/// them yields mathematically degenerate output, not an error.
///
/// # Examples
///
/// ```
/// use polyreg::significance::omnibus_f_test;
///
/// // Perfect fit: SSR = 0 saturates the statistic
/// let ft = omnibus_f_test(5, 2, 0.0, 40.0);
/// assert_eq!(ft.f_stat, f64::MAX);
/// assert_eq!(ft.p_value, 0.0);
/// ```
pub fn omnibus_f_test(n: usize, p: usize, ss_res: f64, ss_tot: f64) -> FTest {
    let df_regression = p as f64 - 1.0;
    let df_residual = n as f64 - p as f64;

    let ss_regression = ss_tot - ss_res;
    let ms_regression = ss_regression / df_regression;
    let ms_residual = ss_res / df_residual;
    let f_stat = ms_regression / ms_residual;

    let p_value = if f_stat == f64::INFINITY {
        0.0
    } else if f_stat == f64::NEG_INFINITY {
        1.0
    } else {
        FisherSnedecor::new(df_regression, df_residual)
            .map_or(f64::NAN, |d| 1.0 - d.cdf(f_stat))
    };

    FTest {
        f_stat: f_stat.clamp(f64::MIN, f64::MAX),
        p_value,
    }
}

// ---------------------------------------------------------------------------
// Per-coefficient Wald t-test
// ---------------------------------------------------------------------------

/// Computes per-coefficient Wald t-tests.
///
/// # Algorithm
///
/// df = n − p, σ² = SSR / df, Cov(β) = σ²·(XᵀX)⁻¹,
/// seⱼ = √Cov(β)[j,j], tⱼ = βⱼ / seⱼ,
/// pⱼ = 2·(1 − CDF_t(|tⱼ|; df)).
///
/// Output is ordered, index-aligned with the coefficient vector. A zero
/// standard error (exactly reproduced response) yields an infinite t and
/// a p-value of 0; otherwise `df > 0` and `σ² > 0` are preconditions
/// guaranteed by a successfully inverted Gram matrix on non-degenerate
/// data.
pub fn wald_tests(
    n: usize,
    p: usize,
    ss_res: f64,
    gram_inverse: &DMatrix<f64>,
    beta: &DVector<f64>,
) -> Vec<CoefficientTest> {
    let df = n as f64 - p as f64;
    let sigma_sq = ss_res / df;

    let t_dist = StudentsT::new(0.0, 1.0, df).ok();

    beta.iter()
        .enumerate()
        .map(|(j, &coefficient)| {
            let std_error = (sigma_sq * gram_inverse[(j, j)]).sqrt();
            let t_stat = if std_error > 1e-300 {
                coefficient / std_error
            } else {
                f64::INFINITY
            };
            let p_value = if t_stat.is_infinite() {
                0.0
            } else {
                t_dist
                    .as_ref()
                    .map_or(f64::NAN, |d| 2.0 * (1.0 - d.cdf(t_stat.abs())))
            };
            CoefficientTest {
                coefficient,
                std_error,
                t_stat,
                p_value,
            }
        })
        .collect()
}
