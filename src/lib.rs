//! # polyreg
//!
//! Polynomial least-squares regression with goodness-of-fit and
//! statistical-significance diagnostics.
//!
//! The crate fits a polynomial of configurable degree to (x, y)
//! observations via the normal equations, then reports the coefficient
//! vector, correlation, R², and one of two significance analyses: an
//! omnibus F-test for the whole model, or a Wald t-test per coefficient.
//!
//! ## Modules
//!
//! - [`design`] — Polynomial (Vandermonde) design matrix construction
//! - [`solve`] — Normal-equations solver with singularity detection
//! - [`evaluate`] — Predictions, residuals, sum-of-squares decomposition
//! - [`significance`] — Omnibus F-test and per-coefficient Wald t-tests
//! - [`fit`] — The single-call engine combining all stages
//! - [`error`] — The two-category error taxonomy
//!
//! ## Design Philosophy
//!
//! - **Pure and stateless**: every fit is a single-shot computation over
//!   its own inputs; no caching, no shared state, safe to call
//!   concurrently without locking
//! - **Finite outputs**: degenerate statistics (zero variance, perfect
//!   fits) saturate or zero out instead of propagating NaN/Inf to a
//!   serialization boundary
//! - **Explicit failures**: a non-invertible Gram matrix is a distinct,
//!   stable error — never silently degraded to a pseudo-inverse solution
//!
//! ## Example
//!
//! ```
//! use polyreg::{fit_polynomial, Significance, SignificanceMethod};
//!
//! let x = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let y = [2.1, 3.9, 6.1, 7.9, 10.1];
//! let fit = fit_polynomial(&x, &y, 1, SignificanceMethod::Omnibus).unwrap();
//!
//! assert!((fit.coefficients[1] - 2.0).abs() < 0.1);
//! assert!(fit.r_squared > 0.99);
//! if let Significance::Omnibus(ft) = &fit.significance {
//!     assert!(ft.p_value < 0.01);
//! }
//! ```

pub mod design;
pub mod error;
pub mod evaluate;
pub mod fit;
pub mod significance;
pub mod solve;

pub use crate::error::{FitError, Result};
pub use crate::fit::{fit_polynomial, predict, PolynomialFit};
pub use crate::significance::{CoefficientTest, FTest, Significance, SignificanceMethod};
