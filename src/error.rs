//! Error types for the regression engine.
//!
//! Exactly two failure categories exist: an input shape error detected
//! before any matrix work, and a numerical singularity detected at solve
//! time. Both `Display` messages are stable; callers behind a
//! request/response boundary map them to client-facing responses verbatim.

/// Errors that can occur while fitting a polynomial model.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FitError {
    /// The x and y samples have different lengths.
    ///
    /// Recoverable by re-submitting samples of matching length; never
    /// retried automatically.
    #[error("Length of x and y must match.")]
    LengthMismatch {
        /// Number of x observations.
        x_len: usize,
        /// Number of y observations.
        y_len: usize,
    },

    /// The Gram matrix XᵀX is not invertible.
    ///
    /// Most commonly caused by fewer distinct x-values than model
    /// parameters (e.g. repeated x-values with degree ≥ 1). Retrying with
    /// identical input fails identically; recover by supplying more
    /// distinct x-values or reducing the degree.
    #[error("Design matrix XᵀX is singular.")]
    SingularDesignMatrix,
}

/// Result type for the regression engine.
///
/// # Examples
///
/// ```
/// use polyreg::FitError;
///
/// assert_eq!(
///     FitError::SingularDesignMatrix.to_string(),
///     "Design matrix XᵀX is singular."
/// );
/// ```
pub type Result<T> = std::result::Result<T, FitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_stable() {
        let mismatch = FitError::LengthMismatch { x_len: 3, y_len: 2 };
        assert_eq!(mismatch.to_string(), "Length of x and y must match.");
        assert_eq!(
            FitError::SingularDesignMatrix.to_string(),
            "Design matrix XᵀX is singular."
        );
    }

    #[test]
    fn categories_are_distinct() {
        let mismatch = FitError::LengthMismatch { x_len: 3, y_len: 2 };
        assert_ne!(mismatch, FitError::SingularDesignMatrix);
    }
}
