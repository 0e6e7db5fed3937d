//! Time series error types

use thiserror::Error;

/// Result type alias for estimation operations
pub type Result<T> = std::result::Result<T, TsError>;

/// Errors raised by estimators and statistical tests
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TsError {
    /// Insufficient data points for the operation
    #[error("Insufficient data: need at least {required} points, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Invalid parameter value
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Model has not been fitted yet
    #[error("Model must be fitted before prediction")]
    NotFitted,

    /// Numerical computation error (singular design matrix, degenerate variance)
    #[error("Numerical error: {0}")]
    NumericalError(String),

    /// Input values the estimator cannot use (NaN, infinite)
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl TsError {
    /// Shorthand for [`TsError::InvalidParameter`]
    pub fn invalid_parameter(name: &str, reason: impl Into<String>) -> Self {
        TsError::InvalidParameter {
            name: name.to_string(),
            reason: reason.into(),
        }
    }

    /// Reject series containing NaN or infinite values
    pub fn check_finite(data: &[f64]) -> Result<()> {
        match data.iter().position(|x| !x.is_finite()) {
            Some(idx) => Err(TsError::InvalidData(format!(
                "non-finite value {} at position {}",
                data[idx], idx
            ))),
            None => Ok(()),
        }
    }
}
