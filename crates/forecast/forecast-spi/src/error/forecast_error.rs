//! Forecast error types

use algorithm_spi::TsError;
use frame_spi::FrameError;
use thiserror::Error;

/// Errors that can occur in the forecasting workflow
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// Truth and prediction sequences differ in length
    #[error("Shape mismatch: {truth} true values vs {predicted} predictions")]
    Shape { truth: usize, predicted: usize },

    /// A true value of zero makes the percentage error undefined
    #[error("Division by zero: true value at position {index} is 0")]
    Division { index: usize },

    /// Fitting or one-step prediction failed inside the rolling loop
    #[error("Model fitting failed at iteration {iteration}: {source}")]
    Fitting {
        iteration: usize,
        #[source]
        source: TsError,
    },

    /// Not enough points for the operation
    #[error("Insufficient data: need at least {required} points, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Stationarity test or correlogram failed
    #[error("Diagnostics failed: {0}")]
    Diagnostics(#[source] TsError),

    /// Table lookup or split failed
    #[error(transparent)]
    Frame(#[from] FrameError),

    /// Invalid experiment configuration
    #[error("Invalid configuration: {0}")]
    Config(String),
}
