//! Forecast Core
//!
//! Core implementations of the rolling forecast workflow: walk-forward
//! forecasting, accuracy metrics, stationarity and correlogram diagnostics,
//! and the default model fitter.

pub mod diagnostics;
pub mod evaluation;
pub mod fitter;
pub mod rolling;

// Re-export SPI types for implementations
pub use forecast_spi::{
    Correlogram, CorrelogramDisplay, CorrelogramKind, ForecastError, ForecastRun, ModelFitter,
    ModelOrder, Result,
};

// Re-export main types
pub use diagnostics::{
    analyze_arima_params, ArimaDiagnostics, DiagnosticsConfig, NullDisplay, TracingDisplay,
};
pub use evaluation::{mae, mape, mse, rmse, AccuracyReport};
pub use fitter::StatsModelFitter;
pub use rolling::{rolling_forecast, RollingForecaster};
