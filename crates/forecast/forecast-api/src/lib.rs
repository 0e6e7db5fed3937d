//! Forecast Consumer API
//!
//! Consumer configurations and the experiment runner for station
//! forecasts.
//!
//! This crate provides:
//! - Configuration types for splitting, diagnostics and model choice
//! - A builder and JSON loading for experiment configurations
//! - [`run_experiment`], wiring splitter, rolling forecaster and evaluator
//! - Re-exports from SPI and core for convenience

pub mod config;
pub mod experiment;

pub use config::{ExperimentConfig, ExperimentConfigBuilder, SplitConfig};
pub use experiment::{run_experiment, ExperimentReport};

// Re-export from core
pub use forecast_core::{
    analyze_arima_params, diagnostics, evaluation, fitter, mae, mape, mse, rmse, rolling,
    rolling_forecast, AccuracyReport, ArimaDiagnostics, DiagnosticsConfig, NullDisplay,
    RollingForecaster, StatsModelFitter, TracingDisplay,
};

// Re-export from SPI
pub use forecast_spi::{
    Correlogram, CorrelogramDisplay, CorrelogramKind, ForecastError, ForecastRun, ModelFitter,
    ModelOrder, Result,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        run_experiment, ExperimentConfig, ExperimentConfigBuilder, ExperimentReport, SplitConfig,
    };
    pub use forecast_core::{
        analyze_arima_params, mape, rolling_forecast, AccuracyReport, DiagnosticsConfig,
        NullDisplay, RollingForecaster, StatsModelFitter, TracingDisplay,
    };
    pub use forecast_spi::{
        CorrelogramDisplay, ForecastError, ForecastRun, ModelFitter, ModelOrder, Result,
    };
}
