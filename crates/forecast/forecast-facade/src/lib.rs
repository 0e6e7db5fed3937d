//! Forecast Facade
//!
//! High-level API for station traffic forecasting. Re-exports all public
//! types from the forecast stack, plus the frame and estimator facades it
//! builds on.
//!
//! # Example
//!
//! ```rust
//! use forecast_facade::prelude::*;
//!
//! let fitter = StatsModelFitter::new();
//! let run = rolling_forecast(
//!     &fitter,
//!     &ModelOrder::arima(1, 0, 1),
//!     &[100.0, 102.0, 98.0, 101.0],
//!     &[99.0, 103.0],
//! )
//! .unwrap();
//!
//! assert_eq!(run.predictions().len(), 2);
//! assert_eq!(run.history(), &[100.0, 102.0, 98.0, 101.0, 99.0, 103.0]);
//! ```

// Re-export everything from API (which includes SPI and core)
pub use forecast_api::*;

// Re-export SPI contracts and models
pub use forecast_spi::{
    Correlogram, CorrelogramDisplay, CorrelogramKind, ForecastError, ForecastRun, ModelFitter,
    ModelOrder, Result,
};

// Explicit re-exports for documentation
pub use forecast_api::prelude;

// Re-export core modules for direct access
pub use forecast_core::{diagnostics, evaluation, fitter, rolling};

// Lower layers
pub use algorithm_facade as algorithm;
pub use frame_facade as frame;
