//! Algorithm Core Implementations
//!
//! Statistical collaborators used by the forecasting pipeline:
//!
//! - [`regression`]: ARIMA(p, d, q)
//! - [`smoothing`]: simple exponential smoothing
//! - [`stationarity`]: Augmented Dickey-Fuller unit-root test
//! - [`correlation`]: ACF / PACF for order inspection
//! - [`utils`]: differencing and linear detrending
//!
//! ## Example
//!
//! ```rust
//! use algorithm_core::prelude::*;
//!
//! let data: Vec<f64> = (1..=20).map(|x| x as f64).collect();
//! let mut model = Arima::new(1, 1, 0).unwrap();
//! model.fit(&data).unwrap();
//! let forecast = model.predict(1).unwrap();
//! assert_eq!(forecast.len(), 1);
//! ```

pub mod correlation;
pub mod regression;
pub mod smoothing;
pub mod stationarity;
pub mod utils;

// Re-export from SPI
pub use algorithm_spi::{Predictor, Result, TsError};

// Re-export implementations for convenience
pub use regression::*;
pub use smoothing::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use algorithm_spi::Predictor;
    pub use crate::regression::Arima;
    pub use crate::smoothing::SimpleExponentialSmoothing;
    pub use crate::stationarity::{adf_test, AdfOptions, AdfResult};
    pub use crate::correlation::{acf, pacf};
    pub use algorithm_spi::{Result, TsError};
}
