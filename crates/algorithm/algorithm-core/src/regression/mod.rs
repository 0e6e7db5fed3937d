//! Regression-based models for time series forecasting
//!
//! - **ARIMA**: AutoRegressive Integrated Moving Average

pub mod arima;

pub use arima::Arima;
