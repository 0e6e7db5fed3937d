//! Smoothing models for time series forecasting
//!
//! - **Simple Exponential Smoothing**: level-only smoothing with fixed or
//!   grid-searched alpha

pub mod exponential;

pub use exponential::SimpleExponentialSmoothing;
