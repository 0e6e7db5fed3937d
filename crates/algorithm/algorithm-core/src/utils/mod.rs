//! Utility functions for time series preparation

pub mod preprocessing;
