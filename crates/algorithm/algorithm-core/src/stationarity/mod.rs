//! Unit-root and stationarity tests

mod adf;
mod mackinnon;

pub use adf::{adf_test, AdfOptions, AdfResult, CriticalValues};
pub use mackinnon::{mackinnon_critical_values, mackinnon_p_value};
