//! Algorithm Service Provider Interface
//!
//! Defines the estimator contract and error type shared by every
//! statistical collaborator in the workspace:
//!
//! - [`Predictor`]: fit-on-history, predict-ahead contract
//! - [`TsError`]: error type for estimation and statistical tests
//! - [`Result`]: convenient result type alias

pub mod contract;
pub mod error;

// Re-export all public items at crate root for convenience
pub use contract::Predictor;
pub use error::{Result, TsError};
