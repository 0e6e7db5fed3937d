//! Error types for estimation operations
//!
//! This module provides the [`TsError`] enum and [`Result`] type alias
//! used by estimators and statistical tests.

mod ts_error;

pub use ts_error::{Result, TsError};
