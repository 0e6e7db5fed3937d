//! Frame Service Provider Interface
//!
//! Defines the station-indexed table consumed by the optimizer and the
//! dataset splitter:
//!
//! - [`TimeSeriesFrame`]: rows keyed by (station, timestamp), typed columns
//! - [`ColumnData`] / [`DType`]: column storage and its width
//! - [`Split`]: chronological train/test sequences of one station
//! - [`FrameError`]: error type for table operations

pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use error::{FrameError, Result};
pub use model::{Column, ColumnData, DType, RowKey, Split, TimeSeriesFrame};
