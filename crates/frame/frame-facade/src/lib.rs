//! Frame Facade
//!
//! Single entry point for building, narrowing and splitting station frames.
//!
//! # Example
//!
//! ```rust
//! use frame_facade::prelude::*;
//!
//! let times: Vec<_> = (1..=4)
//!     .map(|h| parse_cutoff(&format!("2021-03-01 0{}:00:00", h)).unwrap())
//!     .collect();
//! let frame = TimeSeriesFrame::from_series("A", times, "traffic", vec![10.0, 12.0, 14.0, 30.0])
//!     .unwrap();
//!
//! let frame = downcast_columns(frame);
//! let cutoff = parse_cutoff("2021-03-01 02:30:00").unwrap();
//! let split = generate_train_test(&frame, "A", cutoff, true).unwrap();
//! assert_eq!(split.train, vec![10.0, 12.0]);
//! assert_eq!(split.test, vec![14.0, 30.0]);
//! ```

pub use frame_core::*;
pub use frame_core::{optimizer, splitter};

/// Prelude for convenient imports
pub mod prelude {
    pub use frame_core::{
        downcast_columns, downcast_report, generate_train_test, generate_train_test_with,
        parse_cutoff, SplitOptions,
    };
    pub use frame_spi::{
        Column, ColumnData, DType, FrameError, RowKey, Split, TimeSeriesFrame,
    };
}
