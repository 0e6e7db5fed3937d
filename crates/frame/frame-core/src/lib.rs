//! Frame Core - table preparation for station forecasting
//!
//! - [`optimizer`]: narrow numeric column storage
//! - [`splitter`]: cut one station's series into train/test at a timestamp

pub mod optimizer;
pub mod splitter;

pub use frame_spi::{
    Column, ColumnData, DType, FrameError, Result, RowKey, Split, TimeSeriesFrame,
};
pub use optimizer::{downcast_columns, downcast_report, ColumnChange, DowncastReport};
pub use splitter::{
    generate_train_test, generate_train_test_with, parse_cutoff, SplitOptions,
    DEFAULT_VALUE_COLUMN,
};
