//! Table model types

mod column;
mod frame;
mod split;

pub use column::{Column, ColumnData, DType};
pub use frame::{RowKey, TimeSeriesFrame};
pub use split::Split;
