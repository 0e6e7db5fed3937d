//! Frame Optimizer
//!
//! Narrows numeric column storage without changing the values a model sees:
//!
//! - `float64` becomes `float32` when every value survives the round trip
//!   within [`FLOAT32_TOLERANCE`]
//! - `int64` becomes the narrowest of `int8`, `int16`, `int32` that holds
//!   the column's range
//!
//! Every other column passes through unchanged.

use frame_spi::{Column, ColumnData, DType, TimeSeriesFrame};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Absolute tolerance for the float64 -> float32 round trip
pub const FLOAT32_TOLERANCE: f64 = 5e-4;

/// Storage change of one column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnChange {
    pub name: String,
    pub from: DType,
    pub to: DType,
}

/// Summary of a downcast pass
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DowncastReport {
    /// Columns whose storage changed
    pub changes: Vec<ColumnChange>,
    pub bytes_before: usize,
    pub bytes_after: usize,
}

impl DowncastReport {
    pub fn bytes_saved(&self) -> usize {
        self.bytes_before.saturating_sub(self.bytes_after)
    }
}

/// Narrow every numeric column of `frame`
pub fn downcast_columns(frame: TimeSeriesFrame) -> TimeSeriesFrame {
    downcast_report(frame).0
}

/// Narrow every numeric column of `frame` and report what changed
pub fn downcast_report(frame: TimeSeriesFrame) -> (TimeSeriesFrame, DowncastReport) {
    let bytes_before = frame.memory_usage();
    let mut changes = Vec::new();

    let frame = frame.retype_columns(|column| {
        let narrowed = downcast_column(column)?;
        if narrowed.dtype() != column.dtype() {
            changes.push(ColumnChange {
                name: column.name().to_string(),
                from: column.dtype(),
                to: narrowed.dtype(),
            });
        }
        Some(narrowed)
    });

    let report = DowncastReport {
        changes,
        bytes_before,
        bytes_after: frame.memory_usage(),
    };

    debug!(
        columns = report.changes.len(),
        bytes_before = report.bytes_before,
        bytes_after = report.bytes_after,
        bytes_saved = report.bytes_saved(),
        "downcast frame columns"
    );

    (frame, report)
}

/// Narrowed storage for `column`, or `None` when it keeps its dtype
fn downcast_column(column: &Column) -> Option<ColumnData> {
    match column.data() {
        ColumnData::Float64(values) if fits_float32(values) => {
            Some(ColumnData::Float32(values.iter().map(|v| *v as f32).collect()))
        }
        ColumnData::Int64(values) => narrow_integers(values),
        _ => None,
    }
}

fn fits_float32(values: &[f64]) -> bool {
    values.iter().all(|&value| {
        let narrowed = value as f32 as f64;
        if value.is_nan() {
            narrowed.is_nan()
        } else if value.is_infinite() {
            narrowed == value
        } else {
            narrowed.is_finite() && (narrowed - value).abs() <= FLOAT32_TOLERANCE
        }
    })
}

fn narrow_integers(values: &[i64]) -> Option<ColumnData> {
    let min = values.iter().copied().min().unwrap_or(0);
    let max = values.iter().copied().max().unwrap_or(0);

    if min >= i8::MIN as i64 && max <= i8::MAX as i64 {
        Some(ColumnData::Int8(values.iter().map(|v| *v as i8).collect()))
    } else if min >= i16::MIN as i64 && max <= i16::MAX as i64 {
        Some(ColumnData::Int16(values.iter().map(|v| *v as i16).collect()))
    } else if min >= i32::MIN as i64 && max <= i32::MAX as i64 {
        Some(ColumnData::Int32(values.iter().map(|v| *v as i32).collect()))
    } else {
        None
    }
}
