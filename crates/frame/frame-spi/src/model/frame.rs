//! Station-indexed time series table.
//!
//! Every row is keyed by a [`RowKey`] of (station, timestamp). Rows of
//! different stations may be interleaved, but within one station the
//! timestamps must be strictly increasing, so row order is chronological
//! order.

use super::column::{Column, ColumnData};
use crate::error::{FrameError, Result};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Composite row key
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RowKey {
    pub station: String,
    pub time: NaiveDateTime,
}

impl RowKey {
    pub fn new(station: impl Into<String>, time: NaiveDateTime) -> Self {
        Self {
            station: station.into(),
            time,
        }
    }
}

/// Table of typed columns sharing one (station, timestamp) index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesFrame {
    index: Vec<RowKey>,
    columns: Vec<Column>,
}

impl TimeSeriesFrame {
    /// Build a frame, validating column lengths, column names and the
    /// per-station time ordering.
    pub fn new(index: Vec<RowKey>, columns: Vec<Column>) -> Result<Self> {
        let mut names = HashSet::with_capacity(columns.len());
        for column in &columns {
            if !names.insert(column.name()) {
                return Err(FrameError::DuplicateColumn(column.name().to_string()));
            }
            if column.len() != index.len() {
                return Err(FrameError::LengthMismatch {
                    column: column.name().to_string(),
                    expected: index.len(),
                    actual: column.len(),
                });
            }
        }

        let mut last_seen: HashMap<&str, NaiveDateTime> = HashMap::new();
        for (row, key) in index.iter().enumerate() {
            if let Some(previous) = last_seen.insert(key.station.as_str(), key.time) {
                if key.time <= previous {
                    return Err(FrameError::UnorderedIndex {
                        station: key.station.clone(),
                        row,
                    });
                }
            }
        }

        Ok(Self { index, columns })
    }

    /// Convenience constructor for a single station with one float column
    pub fn from_series(
        station: &str,
        times: Vec<NaiveDateTime>,
        column: &str,
        values: Vec<f64>,
    ) -> Result<Self> {
        let index = times
            .into_iter()
            .map(|time| RowKey::new(station, time))
            .collect();
        Self::new(index, vec![Column::new(column, ColumnData::Float64(values))])
    }

    pub fn index(&self) -> &[RowKey] {
        &self.index
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name() == name)
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Distinct stations in order of first appearance
    pub fn stations(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.index
            .iter()
            .map(|key| key.station.as_str())
            .filter(|station| seen.insert(*station))
            .collect()
    }

    /// Row positions of `station`, in chronological order
    pub fn station_rows(&self, station: &str) -> Vec<usize> {
        self.index
            .iter()
            .enumerate()
            .filter(|(_, key)| key.station == station)
            .map(|(row, _)| row)
            .collect()
    }

    /// Values of a numeric column widened to `f64`
    pub fn column_f64(&self, name: &str) -> Result<Vec<f64>> {
        let column = self
            .column(name)
            .ok_or_else(|| FrameError::ColumnNotFound(name.to_string()))?;
        column
            .data()
            .to_f64()
            .ok_or_else(|| FrameError::NonNumericColumn {
                name: name.to_string(),
                dtype: column.dtype(),
            })
    }

    /// Bytes held by column storage (the index is not counted)
    pub fn memory_usage(&self) -> usize {
        self.columns.iter().map(|c| c.data().memory_usage()).sum()
    }

    /// Replace column storage in place.
    ///
    /// `f` is called once per column; a returned `ColumnData` replaces the
    /// column's values only when its length matches the index, otherwise
    /// the column is kept unchanged.
    pub fn retype_columns<F>(self, mut f: F) -> Self
    where
        F: FnMut(&Column) -> Option<ColumnData>,
    {
        let rows = self.index.len();
        let columns = self
            .columns
            .into_iter()
            .map(|column| match f(&column) {
                Some(data) if data.len() == rows => Column::new(column.name(), data),
                _ => column,
            })
            .collect();

        Self {
            index: self.index,
            columns,
        }
    }
}
