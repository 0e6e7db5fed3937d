//! Column storage types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Storage kind of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DType {
    Float64,
    Float32,
    Int64,
    Int32,
    Int16,
    Int8,
    Boolean,
    Text,
}

impl DType {
    /// Bytes per value; `None` for variable-width text
    pub fn byte_width(&self) -> Option<usize> {
        match self {
            DType::Float64 | DType::Int64 => Some(8),
            DType::Float32 | DType::Int32 => Some(4),
            DType::Int16 => Some(2),
            DType::Int8 | DType::Boolean => Some(1),
            DType::Text => None,
        }
    }

    /// Whether values widen losslessly to `f64` for modelling
    pub fn is_numeric(&self) -> bool {
        !matches!(self, DType::Boolean | DType::Text)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DType::Float64 => "float64",
            DType::Float32 => "float32",
            DType::Int64 => "int64",
            DType::Int32 => "int32",
            DType::Int16 => "int16",
            DType::Int8 => "int8",
            DType::Boolean => "bool",
            DType::Text => "text",
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Typed column values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "dtype", content = "values", rename_all = "lowercase")]
pub enum ColumnData {
    Float64(Vec<f64>),
    Float32(Vec<f32>),
    Int64(Vec<i64>),
    Int32(Vec<i32>),
    Int16(Vec<i16>),
    Int8(Vec<i8>),
    Boolean(Vec<bool>),
    Text(Vec<String>),
}

impl ColumnData {
    pub fn dtype(&self) -> DType {
        match self {
            ColumnData::Float64(_) => DType::Float64,
            ColumnData::Float32(_) => DType::Float32,
            ColumnData::Int64(_) => DType::Int64,
            ColumnData::Int32(_) => DType::Int32,
            ColumnData::Int16(_) => DType::Int16,
            ColumnData::Int8(_) => DType::Int8,
            ColumnData::Boolean(_) => DType::Boolean,
            ColumnData::Text(_) => DType::Text,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ColumnData::Float64(v) => v.len(),
            ColumnData::Float32(v) => v.len(),
            ColumnData::Int64(v) => v.len(),
            ColumnData::Int32(v) => v.len(),
            ColumnData::Int16(v) => v.len(),
            ColumnData::Int8(v) => v.len(),
            ColumnData::Boolean(v) => v.len(),
            ColumnData::Text(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Value at `row` widened to `f64`; `None` for non-numeric columns or
    /// an out-of-range row
    pub fn value_f64(&self, row: usize) -> Option<f64> {
        match self {
            ColumnData::Float64(v) => v.get(row).copied(),
            ColumnData::Float32(v) => v.get(row).map(|x| *x as f64),
            ColumnData::Int64(v) => v.get(row).map(|x| *x as f64),
            ColumnData::Int32(v) => v.get(row).map(|x| *x as f64),
            ColumnData::Int16(v) => v.get(row).map(|x| *x as f64),
            ColumnData::Int8(v) => v.get(row).map(|x| *x as f64),
            ColumnData::Boolean(_) | ColumnData::Text(_) => None,
        }
    }

    /// All values widened to `f64`; `None` for non-numeric columns
    pub fn to_f64(&self) -> Option<Vec<f64>> {
        if !self.dtype().is_numeric() {
            return None;
        }
        (0..self.len()).map(|row| self.value_f64(row)).collect()
    }

    /// Storage footprint in bytes (text counts its UTF-8 bytes)
    pub fn memory_usage(&self) -> usize {
        match self {
            ColumnData::Text(v) => v.iter().map(String::len).sum(),
            other => other.dtype().byte_width().unwrap_or(0) * other.len(),
        }
    }
}

/// Named column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    name: String,
    data: ColumnData,
}

impl Column {
    pub fn new(name: impl Into<String>, data: ColumnData) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data(&self) -> &ColumnData {
        &self.data
    }

    pub fn dtype(&self) -> DType {
        self.data.dtype()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
