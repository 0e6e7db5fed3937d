//! Dataset Splitter
//!
//! Cuts one station's series into chronological train/test sequences. The
//! cutoff is exclusive on both sides: a row stamped exactly at the cutoff is
//! in neither half.

use algorithm_core::utils::preprocessing::detrend_linear;
use chrono::{NaiveDate, NaiveDateTime};
use frame_spi::{FrameError, Result, Split, TimeSeriesFrame};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Column read when no other is named
pub const DEFAULT_VALUE_COLUMN: &str = "traffic";

const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// What to split and where
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitOptions {
    pub station: String,
    pub cutoff: NaiveDateTime,
    /// Compute a linear detrend of the station series (on by default). The
    /// result is only logged; the split always holds observed values.
    pub detrend: bool,
    pub value_column: String,
}

impl SplitOptions {
    pub fn new(station: impl Into<String>, cutoff: NaiveDateTime) -> Self {
        Self {
            station: station.into(),
            cutoff,
            detrend: true,
            value_column: DEFAULT_VALUE_COLUMN.to_string(),
        }
    }

    pub fn detrend(mut self, detrend: bool) -> Self {
        self.detrend = detrend;
        self
    }

    pub fn value_column(mut self, column: impl Into<String>) -> Self {
        self.value_column = column.into();
        self
    }
}

/// Split `station`'s `traffic` series at `cutoff`
pub fn generate_train_test(
    frame: &TimeSeriesFrame,
    station: &str,
    cutoff: NaiveDateTime,
    detrend: bool,
) -> Result<Split> {
    generate_train_test_with(frame, &SplitOptions::new(station, cutoff).detrend(detrend))
}

/// Split a station series as described by `options`
pub fn generate_train_test_with(frame: &TimeSeriesFrame, options: &SplitOptions) -> Result<Split> {
    let rows = frame.station_rows(&options.station);
    if rows.is_empty() {
        return Err(FrameError::EntityNotFound(options.station.clone()));
    }

    let column = frame.column_f64(&options.value_column)?;
    let index = frame.index();

    if options.detrend {
        let series: Vec<f64> = rows.iter().map(|&row| column[row]).collect();
        let residuals = detrend_linear(&series);
        debug!(
            station = %options.station,
            residuals = ?residuals,
            "computed linear detrend of station series"
        );
    }

    let mut train = Vec::new();
    let mut test = Vec::new();
    let mut dropped_at_cutoff = 0;

    for &row in &rows {
        let value = column[row];
        let time = index[row].time;
        if time < options.cutoff {
            train.push(value);
        } else if time > options.cutoff {
            test.push(value);
        } else {
            dropped_at_cutoff += 1;
        }
    }

    debug!(
        station = %options.station,
        cutoff = %options.cutoff,
        train = train.len(),
        test = test.len(),
        dropped_at_cutoff,
        "split station series"
    );
    if train.is_empty() || test.is_empty() {
        warn!(
            station = %options.station,
            cutoff = %options.cutoff,
            train = train.len(),
            test = test.len(),
            "cutoff leaves an empty side"
        );
    }

    Ok(Split {
        station: options.station.clone(),
        cutoff: options.cutoff,
        train,
        test,
        dropped_at_cutoff,
    })
}

/// Parse a cutoff given as `YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DDTHH:MM:SS`
/// or `YYYY-MM-DD` (midnight)
pub fn parse_cutoff(text: &str) -> Result<NaiveDateTime> {
    let text = text.trim();
    for format in DATETIME_FORMATS {
        if let Ok(time) = NaiveDateTime::parse_from_str(text, format) {
            return Ok(time);
        }
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| FrameError::InvalidTimestamp(text.to_string()))
}
