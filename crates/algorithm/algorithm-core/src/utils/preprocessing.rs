//! Data preprocessing utilities for time series
//!
//! Differencing and linear detrending, shared by ARIMA, the stationarity
//! test and the dataset splitter.

use serde::{Deserialize, Serialize};

/// Compute n-th order differences
///
/// Each order shortens the series by one; the leading undefined value is
/// dropped rather than kept as NaN.
pub fn difference(data: &[f64], order: usize) -> Vec<f64> {
    let mut result = data.to_vec();
    for _ in 0..order {
        if result.len() <= 1 {
            return Vec::new();
        }
        result = result.windows(2).map(|w| w[1] - w[0]).collect();
    }
    result
}

/// Least-squares line `y = intercept + slope * t` over `t = 0..n`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearTrend {
    pub intercept: f64,
    pub slope: f64,
}

impl LinearTrend {
    /// Fit a trend line against the sample index.
    ///
    /// Returns `None` for an empty series. A single point yields a flat
    /// line through it.
    pub fn fit(data: &[f64]) -> Option<Self> {
        let n = data.len();
        if n == 0 {
            return None;
        }

        let t_mean = (n - 1) as f64 / 2.0;
        let y_mean = data.iter().sum::<f64>() / n as f64;

        let mut num = 0.0;
        let mut den = 0.0;
        for (i, y) in data.iter().enumerate() {
            let dt = i as f64 - t_mean;
            num += dt * (y - y_mean);
            den += dt * dt;
        }

        let slope = if den > 0.0 { num / den } else { 0.0 };
        Some(Self {
            intercept: y_mean - slope * t_mean,
            slope,
        })
    }

    /// Trend value at sample index `t`
    pub fn at(&self, t: usize) -> f64 {
        self.intercept + self.slope * t as f64
    }
}

/// Subtract the least-squares linear trend from every point
pub fn detrend_linear(data: &[f64]) -> Vec<f64> {
    match LinearTrend::fit(data) {
        Some(trend) => data
            .iter()
            .enumerate()
            .map(|(i, y)| y - trend.at(i))
            .collect(),
        None => Vec::new(),
    }
}
