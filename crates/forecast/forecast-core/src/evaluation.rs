//! Forecast accuracy metrics
//!
//! All metrics require equally long, non-empty truth and prediction
//! sequences and fail instead of returning NaN.

use forecast_spi::{ForecastError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Mean Absolute Percentage Error, as a percentage
///
/// `100 * mean(|(t - p) / t|)`. Fails with [`ForecastError::Division`] at
/// the first true value equal to zero.
///
/// # Example
///
/// ```rust
/// use forecast_core::evaluation::mape;
///
/// let score = mape(&[10.0, 20.0], &[11.0, 18.0]).unwrap();
/// assert!((score - 10.0).abs() < 1e-10);
/// ```
pub fn mape(y_true: &[f64], y_pred: &[f64]) -> Result<f64> {
    check_shape(y_true, y_pred)?;

    if let Some(index) = y_true.iter().position(|t| *t == 0.0) {
        return Err(ForecastError::Division { index });
    }

    let sum: f64 = y_true
        .iter()
        .zip(y_pred)
        .map(|(t, p)| ((t - p) / t).abs())
        .sum();

    Ok(100.0 * sum / y_true.len() as f64)
}

/// Mean Absolute Error
pub fn mae(y_true: &[f64], y_pred: &[f64]) -> Result<f64> {
    check_shape(y_true, y_pred)?;

    let sum: f64 = y_true.iter().zip(y_pred).map(|(t, p)| (t - p).abs()).sum();
    Ok(sum / y_true.len() as f64)
}

/// Mean Squared Error
pub fn mse(y_true: &[f64], y_pred: &[f64]) -> Result<f64> {
    check_shape(y_true, y_pred)?;

    let sum: f64 = y_true.iter().zip(y_pred).map(|(t, p)| (t - p).powi(2)).sum();
    Ok(sum / y_true.len() as f64)
}

/// Root Mean Squared Error
pub fn rmse(y_true: &[f64], y_pred: &[f64]) -> Result<f64> {
    mse(y_true, y_pred).map(f64::sqrt)
}

fn check_shape(y_true: &[f64], y_pred: &[f64]) -> Result<()> {
    if y_true.len() != y_pred.len() {
        return Err(ForecastError::Shape {
            truth: y_true.len(),
            predicted: y_pred.len(),
        });
    }
    if y_true.is_empty() {
        return Err(ForecastError::InsufficientData {
            required: 1,
            actual: 0,
        });
    }
    Ok(())
}

/// All accuracy metrics for one forecast
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AccuracyReport {
    pub mape: f64,
    pub mae: f64,
    pub mse: f64,
    pub rmse: f64,
}

impl AccuracyReport {
    pub fn compute(y_true: &[f64], y_pred: &[f64]) -> Result<Self> {
        let mse = mse(y_true, y_pred)?;
        Ok(Self {
            mape: mape(y_true, y_pred)?,
            mae: mae(y_true, y_pred)?,
            mse,
            rmse: mse.sqrt(),
        })
    }
}

impl fmt::Display for AccuracyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MAPE {:.2}% | MAE {:.4} | MSE {:.4} | RMSE {:.4}",
            self.mape, self.mae, self.mse, self.rmse
        )
    }
}
