//! ARIMA (AutoRegressive Integrated Moving Average) implementation
//!
//! The model combines three components:
//!
//! - **AR (AutoRegressive)**: Uses past values to predict future values
//! - **I (Integrated)**: Differencing to achieve stationarity
//! - **MA (Moving Average)**: Uses past forecast errors
//!
//! ## Parameters
//!
//! - `p`: Order of the autoregressive part
//! - `d`: Degree of differencing
//! - `q`: Order of the moving average part
//!
//! AR coefficients come from the Yule-Walker equations, MA coefficients
//! from the autocorrelation of the AR residuals. A constant (the mean) is
//! only estimated for undifferenced models; with `d > 0` the differenced
//! series is modelled without drift.
//!
//! ## Example
//!
//! ```rust
//! use algorithm_core::regression::Arima;
//! use algorithm_core::Predictor;
//!
//! let data: Vec<f64> = (1..=20).map(|x| x as f64).collect();
//! let mut model = Arima::new(1, 1, 0).unwrap();
//! model.fit(&data).unwrap();
//! let forecast = model.predict(3).unwrap();
//! assert_eq!(forecast.len(), 3);
//! ```

use crate::correlation::{autocovariance, levinson_durbin};
use crate::utils::preprocessing::difference;
use algorithm_spi::{Predictor, Result, TsError};

const MAX_AR_ORDER: usize = 10;
const MAX_DIFF_ORDER: usize = 2;
const MAX_MA_ORDER: usize = 10;

/// ARIMA model for time series forecasting
#[derive(Debug, Clone)]
pub struct Arima {
    /// AR order (p)
    p: usize,
    /// Differencing order (d)
    d: usize,
    /// MA order (q)
    q: usize,
    /// AR coefficients
    ar_coeffs: Vec<f64>,
    /// MA coefficients
    ma_coeffs: Vec<f64>,
    /// Mean of the modelled series (zero when differenced)
    constant: f64,
    /// Last value of the series at each differencing level `0..d`
    level_tails: Vec<f64>,
    /// Differenced data
    differenced_data: Vec<f64>,
    /// Residuals from fitting
    residuals: Vec<f64>,
    /// Whether the model has been fitted
    fitted: bool,
}

impl Arima {
    /// Create a new ARIMA model with specified orders
    ///
    /// # Arguments
    ///
    /// * `p` - Order of autoregressive component (0-10)
    /// * `d` - Degree of differencing (0-2)
    /// * `q` - Order of moving average component (0-10)
    pub fn new(p: usize, d: usize, q: usize) -> Result<Self> {
        if p > MAX_AR_ORDER {
            return Err(TsError::invalid_parameter("p", "AR order must be <= 10"));
        }
        if d > MAX_DIFF_ORDER {
            return Err(TsError::invalid_parameter(
                "d",
                "Differencing order must be <= 2",
            ));
        }
        if q > MAX_MA_ORDER {
            return Err(TsError::invalid_parameter("q", "MA order must be <= 10"));
        }

        Ok(Self {
            p,
            d,
            q,
            ar_coeffs: vec![0.0; p],
            ma_coeffs: vec![0.0; q],
            constant: 0.0,
            level_tails: Vec::new(),
            differenced_data: Vec::new(),
            residuals: Vec::new(),
            fitted: false,
        })
    }

    /// Smallest history this order can be fitted on
    ///
    /// After `d` differences at least `max(p, q) + 2` points must remain so
    /// the lag structure leaves a residual to estimate from.
    pub fn min_observations(&self) -> usize {
        self.d + self.p.max(self.q) + 2
    }

    /// Reverse differencing to get original scale
    fn undifference(&self, forecasts: &[f64]) -> Vec<f64> {
        let mut result = forecasts.to_vec();

        for level in (0..self.d).rev() {
            let mut running = self.level_tails[level];
            for value in result.iter_mut() {
                running += *value;
                *value = running;
            }
        }

        result
    }

    /// Estimate AR coefficients using Yule-Walker equations
    fn estimate_ar_coefficients(&self, centered: &[f64]) -> Vec<f64> {
        if self.p == 0 {
            return Vec::new();
        }

        // `centered` already has the constant removed; autocovariance
        // re-centres on the sample mean, which is zero for d == 0.
        let autocov = autocovariance(centered, self.p);
        let (mut coeffs, _) = levinson_durbin(&autocov, self.p);
        coeffs.resize(self.p, 0.0);
        coeffs
    }

    /// Estimate MA coefficients from residuals
    fn estimate_ma_coefficients(&self, residuals: &[f64]) -> Vec<f64> {
        if self.q == 0 || residuals.is_empty() {
            return vec![0.0; self.q];
        }

        let n = residuals.len();
        let mean: f64 = residuals.iter().sum::<f64>() / n as f64;
        let centered: Vec<f64> = residuals.iter().map(|x| x - mean).collect();

        let mut coeffs = vec![0.0; self.q];
        let var: f64 = centered.iter().map(|x| x * x).sum::<f64>() / n as f64;

        if var.abs() > 1e-10 {
            for (k, coeff) in coeffs.iter_mut().enumerate() {
                let mut sum = 0.0;
                for i in (k + 1)..n {
                    sum += centered[i] * centered[i - k - 1];
                }
                // Bound coefficients for invertibility
                *coeff = ((sum / n as f64) / var).clamp(-0.99, 0.99);
            }
        }

        coeffs
    }

    /// Get model parameters
    pub fn params(&self) -> (usize, usize, usize) {
        (self.p, self.d, self.q)
    }

    /// Get AR coefficients
    pub fn ar_coefficients(&self) -> &[f64] {
        &self.ar_coeffs
    }

    /// Get MA coefficients
    pub fn ma_coefficients(&self) -> &[f64] {
        &self.ma_coeffs
    }

    /// Get the estimated constant (mean of the modelled series)
    pub fn constant(&self) -> f64 {
        self.constant
    }
}

impl Predictor for Arima {
    fn fit(&mut self, data: &[f64]) -> Result<()> {
        self.fitted = false;

        let min_required = self.min_observations();
        if data.len() < min_required {
            return Err(TsError::InsufficientData {
                required: min_required,
                actual: data.len(),
            });
        }
        TsError::check_finite(data)?;

        self.level_tails = (0..self.d)
            .map(|level| {
                let series = difference(data, level);
                series[series.len() - 1]
            })
            .collect();
        self.differenced_data = difference(data, self.d);

        let n = self.differenced_data.len();
        self.constant = if self.d == 0 {
            self.differenced_data.iter().sum::<f64>() / n as f64
        } else {
            0.0
        };
        let centered: Vec<f64> = self
            .differenced_data
            .iter()
            .map(|x| x - self.constant)
            .collect();

        self.ar_coeffs = self.estimate_ar_coefficients(&centered);

        self.residuals = vec![0.0; n];
        for i in self.p..n {
            let mut prediction = self.constant;
            for j in 0..self.p {
                prediction += self.ar_coeffs[j] * centered[i - j - 1];
            }
            self.residuals[i] = self.differenced_data[i] - prediction;
        }

        self.ma_coeffs = self.estimate_ma_coefficients(&self.residuals[self.p..]);

        if self
            .ar_coeffs
            .iter()
            .chain(self.ma_coeffs.iter())
            .any(|c| !c.is_finite())
        {
            return Err(TsError::NumericalError(
                "ARIMA coefficient estimation produced non-finite values".to_string(),
            ));
        }

        self.fitted = true;
        Ok(())
    }

    fn predict(&self, steps: usize) -> Result<Vec<f64>> {
        if !self.fitted {
            return Err(TsError::NotFitted);
        }

        if steps == 0 {
            return Ok(Vec::new());
        }

        let n = self.differenced_data.len();
        let mut extended = self.differenced_data.clone();
        let mut extended_residuals = self.residuals.clone();

        // Generate forecasts on differenced scale
        for _ in 0..steps {
            let mut forecast = self.constant;

            for j in 0..self.p {
                let idx = extended.len() - j - 1;
                forecast += self.ar_coeffs[j] * (extended[idx] - self.constant);
            }

            for j in 0..self.q {
                if extended_residuals.len() > j {
                    let idx = extended_residuals.len() - j - 1;
                    forecast += self.ma_coeffs[j] * extended_residuals[idx];
                }
            }

            extended.push(forecast);
            extended_residuals.push(0.0); // Future residuals are 0
        }

        Ok(self.undifference(&extended[n..]))
    }

    fn is_fitted(&self) -> bool {
        self.fitted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arima_creation() {
        assert!(Arima::new(1, 1, 1).is_ok());
        assert!(Arima::new(11, 0, 0).is_err());
        assert!(Arima::new(0, 3, 0).is_err());
        assert!(Arima::new(0, 0, 11).is_err());
    }

    #[test]
    fn test_arima_fit_predict() {
        let data: Vec<f64> = (1..=50).map(|x| x as f64 + (x as f64 * 0.1).sin()).collect();
        let mut model = Arima::new(1, 1, 0).unwrap();

        assert!(model.fit(&data).is_ok());
        assert!(model.is_fitted());

        let forecast = model.predict(5).unwrap();
        assert_eq!(forecast.len(), 5);
        assert!(forecast.iter().all(|f| f.is_finite()));
    }

    #[test]
    fn test_arima_short_history() {
        // ARIMA(1,0,1) needs max(p, q) + 2 = 3 points
        let mut model = Arima::new(1, 0, 1).unwrap();
        assert!(model.fit(&[100.0, 102.0, 98.0, 101.0]).is_ok());
        assert_eq!(model.predict(1).unwrap().len(), 1);

        let err = model.fit(&[100.0, 102.0]).unwrap_err();
        assert_eq!(
            err,
            TsError::InsufficientData {
                required: 3,
                actual: 2
            }
        );
        assert!(!model.is_fitted());
    }

    #[test]
    fn test_arima_rejects_non_finite() {
        let mut model = Arima::new(1, 0, 0).unwrap();
        let result = model.fit(&[1.0, 2.0, f64::NAN, 4.0, 5.0]);
        assert!(matches!(result, Err(TsError::InvalidData(_))));
    }

    #[test]
    fn test_arima_constant_series() {
        let mut model = Arima::new(2, 0, 1).unwrap();
        model.fit(&[5.0; 12]).unwrap();
        let forecast = model.predict(2).unwrap();
        assert!(forecast.iter().all(|f| (f - 5.0).abs() < 1e-10));
    }

    #[test]
    fn test_arima_white_noise_order_zero_is_mean() {
        let data = vec![4.0, 6.0, 5.0, 7.0, 3.0];
        let mut model = Arima::new(0, 0, 0).unwrap();
        model.fit(&data).unwrap();
        assert!((model.predict(1).unwrap()[0] - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_arima_random_walk_forecast_is_last_value() {
        // ARIMA(0,1,0) without drift forecasts the last observation
        let data = vec![10.0, 12.0, 11.0, 15.0, 14.0];
        let mut model = Arima::new(0, 1, 0).unwrap();
        model.fit(&data).unwrap();

        let forecast = model.predict(3).unwrap();
        assert!(forecast.iter().all(|f| (f - 14.0).abs() < 1e-10));
    }

    #[test]
    fn test_arima_second_difference_extends_line() {
        // Second differences of a quadratic are constant; with no drift
        // ARIMA(0,2,0) continues the last slope.
        let data: Vec<f64> = (0..10).map(|i| (i * i) as f64).collect();
        let mut model = Arima::new(0, 2, 0).unwrap();
        model.fit(&data).unwrap();

        let forecast = model.predict(2).unwrap();
        // last value 81, last slope 17 -> 98, 115
        assert!((forecast[0] - 98.0).abs() < 1e-9);
        assert!((forecast[1] - 115.0).abs() < 1e-9);
    }

    #[test]
    fn test_arima_ar1_recovers_coefficient() {
        let mut data = vec![0.0];
        let mut seed: u64 = 11;
        for _ in 1..3000 {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let noise = ((seed >> 33) as f64 / (1u64 << 31) as f64) - 0.5;
            let prev = *data.last().unwrap();
            data.push(0.6 * prev + noise);
        }

        let mut model = Arima::new(1, 0, 0).unwrap();
        model.fit(&data).unwrap();
        assert!((model.ar_coefficients()[0] - 0.6).abs() < 0.05);
    }

    #[test]
    fn test_predict_before_fit() {
        let model = Arima::new(1, 0, 0).unwrap();
        assert_eq!(model.predict(1).unwrap_err(), TsError::NotFitted);
        assert!(model.predict(0).is_err());
    }
}
