//! Simple exponential smoothing
//!
//! Assigns exponentially decreasing weights to past observations and
//! forecasts a flat line at the final smoothed level.
//!
//! Formula: `S_t = α * Y_t + (1 - α) * S_{t-1}`, with `S_0 = Y_0`.
//!
//! The model family has no structural order. When no smoothing factor is
//! known up front, [`SimpleExponentialSmoothing::auto`] picks the alpha
//! minimizing the in-sample one-step squared error.

use algorithm_spi::{Predictor, Result, TsError};

/// Grid resolution used by [`SimpleExponentialSmoothing::auto`]
const ALPHA_GRID_STEPS: usize = 100;

/// Simple Exponential Smoothing for series without trend or seasonality
///
/// # Example
///
/// ```rust
/// use algorithm_core::smoothing::SimpleExponentialSmoothing;
/// use algorithm_core::Predictor;
///
/// let data = vec![10.0, 12.0, 11.0, 13.0, 12.0, 14.0, 13.0, 15.0];
/// let mut model = SimpleExponentialSmoothing::new(0.3).unwrap();
/// model.fit(&data).unwrap();
/// let forecast = model.predict(3).unwrap();
/// assert_eq!(forecast.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct SimpleExponentialSmoothing {
    /// Smoothing parameter (0 < alpha < 1)
    alpha: f64,
    /// Current level estimate
    level: f64,
    /// Whether model has been fitted
    fitted: bool,
}

impl SimpleExponentialSmoothing {
    /// Create a new SES model
    ///
    /// # Arguments
    ///
    /// * `alpha` - Smoothing parameter (0 < alpha < 1).
    ///   Higher values give more weight to recent observations
    pub fn new(alpha: f64) -> Result<Self> {
        if !(0.0 < alpha && alpha < 1.0) {
            return Err(TsError::invalid_parameter(
                "alpha",
                "must be between 0 and 1 (exclusive)",
            ));
        }

        Ok(Self {
            alpha,
            level: 0.0,
            fitted: false,
        })
    }

    /// Create SES with automatic alpha selection, fitted on `data`
    ///
    /// Scans alpha over `0.01..=0.99` and keeps the value with the lowest
    /// one-step in-sample MSE. Ties keep the smallest alpha.
    pub fn auto(data: &[f64]) -> Result<Self> {
        if data.len() < 2 {
            return Err(TsError::InsufficientData {
                required: 2,
                actual: data.len(),
            });
        }
        TsError::check_finite(data)?;

        let mut best_alpha = 0.5;
        let mut best_mse = f64::MAX;

        for alpha_int in 1..ALPHA_GRID_STEPS {
            let alpha = alpha_int as f64 / ALPHA_GRID_STEPS as f64;
            let mse = Self::one_step_mse(alpha, data);
            if mse < best_mse {
                best_mse = mse;
                best_alpha = alpha;
            }
        }

        let mut model = Self::new(best_alpha)?;
        model.fit(data)?;
        Ok(model)
    }

    fn one_step_mse(alpha: f64, data: &[f64]) -> f64 {
        let mut level = data[0];
        let mut sse = 0.0;

        for &value in &data[1..] {
            let error = value - level;
            sse += error * error;
            level = alpha * value + (1.0 - alpha) * level;
        }

        sse / (data.len() - 1) as f64
    }

    /// Get the current level
    pub fn level(&self) -> f64 {
        self.level
    }

    /// Get alpha parameter
    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

impl Predictor for SimpleExponentialSmoothing {
    fn fit(&mut self, data: &[f64]) -> Result<()> {
        self.fitted = false;

        if data.len() < 2 {
            return Err(TsError::InsufficientData {
                required: 2,
                actual: data.len(),
            });
        }
        TsError::check_finite(data)?;

        self.level = data[0];
        for &value in &data[1..] {
            self.level = self.alpha * value + (1.0 - self.alpha) * self.level;
        }

        self.fitted = true;
        Ok(())
    }

    fn predict(&self, steps: usize) -> Result<Vec<f64>> {
        if !self.fitted {
            return Err(TsError::NotFitted);
        }

        // SES produces flat forecasts
        Ok(vec![self.level; steps])
    }

    fn is_fitted(&self) -> bool {
        self.fitted
    }
}
