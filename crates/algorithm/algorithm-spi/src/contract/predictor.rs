//! Predictor trait for statistical estimators

use crate::error::Result;

/// Common trait for all time series estimators
///
/// Follows the fit-predict pattern: `fit` estimates parameters from a
/// history, `predict` extrapolates `steps` values past the end of it.
/// Implementations must be refittable: calling `fit` again discards the
/// previous state entirely.
///
/// # Example
///
/// ```rust,ignore
/// use algorithm_spi::Predictor;
///
/// fn next_value<P: Predictor>(model: &mut P, history: &[f64]) -> algorithm_spi::Result<Vec<f64>> {
///     model.fit(history)?;
///     model.predict(1)
/// }
/// ```
pub trait Predictor {
    /// Fit the model to historical data
    fn fit(&mut self, data: &[f64]) -> Result<()>;

    /// Predict `steps` future values
    fn predict(&self, steps: usize) -> Result<Vec<f64>>;

    /// Check if the model has been fitted
    fn is_fitted(&self) -> bool;
}
