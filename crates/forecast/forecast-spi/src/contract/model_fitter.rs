//! Model fitting collaborator

use crate::model::ModelOrder;
use algorithm_spi::{Predictor, Result};

/// Builds a freshly fitted estimator for a model order.
///
/// Called once per rolling step with the full current history. Every call
/// must return a new model; no state may carry over between calls.
pub trait ModelFitter: Send + Sync {
    /// Fit a new model of `order` on `history`
    fn fit(&self, order: &ModelOrder, history: &[f64]) -> Result<Box<dyn Predictor>>;

    /// Name of this fitter
    fn name(&self) -> &str;
}
