//! Default model fitter backed by the bundled estimators

use algorithm_core::{Arima, SimpleExponentialSmoothing};
use algorithm_spi::{Predictor, Result};
use forecast_spi::{ModelFitter, ModelOrder};

/// Fits [`Arima`] or auto-tuned [`SimpleExponentialSmoothing`] models
#[derive(Debug, Clone, Copy, Default)]
pub struct StatsModelFitter;

impl StatsModelFitter {
    pub fn new() -> Self {
        Self
    }
}

impl ModelFitter for StatsModelFitter {
    fn fit(&self, order: &ModelOrder, history: &[f64]) -> Result<Box<dyn Predictor>> {
        match *order {
            ModelOrder::Arima { p, d, q } => {
                let mut model = Arima::new(p, d, q)?;
                model.fit(history)?;
                Ok(Box::new(model))
            }
            ModelOrder::ExponentialSmoothing => {
                Ok(Box::new(SimpleExponentialSmoothing::auto(history)?))
            }
        }
    }

    fn name(&self) -> &str {
        "statsmodel"
    }
}
