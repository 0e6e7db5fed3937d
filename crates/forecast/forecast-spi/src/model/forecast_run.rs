//! Rolling forecast output

use serde::{Deserialize, Serialize};

/// Result of a rolling forecast: the final history and one prediction per
/// test point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastRun {
    history: Vec<f64>,
    predictions: Vec<f64>,
}

impl ForecastRun {
    pub fn new(history: Vec<f64>, predictions: Vec<f64>) -> Self {
        Self {
            history,
            predictions,
        }
    }

    /// Training values followed by every test observation
    pub fn history(&self) -> &[f64] {
        &self.history
    }

    /// One-step-ahead forecasts, aligned with the test observations
    pub fn predictions(&self) -> &[f64] {
        &self.predictions
    }

    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.history, self.predictions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let run = ForecastRun::new(vec![1.0, 2.0, 3.0], vec![2.5]);
        assert_eq!(run.history(), &[1.0, 2.0, 3.0]);
        assert_eq!(run.predictions(), &[2.5]);

        let (history, predictions) = run.into_parts();
        assert_eq!(history.len(), 3);
        assert_eq!(predictions, vec![2.5]);
    }
}
