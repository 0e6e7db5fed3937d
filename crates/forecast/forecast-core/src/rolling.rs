//! Walk-forward one-step forecasting
//!
//! For every test point a fresh model is fitted on all observations seen so
//! far, asked for one step ahead, and the true value is then appended to the
//! history. The forecast for test point `t` therefore only sees
//! `train ++ test[..t]`.

use algorithm_spi::TsError;
use forecast_spi::{ForecastError, ForecastRun, ModelFitter, ModelOrder, Result};
use tracing::{debug, trace};

/// Rolling forecaster bound to a model fitter
pub struct RollingForecaster<'a> {
    fitter: &'a dyn ModelFitter,
}

impl<'a> RollingForecaster<'a> {
    pub fn new(fitter: &'a dyn ModelFitter) -> Self {
        Self { fitter }
    }

    /// Forecast every point of `test`, refitting before each one.
    ///
    /// Any fit or prediction failure aborts the run with
    /// [`ForecastError::Fitting`] carrying the failing iteration.
    pub fn run(&self, order: &ModelOrder, train: &[f64], test: &[f64]) -> Result<ForecastRun> {
        let mut history = Vec::with_capacity(train.len() + test.len());
        history.extend_from_slice(train);
        let mut predictions = Vec::with_capacity(test.len());

        for (iteration, &observed) in test.iter().enumerate() {
            let forecast = self
                .one_step(order, &history)
                .map_err(|source| ForecastError::Fitting { iteration, source })?;

            trace!(
                iteration,
                history = history.len(),
                forecast,
                observed,
                "rolling step"
            );

            predictions.push(forecast);
            history.push(observed);
        }

        debug!(
            fitter = self.fitter.name(),
            order = %order,
            train = train.len(),
            test = test.len(),
            "rolling forecast complete"
        );

        Ok(ForecastRun::new(history, predictions))
    }

    fn one_step(&self, order: &ModelOrder, history: &[f64]) -> algorithm_spi::Result<f64> {
        let model = self.fitter.fit(order, history)?;
        model
            .predict(1)?
            .first()
            .copied()
            .ok_or_else(|| TsError::NumericalError("model returned no forecast".to_string()))
    }
}

/// Walk-forward forecast of `test` starting from `train`
pub fn rolling_forecast(
    fitter: &dyn ModelFitter,
    order: &ModelOrder,
    train: &[f64],
    test: &[f64],
) -> Result<ForecastRun> {
    RollingForecaster::new(fitter).run(order, train, test)
}

#[cfg(test)]
mod tests {
    use super::*;
    use algorithm_spi::Predictor;
    use std::sync::Mutex;

    /// Forecasts the mean of the fitted history
    struct MeanModel {
        mean: f64,
        empty_forecast: bool,
    }

    impl Predictor for MeanModel {
        fn fit(&mut self, data: &[f64]) -> algorithm_spi::Result<()> {
            self.mean = data.iter().sum::<f64>() / data.len() as f64;
            Ok(())
        }

        fn predict(&self, steps: usize) -> algorithm_spi::Result<Vec<f64>> {
            if self.empty_forecast {
                return Ok(Vec::new());
            }
            Ok(vec![self.mean; steps])
        }

        fn is_fitted(&self) -> bool {
            true
        }
    }

    /// Records every history it is asked to fit
    #[derive(Default)]
    struct RecordingFitter {
        seen: Mutex<Vec<Vec<f64>>>,
        fail_at_len: Option<usize>,
        empty_forecast: bool,
    }

    impl ModelFitter for RecordingFitter {
        fn fit(
            &self,
            _order: &ModelOrder,
            history: &[f64],
        ) -> algorithm_spi::Result<Box<dyn Predictor>> {
            self.seen.lock().unwrap().push(history.to_vec());
            if self.fail_at_len == Some(history.len()) {
                return Err(TsError::NumericalError("singular".to_string()));
            }
            let mut model = MeanModel {
                mean: 0.0,
                empty_forecast: self.empty_forecast,
            };
            model.fit(history)?;
            Ok(Box::new(model))
        }

        fn name(&self) -> &str {
            "recording"
        }
    }

    #[test]
    fn test_history_and_predictions_shape() {
        let fitter = RecordingFitter::default();
        let train = [1.0, 2.0, 3.0];
        let test = [4.0, 5.0];

        let run = rolling_forecast(&fitter, &ModelOrder::default(), &train, &test).unwrap();

        assert_eq!(run.history(), &[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(run.predictions().len(), 2);
        assert!((run.predictions()[0] - 2.0).abs() < 1e-10);
        assert!((run.predictions()[1] - 2.5).abs() < 1e-10);
    }

    #[test]
    fn test_each_step_sees_only_past_values() {
        let fitter = RecordingFitter::default();
        let train = [10.0, 20.0];
        let test = [30.0, 40.0, 50.0];

        RollingForecaster::new(&fitter)
            .run(&ModelOrder::default(), &train, &test)
            .unwrap();

        let seen = fitter.seen.lock().unwrap();
        assert_eq!(seen.len(), 3);
        assert_eq!(seen[0], vec![10.0, 20.0]);
        assert_eq!(seen[1], vec![10.0, 20.0, 30.0]);
        assert_eq!(seen[2], vec![10.0, 20.0, 30.0, 40.0]);
    }

    #[test]
    fn test_failure_reports_iteration() {
        let fitter = RecordingFitter {
            fail_at_len: Some(4),
            ..Default::default()
        };

        let err = rolling_forecast(&fitter, &ModelOrder::default(), &[1.0, 2.0], &[3.0, 4.0, 5.0])
            .unwrap_err();

        assert_eq!(
            err,
            ForecastError::Fitting {
                iteration: 2,
                source: TsError::NumericalError("singular".to_string()),
            }
        );
        assert_eq!(fitter.seen.lock().unwrap().len(), 3);
    }

    #[test]
    fn test_estimator_failure_reports_iteration() {
        let fitter = crate::fitter::StatsModelFitter::new();

        let err = rolling_forecast(
            &fitter,
            &ModelOrder::arima(1, 0, 1),
            &[1.0, 3.0, 2.0, 5.0],
            &[7.0, f64::NAN, 9.0],
        )
        .unwrap_err();
        match err {
            ForecastError::Fitting {
                iteration: 2,
                source: TsError::InvalidData(msg),
            } => assert!(msg.contains("position 5"), "{}", msg),
            other => panic!("Expected fitting failure at iteration 2, got {:?}", other),
        }

        let err = rolling_forecast(
            &fitter,
            &ModelOrder::arima(5, 0, 5),
            &[1.0, 3.0, 2.0, 5.0, 4.0, 6.0],
            &[7.0],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ForecastError::Fitting {
                iteration: 0,
                source: TsError::InsufficientData { actual: 6, .. },
            }
        ));
    }

    #[test]
    fn test_empty_forecast_is_fitting_failure() {
        let fitter = RecordingFitter {
            empty_forecast: true,
            ..Default::default()
        };

        let err = rolling_forecast(&fitter, &ModelOrder::default(), &[1.0, 2.0], &[3.0])
            .unwrap_err();
        assert!(matches!(err, ForecastError::Fitting { iteration: 0, .. }));
    }

    #[test]
    fn test_empty_test_set() {
        let fitter = RecordingFitter::default();
        let run = rolling_forecast(&fitter, &ModelOrder::default(), &[1.0, 2.0], &[]).unwrap();

        assert_eq!(run.history(), &[1.0, 2.0]);
        assert!(run.predictions().is_empty());
        assert!(fitter.seen.lock().unwrap().is_empty());
    }
}
