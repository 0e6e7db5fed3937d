//! End-to-end experiment for one station: split, optional diagnostics,
//! rolling forecast and MAPE.

use crate::config::ExperimentConfig;
use forecast_core::{analyze_arima_params, mape, rolling_forecast, ArimaDiagnostics, TracingDisplay};
use forecast_spi::{ForecastError, ForecastRun, ModelFitter, Result};
use frame_core::generate_train_test_with;
use frame_spi::{Split, TimeSeriesFrame};
use tracing::info;

/// Outcome of [`run_experiment`]
#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentReport {
    pub split: Split,
    pub run: ForecastRun,
    /// MAPE of the predictions against the test window, in percent
    pub mape: f64,
    pub diagnostics: Option<ArimaDiagnostics>,
}

/// Split `frame` per `config`, forecast the test window and score it.
pub fn run_experiment(
    frame: &TimeSeriesFrame,
    config: &ExperimentConfig,
    fitter: &dyn ModelFitter,
) -> Result<ExperimentReport> {
    let split = generate_train_test_with(frame, &config.split.to_options()?)?;
    if !split.is_usable() {
        return Err(ForecastError::InsufficientData {
            required: 1,
            actual: split.train.len().min(split.test.len()),
        });
    }

    let diagnostics = match &config.diagnostics {
        Some(diagnostics_config) => Some(analyze_arima_params(
            &split.train,
            diagnostics_config,
            &mut TracingDisplay,
        )?),
        None => None,
    };

    let run = rolling_forecast(fitter, &config.order, &split.train, &split.test)?;
    let score = mape(&split.test, run.predictions())?;

    info!(
        station = %split.station,
        order = %config.order,
        fitter = fitter.name(),
        test = split.test.len(),
        mape = score,
        "experiment complete"
    );

    Ok(ExperimentReport {
        split,
        run,
        mape: score,
        diagnostics,
    })
}
