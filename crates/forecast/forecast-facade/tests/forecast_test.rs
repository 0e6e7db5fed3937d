//! Unit tests for the forecast facade
//!
//! Exercises the public surface re-exported at the facade root.

use forecast_facade::{
    mae, mape, rmse, AccuracyReport, Correlogram, CorrelogramKind, ExperimentConfig,
    ForecastError, ForecastRun, ModelFitter, ModelOrder, StatsModelFitter,
};

// ============================================================================
// Evaluator
// ============================================================================

#[test]
fn test_mape_identical_sequences() {
    let score = mape(&[10.0, 20.0, 30.0], &[10.0, 20.0, 30.0]).unwrap();
    assert!(score.abs() < 1e-10);
}

#[test]
fn test_mape_hundred_percent() {
    let score = mape(&[10.0], &[20.0]).unwrap();
    assert!((score - 100.0).abs() < 1e-10);
}

#[test]
fn test_mape_zero_truth_is_division_error() {
    assert_eq!(
        mape(&[0.0], &[5.0]).unwrap_err(),
        ForecastError::Division { index: 0 }
    );
}

#[test]
fn test_mape_length_mismatch_is_shape_error() {
    assert_eq!(
        mape(&[1.0, 2.0, 3.0], &[1.0, 2.0]).unwrap_err(),
        ForecastError::Shape {
            truth: 3,
            predicted: 2
        }
    );
}

#[test]
fn test_scale_dependent_metrics() {
    let truth = [3.0, 5.0];
    let pred = [1.0, 5.0];
    assert!((mae(&truth, &pred).unwrap() - 1.0).abs() < 1e-10);
    assert!((rmse(&truth, &pred).unwrap() - 2.0_f64.sqrt()).abs() < 1e-10);
}

#[test]
fn test_accuracy_report_matches_individual_metrics() {
    let truth = [120.0, 80.0, 95.0];
    let pred = [110.0, 90.0, 95.0];
    let report = AccuracyReport::compute(&truth, &pred).unwrap();

    assert_eq!(report.mape, mape(&truth, &pred).unwrap());
    assert_eq!(report.mae, mae(&truth, &pred).unwrap());
    assert_eq!(report.rmse, rmse(&truth, &pred).unwrap());
}

// ============================================================================
// Models
// ============================================================================

fn order_from_json(json: &str) -> ModelOrder {
    ExperimentConfig::from_json_str(&format!(
        r#"{{"split": {{"station": "A", "cutoff": "2021-01-01"}}, "order": {}}}"#,
        json
    ))
    .unwrap()
    .order
}

#[test]
fn test_model_order_json() {
    let order = order_from_json(r#"{"family":"arima","p":2,"d":1,"q":3}"#);
    assert_eq!(order, ModelOrder::arima(2, 1, 3));
    assert_eq!(order.to_string(), "ARIMA(2,1,3)");

    let order = order_from_json(r#"{"family":"exponential_smoothing"}"#);
    assert_eq!(order, ModelOrder::ExponentialSmoothing);
}

#[test]
fn test_forecast_run_into_parts() {
    let run = ForecastRun::new(vec![1.0, 2.0], vec![1.5]);
    let (history, predictions) = run.into_parts();
    assert_eq!(history, vec![1.0, 2.0]);
    assert_eq!(predictions, vec![1.5]);
}

#[test]
fn test_correlogram_band() {
    let correlogram = Correlogram {
        kind: CorrelogramKind::Acf,
        values: vec![1.0, -0.5, 0.1],
        confidence_bound: 0.2,
        n_obs: 96,
    };
    assert_eq!(correlogram.significant_lags(), vec![1]);
}

#[test]
fn test_default_fitter_name() {
    assert_eq!(StatsModelFitter::new().name(), "statsmodel");
}

#[test]
fn test_spi_contracts_reexported() {
    fn fitter_name(fitter: &dyn forecast_spi::ModelFitter) -> String {
        fitter.name().to_string()
    }

    let fitter: &dyn ModelFitter = &StatsModelFitter::new();
    assert_eq!(fitter_name(fitter), "statsmodel");

    let err: forecast_spi::ForecastError = ForecastError::Config("bad".to_string());
    assert_eq!(err, ForecastError::Config("bad".to_string()));
}
