//! Basic example: one station from raw frame to MAPE
//!
//! Run with: RUST_LOG=debug cargo run --example basic -p forecast-facade

use chrono::{Duration, NaiveDate};
use forecast_facade::frame::prelude::*;
use forecast_facade::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    // Two days of hourly counts for one station
    let start = NaiveDate::from_ymd_opt(2021, 3, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or("invalid start date")?;
    let mut rng = StdRng::seed_from_u64(1);
    let values: Vec<f64> = (0..48)
        .map(|h| {
            let cycle = 25.0 * (h as f64 * std::f64::consts::PI / 12.0).sin();
            (120.0 + cycle + rng.gen_range(-4.0..4.0)).round()
        })
        .collect();
    let times = (0..48).map(|h| start + Duration::hours(h)).collect();

    let frame = TimeSeriesFrame::from_series("station-1", times, "traffic", values)?;
    let (frame, report) = downcast_report(frame);
    tracing::info!(
        before = report.bytes_before,
        after = report.bytes_after,
        "optimized frame"
    );

    let config = ExperimentConfig::builder()
        .station("station-1")
        .cutoff("2021-03-02 12:00:00")
        .order(ModelOrder::arima(2, 0, 1))
        .diagnostics(DiagnosticsConfig::default())
        .build()?;
    tracing::info!("config:\n{}", config.to_json_string()?);

    let result = run_experiment(&frame, &config, &StatsModelFitter::new())?;
    let accuracy = AccuracyReport::compute(&result.split.test, result.run.predictions())?;

    for (truth, forecast) in result.split.test.iter().zip(result.run.predictions()) {
        tracing::info!(truth, forecast, "test point");
    }
    tracing::info!("{}", accuracy);

    Ok(())
}
