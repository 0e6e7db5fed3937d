//! ARIMA parameter diagnostics
//!
//! Runs the Augmented Dickey-Fuller test on a series (to judge the
//! differencing order `d`), differences it once, and hands the PACF (for
//! `p`) and ACF (for `q`) of the differenced series to a display.

use algorithm_core::correlation::{
    acf, confidence_bound, default_acf_lags, default_pacf_lags, pacf,
};
use algorithm_core::stationarity::{adf_test, AdfOptions, AdfResult};
use algorithm_core::utils::preprocessing::difference;
use forecast_spi::{Correlogram, CorrelogramDisplay, CorrelogramKind, ForecastError, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, trace};

const CONFIDENCE: f64 = 0.95;

/// Settings for the stationarity test and correlograms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagnosticsConfig {
    /// Upper bound on ADF lagged differences; `None` uses the
    /// `ceil(12 * (n/100)^(1/4))` rule
    pub adf_max_lag: Option<usize>,
    /// Choose the ADF lag by AIC
    pub autolag: bool,
    /// Correlogram lags; `None` uses the per-kind default
    pub nlags: Option<usize>,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            adf_max_lag: None,
            autolag: true,
            nlags: None,
        }
    }
}

impl DiagnosticsConfig {
    fn adf_options(&self) -> AdfOptions {
        AdfOptions {
            max_lag: self.adf_max_lag,
            autolag: self.autolag,
        }
    }
}

/// Output of [`analyze_arima_params`]
#[derive(Debug, Clone, PartialEq)]
pub struct ArimaDiagnostics {
    pub adf_statistic: f64,
    pub p_value: f64,
    pub adf: AdfResult,
    /// First difference of the input (one shorter)
    pub differenced: Vec<f64>,
    pub pacf: Correlogram,
    pub acf: Correlogram,
}

impl ArimaDiagnostics {
    pub fn is_stationary(&self, significance: f64) -> bool {
        self.adf.is_stationary(significance)
    }
}

/// Stationarity test and correlograms for choosing an ARIMA order.
///
/// The PACF is shown before the ACF.
pub fn analyze_arima_params(
    series: &[f64],
    config: &DiagnosticsConfig,
    display: &mut dyn CorrelogramDisplay,
) -> Result<ArimaDiagnostics> {
    let adf = adf_test(series, &config.adf_options()).map_err(ForecastError::Diagnostics)?;
    info!("ADF Statistic: {}", adf.statistic);
    info!("p-value: {}", adf.p_value);

    let differenced = difference(series, 1);
    let n = differenced.len();

    let pacf = Correlogram {
        kind: CorrelogramKind::Pacf,
        values: pacf(&differenced, config.nlags.unwrap_or_else(|| default_pacf_lags(n))),
        confidence_bound: confidence_bound(n, CONFIDENCE),
        n_obs: n,
    };
    let acf = Correlogram {
        kind: CorrelogramKind::Acf,
        values: acf(&differenced, config.nlags.unwrap_or_else(|| default_acf_lags(n))),
        confidence_bound: confidence_bound(n, CONFIDENCE),
        n_obs: n,
    };

    display.show(&pacf);
    display.show(&acf);

    Ok(ArimaDiagnostics {
        adf_statistic: adf.statistic,
        p_value: adf.p_value,
        adf,
        differenced,
        pacf,
        acf,
    })
}

/// Logs each correlogram lag through `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDisplay;

impl CorrelogramDisplay for TracingDisplay {
    fn show(&mut self, correlogram: &Correlogram) {
        info!(
            kind = %correlogram.kind,
            nlags = correlogram.nlags(),
            bound = correlogram.confidence_bound,
            significant = ?correlogram.significant_lags(),
            "correlogram"
        );
        for (lag, value) in correlogram.values.iter().enumerate() {
            trace!(kind = %correlogram.kind, lag, value, "correlogram lag");
        }
    }
}

/// Discards correlograms
#[derive(Debug, Clone, Copy, Default)]
pub struct NullDisplay;

impl CorrelogramDisplay for NullDisplay {
    fn show(&mut self, _correlogram: &Correlogram) {}
}
