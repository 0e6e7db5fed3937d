//! Augmented Dickey-Fuller unit-root test
//!
//! Regression (constant only):
//!
//! `Δy_t = α + β*y_{t-1} + Σ γ_i*Δy_{t-i} + ε_t`
//!
//! H0: the series has a unit root (β = 0). The statistic is the t-value
//! of β; p-values and critical values come from MacKinnon's response
//! surfaces. The number of lagged differences is either fixed or chosen by
//! AIC over `0..=max_lag`, with every candidate fitted on the same sample.

use super::mackinnon::{mackinnon_critical_values, mackinnon_p_value};
use crate::utils::preprocessing::difference;
use algorithm_spi::{Result, TsError};
use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};

/// Lag selection for the ADF regression
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdfOptions {
    /// Upper bound on lagged differences; `None` uses `ceil(12 * (n/100)^(1/4))`
    pub max_lag: Option<usize>,
    /// Pick the lag by AIC (true) or use `max_lag` as is (false)
    pub autolag: bool,
}

impl Default for AdfOptions {
    fn default() -> Self {
        Self {
            max_lag: None,
            autolag: true,
        }
    }
}

/// Critical values of the test statistic
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CriticalValues {
    pub one_percent: f64,
    pub five_percent: f64,
    pub ten_percent: f64,
}

/// Outcome of an ADF test
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdfResult {
    /// t-statistic of the lagged level coefficient
    pub statistic: f64,
    /// MacKinnon approximate p-value
    pub p_value: f64,
    /// Number of lagged differences in the final regression
    pub used_lag: usize,
    /// Observations in the final regression
    pub n_obs: usize,
    pub critical_values: CriticalValues,
    /// AIC of the selected lag (autolag only)
    pub ic_best: Option<f64>,
}

impl AdfResult {
    /// Whether H0 (unit root) is rejected at `significance`
    pub fn is_stationary(&self, significance: f64) -> bool {
        self.p_value < significance
    }
}

/// Default lag bound: `ceil(12 * (nobs / 100)^(1/4))`
pub fn default_max_lag(nobs: usize) -> usize {
    (12.0 * (nobs as f64 / 100.0).powf(0.25)).ceil() as usize
}

/// Run the Augmented Dickey-Fuller test on `data`
pub fn adf_test(data: &[f64], options: &AdfOptions) -> Result<AdfResult> {
    TsError::check_finite(data)?;

    let nobs = data.len();
    // One trend term (the constant): the lag bound is nobs/2 - 2
    let lag_cap = match (nobs / 2).checked_sub(2) {
        Some(cap) => cap,
        None => {
            return Err(TsError::InsufficientData {
                required: 4,
                actual: nobs,
            })
        }
    };
    let max_lag = options
        .max_lag
        .unwrap_or_else(|| default_max_lag(nobs))
        .min(lag_cap);

    let diff = difference(data, 1);

    let (used_lag, ic_best) = if options.autolag {
        let design = LagDesign::new(data, &diff, max_lag);
        let mut best: Option<(usize, f64)> = None;

        for lag in 0..=max_lag {
            let fit = Ols::fit(&design.y, &design.x.columns(0, 2 + lag).into_owned())?;
            let aic = fit.aic();
            if best.map_or(true, |(_, best_aic)| aic < best_aic) {
                best = Some((lag, aic));
            }
        }

        match best {
            Some((lag, aic)) => (lag, Some(aic)),
            None => (max_lag, None),
        }
    } else {
        (max_lag, None)
    };

    let design = LagDesign::new(data, &diff, used_lag);
    let fit = Ols::fit(&design.y, &design.x)?;
    let statistic = fit.t_value(1)?;

    let (one_percent, five_percent, ten_percent) = mackinnon_critical_values(design.rows());

    Ok(AdfResult {
        statistic,
        p_value: mackinnon_p_value(statistic),
        used_lag,
        n_obs: design.rows(),
        critical_values: CriticalValues {
            one_percent,
            five_percent,
            ten_percent,
        },
        ic_best,
    })
}

/// Design matrix `[1, y_{t-1}, Δy_{t-1}, ..., Δy_{t-lag}]` and target `Δy_t`
struct LagDesign {
    x: DMatrix<f64>,
    y: DVector<f64>,
}

impl LagDesign {
    fn new(levels: &[f64], diff: &[f64], lag: usize) -> Self {
        let rows = diff.len().saturating_sub(lag);
        let cols = 2 + lag;

        let x = DMatrix::from_fn(rows, cols, |i, j| {
            let t = i + lag;
            match j {
                0 => 1.0,
                1 => levels[t],
                k => diff[t - (k - 1)],
            }
        });
        let y = DVector::from_fn(rows, |i, _| diff[i + lag]);

        Self { x, y }
    }

    fn rows(&self) -> usize {
        self.y.len()
    }
}

/// Ordinary least squares fit
struct Ols {
    beta: DVector<f64>,
    xtx_inv: DMatrix<f64>,
    ssr: f64,
    nobs: usize,
    k: usize,
}

impl Ols {
    fn fit(y: &DVector<f64>, x: &DMatrix<f64>) -> Result<Self> {
        let (nobs, k) = x.shape();
        if nobs <= k {
            return Err(TsError::InsufficientData {
                required: k + 1,
                actual: nobs,
            });
        }

        // OLS: β = (X'X)^(-1) X'y
        let xt = x.transpose();
        let xtx_inv = (&xt * x).try_inverse().ok_or_else(|| {
            TsError::NumericalError("singular design matrix in ADF regression".to_string())
        })?;
        let beta = &xtx_inv * (&xt * y);

        let residuals = y - x * &beta;
        let ssr = residuals.iter().map(|r| r * r).sum();

        Ok(Self {
            beta,
            xtx_inv,
            ssr,
            nobs,
            k,
        })
    }

    /// Gaussian log-likelihood based AIC with `k` parameters
    fn aic(&self) -> f64 {
        let n = self.nobs as f64;
        let llf = -n / 2.0 * ((2.0 * std::f64::consts::PI).ln() + (self.ssr / n).ln() + 1.0);
        -2.0 * llf + 2.0 * self.k as f64
    }

    fn t_value(&self, idx: usize) -> Result<f64> {
        let sigma2 = self.ssr / (self.nobs - self.k) as f64;
        let se = (sigma2 * self.xtx_inv[(idx, idx)]).sqrt();
        if !(se > 0.0) || !se.is_finite() {
            return Err(TsError::NumericalError(
                "degenerate standard error in ADF regression".to_string(),
            ));
        }
        Ok(self.beta[idx] / se)
    }
}
