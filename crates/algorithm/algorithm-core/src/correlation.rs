//! Autocorrelation analysis
//!
//! ACF and PACF estimates used to read candidate MA and AR orders off a
//! (differenced) series, plus the Levinson-Durbin recursion that ARIMA also
//! uses to solve the Yule-Walker equations.

/// Autocovariances for lags `0..=max_lag`, normalized by `n` (biased estimator)
pub fn autocovariance(data: &[f64], max_lag: usize) -> Vec<f64> {
    let n = data.len();
    if n == 0 {
        return Vec::new();
    }

    let max_lag = max_lag.min(n - 1);
    let mean = data.iter().sum::<f64>() / n as f64;

    (0..=max_lag)
        .map(|lag| {
            data[lag..]
                .iter()
                .zip(data[..n - lag].iter())
                .map(|(a, b)| (a - mean) * (b - mean))
                .sum::<f64>()
                / n as f64
        })
        .collect()
}

/// Autocorrelation function for lags `0..=max_lag`
///
/// A constant series has zero variance; every lag is reported as 1.0.
pub fn acf(data: &[f64], max_lag: usize) -> Vec<f64> {
    let acov = autocovariance(data, max_lag);
    if acov.is_empty() {
        return acov;
    }

    let var = acov[0];
    if var.abs() < 1e-12 {
        return vec![1.0; acov.len()];
    }
    acov.iter().map(|c| c / var).collect()
}

/// Partial autocorrelation function for lags `0..=max_lag`
///
/// Yule-Walker estimate: the reflection coefficients of the Levinson-Durbin
/// recursion on the sample autocorrelations.
pub fn pacf(data: &[f64], max_lag: usize) -> Vec<f64> {
    let acf_values = acf(data, max_lag);
    if acf_values.is_empty() {
        return acf_values;
    }

    let order = acf_values.len() - 1;
    let (_, reflections) = levinson_durbin(&acf_values, order);

    let mut result = Vec::with_capacity(order + 1);
    result.push(1.0);
    result.extend(reflections);
    result.resize(order + 1, 0.0);
    result
}

/// Solve the Yule-Walker equations by Levinson-Durbin recursion
///
/// `autocov` must hold lags `0..=order`. Returns the AR coefficients of the
/// final order and the reflection coefficient found at each order. The
/// recursion stops early when the prediction error variance collapses; the
/// remaining coefficients stay zero.
pub fn levinson_durbin(autocov: &[f64], order: usize) -> (Vec<f64>, Vec<f64>) {
    let order = order.min(autocov.len().saturating_sub(1));
    let mut coeffs = vec![0.0; order];
    let mut reflections = Vec::with_capacity(order);

    if order == 0 || autocov[0].abs() < 1e-12 {
        return (coeffs, reflections);
    }

    let mut error = autocov[0];
    for k in 1..=order {
        let mut acc = autocov[k];
        for j in 1..k {
            acc -= coeffs[j - 1] * autocov[k - j];
        }

        let kappa = acc / error;
        let previous = coeffs.clone();
        coeffs[k - 1] = kappa;
        for j in 1..k {
            coeffs[j - 1] = previous[j - 1] - kappa * previous[k - j - 1];
        }
        reflections.push(kappa);

        error *= 1.0 - kappa * kappa;
        if error.abs() < 1e-12 {
            break;
        }
    }

    (coeffs, reflections)
}

/// Default ACF lag count: `min(10 * log10(n), n - 1)`
pub fn default_acf_lags(n: usize) -> usize {
    if n < 2 {
        return 0;
    }
    log_lags(n).min(n - 1)
}

/// Default PACF lag count: `min(10 * log10(n), n / 2 - 1)`
pub fn default_pacf_lags(n: usize) -> usize {
    log_lags(n).min((n / 2).saturating_sub(1))
}

fn log_lags(n: usize) -> usize {
    (10.0 * (n as f64).log10()).max(0.0) as usize
}

/// Half-width of the white-noise band: `z / sqrt(n)`
pub fn confidence_bound(n: usize, confidence: f64) -> f64 {
    let z = match confidence {
        c if c >= 0.99 => 2.576,
        c if c >= 0.95 => 1.96,
        c if c >= 0.90 => 1.645,
        _ => 1.96,
    };
    if n == 0 {
        return f64::INFINITY;
    }
    z / (n as f64).sqrt()
}
