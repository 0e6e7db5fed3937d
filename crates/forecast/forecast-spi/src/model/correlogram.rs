//! Correlogram model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Autocorrelation or partial autocorrelation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorrelogramKind {
    Acf,
    Pacf,
}

impl fmt::Display for CorrelogramKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CorrelogramKind::Acf => f.write_str("ACF"),
            CorrelogramKind::Pacf => f.write_str("PACF"),
        }
    }
}

/// Correlation by lag, `values[k]` being lag `k` (lag 0 is 1.0)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Correlogram {
    pub kind: CorrelogramKind,
    pub values: Vec<f64>,
    /// White-noise band half-width at 95% confidence
    pub confidence_bound: f64,
    /// Length of the series the values were computed from
    pub n_obs: usize,
}

impl Correlogram {
    pub fn nlags(&self) -> usize {
        self.values.len().saturating_sub(1)
    }

    /// Lags from 1 whose value lies outside the confidence band
    pub fn significant_lags(&self) -> Vec<usize> {
        self.values
            .iter()
            .enumerate()
            .skip(1)
            .filter(|(_, v)| v.abs() > self.confidence_bound)
            .map(|(lag, _)| lag)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_significant_lags() {
        let correlogram = Correlogram {
            kind: CorrelogramKind::Pacf,
            values: vec![1.0, 0.6, -0.1, -0.35, 0.05],
            confidence_bound: 0.3,
            n_obs: 43,
        };
        assert_eq!(correlogram.nlags(), 4);
        assert_eq!(correlogram.significant_lags(), vec![1, 3]);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(CorrelogramKind::Acf.to_string(), "ACF");
        assert_eq!(CorrelogramKind::Pacf.to_string(), "PACF");
    }
}
