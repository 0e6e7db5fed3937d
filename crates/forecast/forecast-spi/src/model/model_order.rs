//! Model family and order selection

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which estimator the rolling forecaster refits at every step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "family", rename_all = "snake_case")]
pub enum ModelOrder {
    /// ARIMA with autoregressive order `p`, differencing `d`, moving
    /// average order `q`
    Arima { p: usize, d: usize, q: usize },
    /// Simple exponential smoothing; takes no structural order
    ExponentialSmoothing,
}

impl ModelOrder {
    pub fn arima(p: usize, d: usize, q: usize) -> Self {
        ModelOrder::Arima { p, d, q }
    }

    pub fn family(&self) -> &'static str {
        match self {
            ModelOrder::Arima { .. } => "arima",
            ModelOrder::ExponentialSmoothing => "exponential_smoothing",
        }
    }
}

impl Default for ModelOrder {
    fn default() -> Self {
        ModelOrder::Arima { p: 1, d: 0, q: 1 }
    }
}

impl fmt::Display for ModelOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelOrder::Arima { p, d, q } => write!(f, "ARIMA({},{},{})", p, d, q),
            ModelOrder::ExponentialSmoothing => write!(f, "ExponentialSmoothing"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_arima_101() {
        assert_eq!(ModelOrder::default(), ModelOrder::arima(1, 0, 1));
    }

    #[test]
    fn test_display() {
        assert_eq!(ModelOrder::arima(2, 1, 0).to_string(), "ARIMA(2,1,0)");
        assert_eq!(
            ModelOrder::ExponentialSmoothing.to_string(),
            "ExponentialSmoothing"
        );
    }

    #[test]
    fn test_serde_tagged_by_family() {
        let json = serde_json::to_string(&ModelOrder::arima(1, 0, 1)).unwrap();
        assert_eq!(json, r#"{"family":"arima","p":1,"d":0,"q":1}"#);

        let es: ModelOrder = serde_json::from_str(r#"{"family":"exponential_smoothing"}"#).unwrap();
        assert_eq!(es, ModelOrder::ExponentialSmoothing);
        assert_eq!(es.family(), "exponential_smoothing");
    }

    #[test]
    fn test_unknown_family_rejected() {
        let result: Result<ModelOrder, _> = serde_json::from_str(r#"{"family":"prophet"}"#);
        assert!(result.is_err());
    }
}
