//! Experiment configuration types.

use forecast_core::DiagnosticsConfig;
use forecast_spi::{ForecastError, ModelOrder, Result};
use frame_core::{parse_cutoff, SplitOptions, DEFAULT_VALUE_COLUMN};
use serde::{Deserialize, Serialize};

fn default_detrend() -> bool {
    true
}

fn default_value_column() -> String {
    DEFAULT_VALUE_COLUMN.to_string()
}

/// Which station to forecast and where its test window starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitConfig {
    /// Station identifier
    pub station: String,
    /// Cutoff as `YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DDTHH:MM:SS` or `YYYY-MM-DD`
    pub cutoff: String,
    /// Compute the (logged only) linear detrend
    #[serde(default = "default_detrend")]
    pub detrend: bool,
    /// Column holding the observations
    #[serde(default = "default_value_column")]
    pub value_column: String,
}

impl SplitConfig {
    /// Create a split configuration with default detrend and value column.
    pub fn new(station: &str, cutoff: &str) -> Self {
        Self {
            station: station.to_string(),
            cutoff: cutoff.to_string(),
            detrend: default_detrend(),
            value_column: default_value_column(),
        }
    }

    /// Resolve into splitter options, parsing the cutoff.
    pub fn to_options(&self) -> Result<SplitOptions> {
        let cutoff = parse_cutoff(&self.cutoff)?;
        Ok(SplitOptions::new(self.station.as_str(), cutoff)
            .detrend(self.detrend)
            .value_column(self.value_column.as_str()))
    }
}

/// Full configuration of one forecasting experiment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentConfig {
    pub split: SplitConfig,
    /// Model refitted at every rolling step
    #[serde(default)]
    pub order: ModelOrder,
    /// Run parameter diagnostics on the training window first
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagnostics: Option<DiagnosticsConfig>,
}

impl ExperimentConfig {
    /// Create a configuration with the default model order.
    pub fn new(split: SplitConfig) -> Self {
        Self {
            split,
            order: ModelOrder::default(),
            diagnostics: None,
        }
    }

    /// Start a builder.
    pub fn builder() -> ExperimentConfigBuilder {
        ExperimentConfigBuilder::new()
    }

    /// Parse from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ForecastError::Config(e.to_string()))
    }

    /// Serialize to pretty JSON.
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| ForecastError::Config(e.to_string()))
    }
}

/// Builder for ExperimentConfig.
#[derive(Debug, Default)]
pub struct ExperimentConfigBuilder {
    station: Option<String>,
    cutoff: Option<String>,
    detrend: Option<bool>,
    value_column: Option<String>,
    order: Option<ModelOrder>,
    diagnostics: Option<DiagnosticsConfig>,
}

impl ExperimentConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the station.
    pub fn station(mut self, station: &str) -> Self {
        self.station = Some(station.to_string());
        self
    }

    /// Set the cutoff timestamp.
    pub fn cutoff(mut self, cutoff: &str) -> Self {
        self.cutoff = Some(cutoff.to_string());
        self
    }

    pub fn detrend(mut self, detrend: bool) -> Self {
        self.detrend = Some(detrend);
        self
    }

    pub fn value_column(mut self, column: &str) -> Self {
        self.value_column = Some(column.to_string());
        self
    }

    /// Set the model order.
    pub fn order(mut self, order: ModelOrder) -> Self {
        self.order = Some(order);
        self
    }

    /// Enable parameter diagnostics.
    pub fn diagnostics(mut self, config: DiagnosticsConfig) -> Self {
        self.diagnostics = Some(config);
        self
    }

    /// Build the configuration.
    ///
    /// The cutoff is validated here so a bad timestamp fails before any
    /// data is touched.
    pub fn build(self) -> Result<ExperimentConfig> {
        let split = SplitConfig {
            station: self
                .station
                .ok_or_else(|| ForecastError::Config("station is required".to_string()))?,
            cutoff: self
                .cutoff
                .ok_or_else(|| ForecastError::Config("cutoff is required".to_string()))?,
            detrend: self.detrend.unwrap_or_else(default_detrend),
            value_column: self.value_column.unwrap_or_else(default_value_column),
        };
        parse_cutoff(&split.cutoff)?;

        Ok(ExperimentConfig {
            split,
            order: self.order.unwrap_or_default(),
            diagnostics: self.diagnostics,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use frame_spi::FrameError;

    #[test]
    fn test_split_config_defaults() {
        let config = SplitConfig::new("A", "2021-03-01 02:30:00");
        assert!(config.detrend);
        assert_eq!(config.value_column, "traffic");

        let options = config.to_options().unwrap();
        assert_eq!(options.station, "A");
        assert!(options.detrend);
    }

    #[test]
    fn test_split_config_bad_cutoff() {
        let config = SplitConfig::new("A", "yesterday");
        assert_eq!(
            config.to_options().unwrap_err(),
            ForecastError::Frame(FrameError::InvalidTimestamp("yesterday".to_string()))
        );
    }

    #[test]
    fn test_builder_success() {
        let config = ExperimentConfig::builder()
            .station("A")
            .cutoff("2021-03-01")
            .order(ModelOrder::ExponentialSmoothing)
            .detrend(false)
            .build()
            .unwrap();

        assert_eq!(config.split.station, "A");
        assert!(!config.split.detrend);
        assert_eq!(config.order, ModelOrder::ExponentialSmoothing);
        assert!(config.diagnostics.is_none());
    }

    #[test]
    fn test_builder_default_order() {
        let config = ExperimentConfig::builder()
            .station("A")
            .cutoff("2021-03-01")
            .build()
            .unwrap();
        assert_eq!(config.order, ModelOrder::arima(1, 0, 1));
    }

    #[test]
    fn test_builder_missing_station() {
        let result = ExperimentConfig::builder().cutoff("2021-03-01").build();
        assert_eq!(
            result.unwrap_err(),
            ForecastError::Config("station is required".to_string())
        );
    }

    #[test]
    fn test_builder_rejects_bad_cutoff() {
        let result = ExperimentConfig::builder()
            .station("A")
            .cutoff("03/01/2021")
            .build();
        assert!(matches!(result, Err(ForecastError::Frame(_))));
    }

    #[test]
    fn test_json_minimal() {
        let config = ExperimentConfig::from_json_str(
            r#"{"split": {"station": "A", "cutoff": "2021-03-01 02:30:00"}}"#,
        )
        .unwrap();

        assert_eq!(config.order, ModelOrder::default());
        assert!(config.split.detrend);
        assert_eq!(config.split.value_column, "traffic");
    }

    #[test]
    fn test_json_full() {
        let config = ExperimentConfig::from_json_str(
            r#"{
                "split": {"station": "B", "cutoff": "2021-03-01", "detrend": false, "value_column": "count"},
                "order": {"family": "arima", "p": 2, "d": 1, "q": 0},
                "diagnostics": {"nlags": 8}
            }"#,
        )
        .unwrap();

        assert_eq!(config.order, ModelOrder::arima(2, 1, 0));
        assert_eq!(config.split.value_column, "count");
        assert_eq!(config.diagnostics.unwrap().nlags, Some(8));
    }

    #[test]
    fn test_json_invalid() {
        let result = ExperimentConfig::from_json_str(r#"{"order": {}}"#);
        assert!(matches!(result, Err(ForecastError::Config(_))));
    }

    #[test]
    fn test_json_roundtrip_keeps_order() {
        let config = ExperimentConfig::builder()
            .station("A")
            .cutoff("2021-03-01")
            .order(ModelOrder::arima(3, 0, 2))
            .build()
            .unwrap();

        let json = config.to_json_string().unwrap();
        assert!(json.contains("\"family\": \"arima\""));
        assert_eq!(ExperimentConfig::from_json_str(&json).unwrap(), config);
    }
}
