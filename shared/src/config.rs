use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Config bundled into the build.
pub const BUNDLED_CONFIG: &str = include_str!("../../config/detector.yaml");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub base_url: String,
    pub predict_path: String,
    pub export_filename: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            predict_path: "/multi_predict".to_string(),
            export_filename: "deepfake_results.csv".to_string(),
        }
    }
}

impl ClientConfig {
    /// Loads the bundled config, then applies `DETECTOR_API_BASE` if it was
    /// set when the crate was compiled.
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::from_yaml_str(BUNDLED_CONFIG)?;
        match option_env!("DETECTOR_API_BASE") {
            Some(base_url) if !base_url.trim().is_empty() => config.with_base_url(base_url),
            _ => Ok(config),
        }
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: ClientConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, ConfigError> {
        self.base_url = base_url.trim().to_string();
        self.validate()?;
        Ok(self)
    }

    /// Full URL of the batch prediction endpoint.
    pub fn predict_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.predict_path.trim_start_matches('/')
        )
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let base = self.base_url.as_str();
        let host = base
            .strip_prefix("http://")
            .or_else(|| base.strip_prefix("https://"));
        match host {
            Some(rest) if !rest.trim_matches('/').is_empty() => Ok(()),
            _ => Err(ConfigError::InvalidBaseUrl(self.base_url.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_config_matches_defaults() {
        let config = ClientConfig::from_yaml_str(BUNDLED_CONFIG).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.predict_url(), "http://localhost:5000/multi_predict");
    }

    #[test]
    fn test_partial_yaml_falls_back_to_defaults() {
        let config = ClientConfig::from_yaml_str("base_url: https://detector.example.org/\n").unwrap();
        assert_eq!(config.export_filename, "deepfake_results.csv");
        assert_eq!(
            config.predict_url(),
            "https://detector.example.org/multi_predict"
        );
    }

    #[test]
    fn test_predict_url_joins_slashes_once() {
        let config = ClientConfig {
            base_url: "http://10.0.0.5:8080/api///".into(),
            predict_path: "multi_predict".into(),
            ..Default::default()
        };
        assert_eq!(config.predict_url(), "http://10.0.0.5:8080/api/multi_predict");
    }

    #[test]
    fn test_rejects_non_http_base_url() {
        let err = ClientConfig::from_yaml_str("base_url: localhost:5000\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBaseUrl(ref url) if url == "localhost:5000"));

        let err = ClientConfig::default().with_base_url("https://").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBaseUrl(_)));
    }

    #[test]
    fn test_with_base_url_trims_whitespace() {
        let config = ClientConfig::default()
            .with_base_url("  http://inference:5000 ")
            .unwrap();
        assert_eq!(config.base_url, "http://inference:5000");
    }

    #[test]
    fn test_malformed_yaml_is_parse_error() {
        let err = ClientConfig::from_yaml_str("base_url: [unclosed").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
