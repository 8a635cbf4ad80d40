use riskgate_core::{RiskGateError, RiskGateResult, Thresholds};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RiskGateConfig {
    #[serde(default)]
    pub thresholds: ThresholdsConfig,
    pub server: Option<ServerConfig>,
    #[serde(default)]
    pub save_header: bool,
}

#[derive(Debug, Deserialize)]
pub struct ThresholdsConfig {
    #[serde(default = "default_high")]
    pub high: f64,
    #[serde(default = "default_medium")]
    pub medium: f64,
}

impl Default for ThresholdsConfig {
    fn default() -> Self {
        Self {
            high: default_high(),
            medium: default_medium(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            port: default_port(),
        }
    }
}

fn default_high() -> f64 {
    50.0
}
fn default_medium() -> f64 {
    25.0
}
fn default_bind() -> String {
    "127.0.0.1".to_string()
}
fn default_port() -> u16 {
    8850
}

impl RiskGateConfig {
    pub fn from_file(path: &str) -> RiskGateResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| RiskGateError::Config(format!("{}: {}", path, e)))?;
        Ok(config)
    }

    pub fn thresholds(&self) -> Thresholds {
        Thresholds {
            high: self.thresholds.high,
            medium: self.thresholds.medium,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config: RiskGateConfig = toml::from_str("").unwrap();
        assert_eq!(config.thresholds.high, 50.0);
        assert_eq!(config.thresholds.medium, 25.0);
        assert!(!config.save_header);
        assert!(config.server.is_none());
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config: RiskGateConfig = toml::from_str(
            r#"
            save_header = true

            [thresholds]
            high = 75
            medium = 40

            [server]
            port = 9000
            "#,
        )
        .unwrap();

        assert_eq!(config.thresholds.high, 75.0);
        assert_eq!(config.thresholds.medium, 40.0);
        assert!(config.save_header);

        let server = config.server.unwrap();
        assert_eq!(server.port, 9000);
        assert_eq!(server.bind, "127.0.0.1");
    }

    #[test]
    fn missing_config_file_is_io_error() {
        let err = RiskGateConfig::from_file("/nonexistent/riskgate.toml").unwrap_err();
        assert!(matches!(err, RiskGateError::Io(_)));
    }

    #[test]
    fn invalid_config_file_is_config_error() {
        let path = std::env::temp_dir().join("riskgate-invalid-config.toml");
        std::fs::write(&path, "thresholds = 3").unwrap();

        let err = RiskGateConfig::from_file(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, RiskGateError::Config(_)));

        let _ = std::fs::remove_file(&path);
    }
}
