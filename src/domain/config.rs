use serde::{Deserialize, Serialize};

/// Audioscreen configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioscreenConfig {
    /// Global configuration
    #[serde(default)]
    pub global: GlobalConfig,
}

/// Global configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Default log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Classification threshold used when the CLI does not pass one
    #[serde(default = "default_threshold")]
    pub default_threshold: f64,
    /// Maximum number of leading bytes inspected by the classifier
    #[serde(default = "default_probe_limit_bytes")]
    pub probe_limit_bytes: usize,
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_threshold() -> f64 {
    0.45
}

fn default_probe_limit_bytes() -> usize {
    64 * 1024
}

impl Default for AudioscreenConfig {
    fn default() -> Self {
        Self {
            global: GlobalConfig::default(),
        }
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            default_threshold: default_threshold(),
            probe_limit_bytes: default_probe_limit_bytes(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_serialization() {
        let config = AudioscreenConfig::default();
        let toml_str = toml::to_string(&config).unwrap();
        let deserialized: AudioscreenConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(deserialized.global.default_threshold, 0.45);
    }

    #[test]
    fn test_defaults() {
        let config = AudioscreenConfig::default();
        assert_eq!(config.global.log_level, "info");
        assert_eq!(config.global.default_threshold, 0.45);
        assert_eq!(config.global.probe_limit_bytes, 64 * 1024);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: AudioscreenConfig = toml::from_str(
            r#"
            [global]
            default_threshold = 0.7
            "#,
        )
        .unwrap();
        assert_eq!(config.global.default_threshold, 0.7);
        assert_eq!(config.global.log_level, "info");
        assert_eq!(config.global.probe_limit_bytes, 64 * 1024);
    }

    #[test]
    fn test_empty_config_parses() {
        let config: AudioscreenConfig = toml::from_str("").unwrap();
        assert_eq!(config.global.default_threshold, 0.45);
    }
}
