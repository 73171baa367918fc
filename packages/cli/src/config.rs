use pagesmith_editor::GridLandingPolicy;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_NAME: &str = "pagesmith.config.json";

/// Pagesmith configuration file format
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Document name; seeds node ids
    #[serde(default = "default_document_name")]
    pub document_name: String,

    /// Column that adds into a selected grid land in
    #[serde(default)]
    pub landing_column: usize,

    /// Log filter used when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_document_name() -> String {
    "untitled".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = Self::path(cwd);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    pub fn path(cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME)
    }

    pub fn insertion_policy(&self) -> GridLandingPolicy {
        GridLandingPolicy::new(self.landing_column)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            document_name: default_document_name(),
            landing_column: 0,
            log_level: default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "documentName": "brochure",
            "landingColumn": 1,
            "logLevel": "debug"
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.document_name, "brochure");
        assert_eq!(config.landing_column, 1);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.insertion_policy(), GridLandingPolicy::new(1));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{ "landingColumn": 2 }"#).unwrap();
        assert_eq!(config.document_name, "untitled");
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.document_name, "untitled");
        assert_eq!(config.landing_column, 0);
    }
}
