use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable pointing at a JSON config file.
pub const CONFIG_ENV: &str = "YOUDASH_CONFIG";
/// Environment variable overriding `api.base_url`.
pub const API_URL_ENV: &str = "YOUDASH_API_URL";
/// Config file looked up in the working directory when [`CONFIG_ENV`] is unset.
pub const DEFAULT_CONFIG_FILE: &str = "youdash.json";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub api: ApiConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub loading_overlay_ms: u64,
    pub window_title: String,
    pub window_width: f64,
    pub window_height: f64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout_secs: 30,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            loading_overlay_ms: 500,
            window_title: "YouDash".to_string(),
            window_width: 1280.0,
            window_height: 832.0,
        }
    }
}

impl DashboardConfig {
    /// Loads the config from the environment, falling back to defaults.
    ///
    /// A broken file is logged and ignored rather than aborting startup.
    pub fn load() -> Self {
        let path = std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .or_else(|| {
                let local = PathBuf::from(DEFAULT_CONFIG_FILE);
                local.exists().then_some(local)
            });

        let config = match path {
            Some(path) => match Self::from_file(&path) {
                Ok(config) => {
                    log::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    log::warn!("Ignoring config {}: {e}", path.display());
                    Self::default()
                }
            },
            None => {
                log::info!("No config file, using defaults");
                Self::default()
            }
        };

        config.with_api_url(std::env::var(API_URL_ENV).ok())
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(content)?;
        Ok(config.normalized())
    }

    /// Applies an `api.base_url` override; blank values are ignored.
    pub fn with_api_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
            self.api.base_url = url.trim().to_string();
        }
        self.normalized()
    }

    fn normalized(mut self) -> Self {
        let trimmed = self.api.base_url.trim_end_matches('/').len();
        self.api.base_url.truncate(trimmed);
        self
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_stock_backend() {
        let config = DashboardConfig::default();
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.ui.loading_overlay_ms, 500);
        assert_eq!(config.ui.window_title, "YouDash");
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let config =
            DashboardConfig::from_json(r#"{"api":{"base_url":"https://dash.example.com/"}}"#)
                .unwrap();
        assert_eq!(config.api.base_url, "https://dash.example.com");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.ui, UiConfig::default());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = DashboardConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = DashboardConfig::from_file(Path::new("/nonexistent/youdash.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn api_url_override() {
        let config = DashboardConfig::default().with_api_url(Some(" http://10.0.0.2:9000/ ".into()));
        assert_eq!(config.api.base_url, "http://10.0.0.2:9000");

        let config = DashboardConfig::default().with_api_url(Some("   ".into()));
        assert_eq!(config.api.base_url, "http://localhost:8000");

        let config = DashboardConfig::default().with_api_url(None);
        assert_eq!(config.api.base_url, "http://localhost:8000");
    }
}
