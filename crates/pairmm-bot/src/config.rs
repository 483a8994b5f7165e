//! Application configuration.

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use pairmm_mm::MakerConfig;

/// Top-level configuration, loaded from TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Quoting strategy parameters.
    #[serde(default)]
    pub maker: MakerConfig,

    /// Host event channel capacity.
    #[serde(default = "default_event_buffer")]
    pub event_buffer: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            maker: MakerConfig::default(),
            event_buffer: default_event_buffer(),
        }
    }
}

impl AppConfig {
    /// Resolve the config path (explicit arg > `PAIRMM_CONFIG` > default)
    /// and load it. A missing file falls back to defaults with a warning.
    pub fn load(path: Option<&str>) -> AppResult<Self> {
        let config_path = path
            .map(str::to_string)
            .or_else(|| std::env::var("PAIRMM_CONFIG").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        let config = if std::path::Path::new(&config_path).exists() {
            Self::from_file(&config_path)?
        } else {
            tracing::warn!(path = %config_path, "Config file not found, using defaults");
            Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Load from a specific file.
    pub fn from_file(path: &str) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("Failed to read config: {e}")))?;

        toml::from_str(&content).map_err(|e| AppError::Config(format!("Failed to parse config: {e}")))
    }

    /// Validate all sections.
    pub fn validate(&self) -> AppResult<()> {
        self.maker
            .validate()
            .map_err(|e| AppError::Config(e.to_string()))?;
        if self.event_buffer == 0 {
            return Err(AppError::Config(
                "event_buffer must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_event_buffer() -> usize {
    1024
}
