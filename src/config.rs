//! Application settings with optional JSON overrides.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Settings file looked up in the working directory.
pub const CONFIG_FILE: &str = "hamlog.json";

/// Failure loading `hamlog.json`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// The file is not valid JSON for [`AppConfig`].
    #[error("json parse error: {0}")]
    Json(#[from] serde_json::Error),
    /// A value is out of range.
    #[error("validation error: {0}")]
    Validation(String),
}

/// Window and storage settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Path of the SQLite log file.
    pub db_path: PathBuf,
    /// Window title.
    pub window_title: String,
    /// Initial window size in logical pixels.
    pub window_size: [f32; 2],
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from("hamlog.db"),
            window_title: "HamLog-Core".to_string(),
            window_size: [900.0, 500.0],
        }
    }
}

impl AppConfig {
    /// Reads settings from `path`, falling back to defaults when the file is absent.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            log::debug!("no settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let txt = std::fs::read_to_string(path)?;
        let cfg = Self::from_json(&txt)?;
        log::info!("loaded settings from {}", path.display());
        Ok(cfg)
    }

    /// Parses and validates settings. Missing keys take their defaults.
    pub fn from_json(txt: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(txt)?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.db_path.as_os_str().is_empty() {
            return Err(ConfigError::Validation("db_path must not be empty".into()));
        }
        if self.window_size.iter().any(|v| !v.is_finite() || *v <= 0.0) {
            return Err(ConfigError::Validation(
                "window_size entries must be positive".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_remaining_defaults() {
        let cfg = AppConfig::from_json(r#"{ "db_path": "field-day.db" }"#).expect("parse");
        assert_eq!(cfg.db_path, PathBuf::from("field-day.db"));
        assert_eq!(cfg.window_title, "HamLog-Core");
        assert_eq!(cfg.window_size, [900.0, 500.0]);
    }

    #[test]
    fn rejects_empty_db_path_and_bad_size() {
        assert!(matches!(
            AppConfig::from_json(r#"{ "db_path": "" }"#),
            Err(ConfigError::Validation(_))
        ));
        assert!(matches!(
            AppConfig::from_json(r#"{ "window_size": [0.0, 500.0] }"#),
            Err(ConfigError::Validation(_))
        ));
        assert!(matches!(
            AppConfig::from_json("{ not json"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::TempDir::new().expect("tmp");
        let cfg = AppConfig::load_or_default(dir.path().join(CONFIG_FILE)).expect("load");
        assert_eq!(cfg, AppConfig::default());
    }
}
