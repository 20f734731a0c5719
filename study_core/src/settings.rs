//! # Settings
//!
//! Runtime configuration, read from a TOML file. Every field has a default,
//! so an empty file (or no file at all) is valid.
//!
//! ```toml
//! data_dir = "/home/me/.studylab"
//! progress_key = "study_progress"
//! answer_tolerance = 0.01
//! log_level = "info"
//! ```
//!
//! The `STUDYLAB_DATA_DIR` environment variable overrides `data_dir`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{StudyError, StudyResult};
use crate::exercises::DEFAULT_ANSWER_TOLERANCE;
use crate::progress::PROGRESS_KEY;
use crate::storage::validate_key;

#[cfg(not(target_arch = "wasm32"))]
use crate::storage::FileStore;

/// Environment variable that overrides [`Settings::data_dir`]
pub const DATA_DIR_ENV: &str = "STUDYLAB_DATA_DIR";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Directory the file store writes into
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Key of the persisted progress record
    #[serde(default = "default_progress_key")]
    pub progress_key: String,
    /// Absolute tolerance for exercise answers
    #[serde(default = "default_answer_tolerance")]
    pub answer_tolerance: f64,
    /// Default tracing filter for the CLI
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(".studylab")
}
fn default_progress_key() -> String {
    PROGRESS_KEY.to_string()
}
fn default_answer_tolerance() -> f64 {
    DEFAULT_ANSWER_TOLERANCE
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            progress_key: default_progress_key(),
            answer_tolerance: default_answer_tolerance(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Read settings from a TOML file. A missing file is an error.
    pub fn load(path: &Path) -> StudyResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| StudyError::config(path.display().to_string(), e.to_string()))?;
        let mut settings = Self::from_toml(&content).map_err(|e| match e {
            StudyError::ConfigError { reason, .. } => StudyError::config(path.display().to_string(), reason),
            other => other,
        })?;
        settings.apply_env_override(std::env::var(DATA_DIR_ENV).ok());
        debug!(path = %path.display(), ?settings, "Loaded settings");
        Ok(settings)
    }

    /// Read settings from `path` when given, otherwise use defaults.
    pub fn load_or_default(path: Option<&Path>) -> StudyResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let mut settings = Self::default();
                settings.apply_env_override(std::env::var(DATA_DIR_ENV).ok());
                Ok(settings)
            }
        }
    }

    /// Parse and validate settings from TOML text.
    pub fn from_toml(content: &str) -> StudyResult<Self> {
        let settings: Settings =
            toml::from_str(content).map_err(|e| StudyError::config("<inline>", e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> StudyResult<()> {
        if !(self.answer_tolerance.is_finite() && self.answer_tolerance > 0.0) {
            return Err(StudyError::invalid_input(
                "answer_tolerance",
                self.answer_tolerance.to_string(),
                "Tolerance must be a positive number",
            ));
        }
        validate_key(&self.progress_key)
    }

    /// Replace `data_dir` when an override is present and non-empty.
    pub fn apply_env_override(&mut self, data_dir: Option<String>) {
        if let Some(dir) = data_dir.filter(|d| !d.trim().is_empty()) {
            self.data_dir = PathBuf::from(dir);
        }
    }

    /// Open the file store rooted at `data_dir`.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn open_store(&self) -> StudyResult<FileStore> {
        FileStore::open(&self.data_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.data_dir, PathBuf::from(".studylab"));
        assert_eq!(settings.progress_key, "study_progress");
        assert_eq!(settings.answer_tolerance, 0.01);
        assert_eq!(settings.log_level, "warn");
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        assert_eq!(Settings::from_toml("").unwrap(), Settings::default());
    }

    #[test]
    fn test_partial_toml() {
        let settings = Settings::from_toml("answer_tolerance = 0.5\nlog_level = \"debug\"\n").unwrap();
        assert_eq!(settings.answer_tolerance, 0.5);
        assert_eq!(settings.log_level, "debug");
        assert_eq!(settings.progress_key, "study_progress");
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(Settings::from_toml("answer_tolerance = 0.0").is_err());
        assert!(Settings::from_toml("answer_tolerance = -1.0").is_err());
        assert!(Settings::from_toml("progress_key = \"bad/key\"").is_err());
        assert_eq!(
            Settings::from_toml("answer_tolerance = \"wide\"").unwrap_err().error_code(),
            "CONFIG_ERROR"
        );
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("studylab.toml");
        std::fs::write(&path, "progress_key = \"profile-1\"\n").unwrap();

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.progress_key, "profile-1");
    }

    #[test]
    fn test_load_missing_file_is_config_error() {
        let dir = TempDir::new().unwrap();
        let err = Settings::load(&dir.path().join("nope.toml")).unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_ERROR");
    }

    #[test]
    fn test_parse_error_names_the_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "data_dir = [").unwrap();

        match Settings::load(&path).unwrap_err() {
            StudyError::ConfigError { path: reported, .. } => assert!(reported.ends_with("broken.toml")),
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn test_env_override() {
        let mut settings = Settings::default();
        settings.apply_env_override(None);
        assert_eq!(settings.data_dir, PathBuf::from(".studylab"));

        settings.apply_env_override(Some("   ".to_string()));
        assert_eq!(settings.data_dir, PathBuf::from(".studylab"));

        settings.apply_env_override(Some("/tmp/elsewhere".to_string()));
        assert_eq!(settings.data_dir, PathBuf::from("/tmp/elsewhere"));
    }

    #[test]
    fn test_open_store_creates_data_dir() {
        let dir = TempDir::new().unwrap();
        let settings = Settings {
            data_dir: dir.path().join("data"),
            ..Settings::default()
        };
        let store = settings.open_store().unwrap();
        assert!(store.dir().is_dir());
    }
}
