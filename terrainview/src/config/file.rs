//! Configuration file handling for `config.ini`.
//!
//! Settings structs live in [`super::settings`], constants in
//! [`super::defaults`], parsing in [`super::parser`] and serialization in
//! [`super::writer`].

use ini::Ini;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::settings::ConfigFile;

/// Configuration file errors.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] ini::Error),

    /// Failed to write config file
    #[error("Failed to write config file: {0}")]
    WriteError(String),

    /// Invalid configuration value
    #[error("Invalid configuration: {section}.{key} = '{value}' - {reason}")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
        reason: String,
    },

    /// Failed to create config directory
    #[error("Failed to create config directory: {0}")]
    DirectoryError(std::io::Error),
}

impl ConfigFile {
    /// Load configuration from the default path.
    ///
    /// If the file doesn't exist, returns defaults.
    pub fn load() -> Result<Self, ConfigFileError> {
        Self::load_from(&config_file_path())
    }

    /// Load configuration from a specific path.
    ///
    /// If the file doesn't exist, returns defaults.
    ///
    /// # Errors
    ///
    /// * [`ConfigFileError::ReadError`] if the file exists but is not valid INI
    /// * [`ConfigFileError::InvalidValue`] if a key holds an unusable value
    pub fn load_from(path: &Path) -> Result<Self, ConfigFileError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file(path)?;
        super::parser::parse_ini(&ini)
    }

    /// Save configuration to the default path.
    pub fn save(&self) -> Result<(), ConfigFileError> {
        self.save_to(&config_file_path())
    }

    /// Save configuration to a specific path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigFileError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigFileError::DirectoryError)?;
        }

        let content = super::writer::to_config_string(self);
        std::fs::write(path, content).map_err(|e| ConfigFileError::WriteError(e.to_string()))
    }
}

/// Get the path to the config directory (`<config dir>/terrainview`).
pub fn config_directory() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("terrainview")
}

/// Get the path to the config file (`<config dir>/terrainview/config.ini`).
pub fn config_file_path() -> PathBuf {
    config_directory().join("config.ini")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_ARCHIVE_BASE_URL;
    use crate::contour::ThresholdBand;

    #[test]
    fn test_default_config() {
        let config = ConfigFile::default();

        assert_eq!(config.archive.base_url, DEFAULT_ARCHIVE_BASE_URL);
        assert_eq!(config.archive.low_zoom_cutoff, 12);
        assert_eq!(config.archive.grid_shift, 6);
        assert!(config.archive.directory.is_none());
        assert!(!config.dem.use_protocol);
        assert_eq!(config.contour.thresholds.len(), 2);
        assert_eq!(config.contour.max_zoom, 17);
    }

    #[test]
    fn test_load_nonexistent_returns_defaults() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nonexistent.ini");

        let config = ConfigFile::load_from(&config_path).unwrap();
        assert_eq!(config, ConfigFile::default());
    }

    #[test]
    fn test_load_partial_file_overlays_defaults() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.ini");
        std::fs::write(
            &config_path,
            "[archive]\ngrid_shift = 5\n\n[contour]\nthresholds = 11:200,1000\n",
        )
        .unwrap();

        let config = ConfigFile::load_from(&config_path).unwrap();
        assert_eq!(config.archive.grid_shift, 5);
        assert_eq!(config.archive.low_zoom_cutoff, 12);
        assert_eq!(
            config.contour.thresholds,
            vec![ThresholdBand::new(11, vec![200, 1000])]
        );
        assert_eq!(config.dem, ConfigFile::default().dem);
    }

    #[test]
    fn test_load_invalid_value_names_key() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.ini");
        std::fs::write(&config_path, "[archive]\nlow_zoom_cutoff = twelve\n").unwrap();

        match ConfigFile::load_from(&config_path) {
            Err(ConfigFileError::InvalidValue { section, key, .. }) => {
                assert_eq!(section, "archive");
                assert_eq!(key, "low_zoom_cutoff");
            }
            other => panic!("expected InvalidValue, got {:?}", other),
        }
    }

    #[test]
    fn test_save_then_load_preserves_settings() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.ini");

        let mut config = ConfigFile::default();
        config.archive.directory = Some(temp_dir.path().join("archives"));
        config.dem.use_protocol = true;
        config.dem.exaggeration = 1.5;
        config.contour.fields.layer_name = "isolines".to_string();
        config.save_to(&config_path).unwrap();

        let loaded = ConfigFile::load_from(&config_path).unwrap();
        assert_eq!(loaded, config);
    }
}
