//! Common types and utilities shared across CLI commands.

use std::path::Path;

use terrainview::config::ConfigFile;

use crate::error::CliError;

/// Load the config file from `path`, or from the default location.
///
/// A missing file yields defaults either way.
pub fn load_config(path: Option<&Path>) -> Result<ConfigFile, CliError> {
    let config = match path {
        Some(path) => ConfigFile::load_from(path)?,
        None => ConfigFile::load()?,
    };
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_explicit_path_gives_defaults() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config = load_config(Some(&temp_dir.path().join("none.ini"))).unwrap();
        assert_eq!(config, ConfigFile::default());
    }

    #[test]
    fn test_invalid_value_is_config_error() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("config.ini");
        std::fs::write(&path, "[contour]\nthresholds = 12:100,x\n").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }
}
