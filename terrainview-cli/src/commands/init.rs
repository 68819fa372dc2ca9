//! Init command - write a configuration file with every setting.

use std::path::Path;

use terrainview::config::{config_file_path, ConfigFile};

use crate::error::CliError;

/// Run the init command.
///
/// An existing file is kept unless `force` is set.
pub fn run(path: Option<&Path>, force: bool) -> Result<(), CliError> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(config_file_path);

    if path.exists() && !force {
        println!("Configuration file already exists: {}", path.display());
        println!("Use --force to overwrite it with defaults.");
        return Ok(());
    }

    ConfigFile::default().save_to(&path)?;

    println!("Configuration file: {}", path.display());
    println!();
    println!("Edit this file to customize archive addressing and contour thresholds.");
    Ok(())
}
