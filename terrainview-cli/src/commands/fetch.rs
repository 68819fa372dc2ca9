//! Fetch command - read a tile from unpacked archives through the protocol
//! handler, exactly as the map engine would request it.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use tracing::info;

use terrainview::app::{AppConfig, TerrainViewApp};
use terrainview::archive::DirectoryArchiveReader;
use terrainview::config::ConfigFile;

use crate::error::CliError;

/// Arguments for the fetch command.
#[derive(Debug, Args)]
pub struct FetchArgs {
    /// Tile URL on the terrain scheme, e.g. mapterhorn://14/14505/6469
    pub url: String,

    /// Directory of unpacked archives (<archive>/<z>/<x>/<y>.<ext>);
    /// overrides archive.directory from the config file
    #[arg(long)]
    pub archives: Option<PathBuf>,

    /// Write the tile to this file instead of printing its size
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

/// Run the fetch command.
pub fn run(args: &FetchArgs, file: &ConfigFile, config: AppConfig) -> Result<(), CliError> {
    let root = args
        .archives
        .clone()
        .or_else(|| file.archive.directory.clone())
        .ok_or_else(|| {
            CliError::Usage(
                "No archive directory. Pass --archives or set archive.directory in config.ini"
                    .to_string(),
            )
        })?;

    let reader = DirectoryArchiveReader::with_extension(&root, &file.archive.tile_extension);
    let app = TerrainViewApp::start_with(config, Arc::new(reader))?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(CliError::Runtime)?;
    let data = runtime.block_on(app.fetch(&args.url))?;

    info!(url = %args.url, bytes = data.len(), "Fetched tile");

    match &args.output {
        Some(path) => {
            std::fs::write(path, &data).map_err(|error| CliError::FileWrite {
                path: path.display().to_string(),
                error,
            })?;
            println!("Wrote {} bytes to {}", data.len(), path.display());
        }
        None => println!("{}: {} bytes", args.url, data.len()),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use terrainview::archive::ArchiveError;
    use terrainview::protocol::FetchError;

    fn app_config() -> AppConfig {
        AppConfig::from_config_file(&ConfigFile::default()).unwrap()
    }

    #[test]
    fn test_fetch_writes_tile_to_output() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let tile_dir = temp_dir.path().join("6-56-25").join("14").join("14505");
        std::fs::create_dir_all(&tile_dir).unwrap();
        std::fs::write(tile_dir.join("6469.webp"), b"tile").unwrap();

        let output = temp_dir.path().join("out.webp");
        let args = FetchArgs {
            url: "mapterhorn://14/14505/6469".to_string(),
            archives: Some(temp_dir.path().to_path_buf()),
            output: Some(output.clone()),
        };
        run(&args, &ConfigFile::default(), app_config()).unwrap();

        assert_eq!(std::fs::read(&output).unwrap(), b"tile");
    }

    #[test]
    fn test_fetch_missing_tile() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let args = FetchArgs {
            url: "mapterhorn://8/226/101".to_string(),
            archives: Some(temp_dir.path().to_path_buf()),
            output: None,
        };

        let err = run(&args, &ConfigFile::default(), app_config()).unwrap_err();
        assert!(matches!(
            err,
            CliError::Fetch(FetchError::TileNotFound { ref archive, .. }) if archive == "planet"
        ));
    }

    #[test]
    fn test_fetch_from_missing_archive_root() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let args = FetchArgs {
            url: "mapterhorn://8/226/101".to_string(),
            archives: Some(temp_dir.path().join("absent")),
            output: None,
        };

        let err = run(&args, &ConfigFile::default(), app_config()).unwrap_err();
        assert!(matches!(
            err,
            CliError::Fetch(FetchError::Archive(ArchiveError::Unavailable { .. }))
        ));
    }

    #[test]
    fn test_fetch_requires_archive_directory() {
        let args = FetchArgs {
            url: "mapterhorn://8/226/101".to_string(),
            archives: None,
            output: None,
        };

        let err = run(&args, &ConfigFile::default(), app_config()).unwrap_err();
        assert!(matches!(err, CliError::Usage(_)));
    }
}
