//! terrainview CLI - Command-line interface
//!
//! Inspect how terrain tiles map onto archives, which contour intervals are
//! drawn at each zoom, and fetch tiles through the protocol handler.

mod commands;
mod error;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use terrainview::app::{AppConfig, TerrainViewApp};
use terrainview::archive::MemoryArchiveReader;
use terrainview::logging::init_logging;
use terrainview::peaks::PeakCatalog;

use commands::common::load_config;
use commands::contours::ContoursArgs;
use commands::fetch::FetchArgs;
use commands::peaks::PeaksArgs;
use commands::resolve::ResolveArgs;
use error::CliError;

#[derive(Parser)]
#[command(name = "terrainview")]
#[command(version, about = "Terrain archive addressing and contour policy tools", long_about = None)]
struct Cli {
    /// Path to config.ini (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a config file with every setting at its default
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Show which archive serves a tile
    Resolve(ResolveArgs),

    /// Show contour intervals per zoom level
    Contours(ContoursArgs),

    /// Print the contour tile URL template, or decode one
    Template {
        /// Template URL to decode instead of printing the configured one
        #[arg(long)]
        parse: Option<String>,
    },

    /// Print the terrain, hillshade and contour style sources as JSON
    Sources,

    /// List the built-in peaks, or show one
    Peaks(PeaksArgs),

    /// Fetch a tile from local archives through the protocol handler
    Fetch(FetchArgs),
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        e.exit();
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config_path = cli.config.as_deref();

    // init must work even when the existing file is broken
    if let Commands::Init { force } = cli.command {
        return commands::init::run(config_path, force);
    }

    let file = load_config(config_path)?;
    let _logging_guard = init_logging(&file.logging.directory, &file.logging.file)
        .map_err(|e| CliError::LoggingInit(e.to_string()))?;

    let config = AppConfig::from_config_file(&file)?;

    match cli.command {
        Commands::Init { .. } => Ok(()),
        Commands::Resolve(args) => commands::resolve::run(&args, &file, &config),
        Commands::Contours(args) => commands::contours::run(&args, &config),
        Commands::Template { parse: Some(url) } => commands::style::run_parse_template(&url),
        Commands::Template { parse: None } => {
            // No tiles are read, so an empty reader is enough
            let app = TerrainViewApp::start_with(config, Arc::new(MemoryArchiveReader::new()))?;
            commands::style::run_template(&app)
        }
        Commands::Sources => {
            let app = TerrainViewApp::start_with(config, Arc::new(MemoryArchiveReader::new()))?;
            commands::style::run_sources(&app)
        }
        Commands::Peaks(args) => {
            commands::peaks::run(&args, &PeakCatalog::japan(), &config.layout)
        }
        Commands::Fetch(args) => commands::fetch::run(&args, &file, config),
    }
}
