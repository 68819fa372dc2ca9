//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use std::fmt;
use std::process;

use terrainview::app::AppError;
use terrainview::config::ConfigFileError;
use terrainview::contour::PolicyError;
use terrainview::coord::CoordError;
use terrainview::protocol::FetchError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration file could not be loaded or saved
    Config(ConfigFileError),
    /// Application failed to start
    Startup(AppError),
    /// Invalid tile coordinates or location
    Coordinates(CoordError),
    /// Malformed contour template
    Template(PolicyError),
    /// Tile fetch failed
    Fetch(FetchError),
    /// Invalid combination of arguments
    Usage(String),
    /// Failed to create the Tokio runtime
    Runtime(std::io::Error),
    /// Failed to write output file
    FileWrite { path: String, error: std::io::Error },
    /// Failed to render JSON output
    Json(serde_json::Error),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        // Print additional help for specific errors
        match self {
            CliError::Config(ConfigFileError::InvalidValue { .. }) => {
                eprintln!();
                eprintln!("Check the value in your config file, or regenerate it with:");
                eprintln!("  terrainview init --force");
            }
            CliError::Startup(AppError::Policy(_)) => {
                eprintln!();
                eprintln!("Contour thresholds are written as zoom:minor,major bands, e.g.:");
                eprintln!("  thresholds = 12:100,500;14:20,100");
                eprintln!("Zoom floors must ascend and intervals must be positive and ascending.");
            }
            CliError::Fetch(FetchError::TileNotFound { archive, .. }) => {
                eprintln!();
                eprintln!(
                    "The tile belongs to archive '{}'. Make sure it is unpacked under the",
                    archive
                );
                eprintln!("archive directory as <archive>/<z>/<x>/<y>.<ext>.");
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(e) => write!(f, "{}", e),
            CliError::Startup(e) => write!(f, "Failed to start: {}", e),
            CliError::Coordinates(e) => write!(f, "{}", e),
            CliError::Template(e) => write!(f, "Invalid contour template: {}", e),
            CliError::Fetch(e) => write!(f, "{}", e),
            CliError::Usage(msg) => write!(f, "{}", msg),
            CliError::Runtime(e) => write!(f, "Failed to create Tokio runtime: {}", e),
            CliError::FileWrite { path, error } => {
                write!(f, "Failed to write file '{}': {}", path, error)
            }
            CliError::Json(e) => write!(f, "Failed to render JSON: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Config(e) => Some(e),
            CliError::Startup(e) => Some(e),
            CliError::Coordinates(e) => Some(e),
            CliError::Template(e) => Some(e),
            CliError::Fetch(e) => Some(e),
            CliError::Runtime(e) => Some(e),
            CliError::FileWrite { error, .. } => Some(error),
            CliError::Json(e) => Some(e),
            CliError::LoggingInit(_) | CliError::Usage(_) => None,
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::Config(e)
    }
}

impl From<AppError> for CliError {
    fn from(e: AppError) -> Self {
        CliError::Startup(e)
    }
}

impl From<CoordError> for CliError {
    fn from(e: CoordError) -> Self {
        CliError::Coordinates(e)
    }
}

impl From<FetchError> for CliError {
    fn from(e: FetchError) -> Self {
        CliError::Fetch(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Json(e)
    }
}
