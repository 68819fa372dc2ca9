//! Settings structs for all configuration sections.
//!
//! Each struct represents one `[section]` of the INI config file.
//! These are pure data types with no parsing or serialization logic.

use std::path::PathBuf;

use super::defaults::*;
use crate::archive::{
    DEFAULT_GRID_SHIFT, DEFAULT_LOW_ZOOM_CUTOFF, DEFAULT_LOW_ZOOM_KEY, DEFAULT_TILE_EXTENSION,
};
use crate::contour::{ContourFields, ThresholdBand};
use crate::source::DemEncoding;

/// Complete configuration loaded from config.ini.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigFile {
    /// Archive addressing settings
    pub archive: ArchiveSettings,
    /// Terrain source settings
    pub dem: DemSettings,
    /// Contour settings
    pub contour: ContourSettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

/// `[archive]` section.
#[derive(Debug, Clone, PartialEq)]
pub struct ArchiveSettings {
    pub base_url: String,
    pub scheme: String,
    pub low_zoom_cutoff: u8,
    pub low_zoom_key: String,
    pub grid_shift: u8,
    pub tile_extension: String,
    /// Local directory of unpacked archives, if any.
    pub directory: Option<PathBuf>,
}

impl Default for ArchiveSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_ARCHIVE_BASE_URL.to_string(),
            scheme: DEFAULT_ARCHIVE_SCHEME.to_string(),
            low_zoom_cutoff: DEFAULT_LOW_ZOOM_CUTOFF,
            low_zoom_key: DEFAULT_LOW_ZOOM_KEY.to_string(),
            grid_shift: DEFAULT_GRID_SHIFT,
            tile_extension: DEFAULT_TILE_EXTENSION.to_string(),
            directory: None,
        }
    }
}

/// `[dem]` section.
#[derive(Debug, Clone, PartialEq)]
pub struct DemSettings {
    pub tilejson_url: String,
    /// Serve terrain through the archive protocol instead of TileJSON.
    pub use_protocol: bool,
    pub encoding: DemEncoding,
    pub tile_size: u32,
    pub min_zoom: u8,
    pub max_zoom: u8,
    pub attribution: String,
    pub exaggeration: f64,
}

impl Default for DemSettings {
    fn default() -> Self {
        Self {
            tilejson_url: DEFAULT_DEM_TILEJSON_URL.to_string(),
            use_protocol: false,
            encoding: DemEncoding::Terrarium,
            tile_size: DEFAULT_DEM_TILE_SIZE,
            min_zoom: DEFAULT_DEM_MIN_ZOOM,
            max_zoom: DEFAULT_DEM_MAX_ZOOM,
            attribution: DEFAULT_DEM_ATTRIBUTION.to_string(),
            exaggeration: DEFAULT_TERRAIN_EXAGGERATION,
        }
    }
}

/// `[contour]` section.
///
/// Bands are kept unvalidated here; validation happens when the application
/// builds its contour policy.
#[derive(Debug, Clone, PartialEq)]
pub struct ContourSettings {
    pub dem_url: String,
    pub dem_max_zoom: u8,
    pub thresholds: Vec<ThresholdBand>,
    pub fields: ContourFields,
    pub max_zoom: u8,
}

impl Default for ContourSettings {
    fn default() -> Self {
        Self {
            dem_url: DEFAULT_CONTOUR_DEM_URL.to_string(),
            dem_max_zoom: DEFAULT_CONTOUR_DEM_MAX_ZOOM,
            thresholds: vec![
                ThresholdBand::new(12, vec![100, 500]),
                ThresholdBand::new(14, vec![20, 100]),
            ],
            fields: ContourFields::default(),
            max_zoom: DEFAULT_CONTOUR_MAX_ZOOM,
        }
    }
}

/// `[logging]` section.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingSettings {
    pub directory: PathBuf,
    pub file: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(DEFAULT_LOG_DIRECTORY),
            file: DEFAULT_LOG_FILE.to_string(),
        }
    }
}
