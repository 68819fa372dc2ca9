//! Application configuration for `TerrainViewApp`.
//!
//! `AppConfig` is the validated form of a [`ConfigFile`]: the archive layout
//! and the contour policy are checked here, so a running application never
//! holds an inconsistent table.

use crate::archive::ArchiveLayout;
use crate::config::{ConfigFile, DemSettings};
use crate::contour::{ContourFields, ContourPolicy};

use super::error::AppError;

/// Validated configuration passed to [`super::TerrainViewApp::start_with`].
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// URL scheme the terrain handler is registered under.
    pub scheme: String,

    /// Tile → archive resolution rules.
    pub layout: ArchiveLayout,

    /// Contour threshold table.
    pub policy: ContourPolicy,

    /// Contour feature field names and generator options.
    pub fields: ContourFields,

    /// Terrain source settings.
    pub dem: DemSettings,

    /// Elevation tiles sampled by the contour generator.
    pub contour_dem_url: String,

    /// Highest zoom of the contour generator's DEM.
    pub contour_dem_max_zoom: u8,

    /// Highest zoom of the contour vector source.
    pub contour_max_zoom: u8,
}

impl AppConfig {
    /// Validate a loaded configuration file.
    ///
    /// The layout is checked before the contour policy.
    ///
    /// # Errors
    ///
    /// * [`AppError::Layout`] for an inconsistent `[archive]` section
    /// * [`AppError::Policy`] for an invalid threshold table or field name
    pub fn from_config_file(config: &ConfigFile) -> Result<Self, AppError> {
        let layout = ArchiveLayout::new(
            config.archive.low_zoom_cutoff,
            config.archive.low_zoom_key.clone(),
            config.archive.grid_shift,
        )?;

        let policy = ContourPolicy::new(config.contour.thresholds.clone())?;
        let fields = config.contour.fields.clone();
        fields.validate()?;

        Ok(Self {
            scheme: config.archive.scheme.clone(),
            layout,
            policy,
            fields,
            dem: config.dem.clone(),
            contour_dem_url: config.contour.dem_url.clone(),
            contour_dem_max_zoom: config.contour.dem_max_zoom,
            contour_max_zoom: config.contour.max_zoom,
        })
    }
}
