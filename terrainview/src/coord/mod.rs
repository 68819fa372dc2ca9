//! Coordinate conversion module
//!
//! Provides the validated [`TileCoord`] used by the archive resolver and the
//! conversions between geographic coordinates (latitude/longitude) and Web
//! Mercator tile coordinates used to place named peaks on the grid.

mod types;

pub use types::{CoordError, TileCoord, MAX_LAT, MAX_LON, MAX_ZOOM, MIN_LAT, MIN_LON, MIN_ZOOM};

use std::f64::consts::PI;

/// Converts geographic coordinates to tile coordinates.
///
/// # Arguments
///
/// * `lat` - Latitude in degrees (-85.05112878 to 85.05112878)
/// * `lon` - Longitude in degrees (-180.0 to 180.0)
/// * `zoom` - Zoom level (0 to 24)
///
/// # Returns
///
/// A `Result` containing the tile coordinates or an error if inputs are invalid.
#[inline]
pub fn to_tile_coords(lat: f64, lon: f64, zoom: u8) -> Result<TileCoord, CoordError> {
    // Validate inputs
    if !(MIN_LAT..=MAX_LAT).contains(&lat) {
        return Err(CoordError::InvalidLatitude(lat));
    }
    if !(MIN_LON..=MAX_LON).contains(&lon) {
        return Err(CoordError::InvalidLongitude(lon));
    }
    let max = TileCoord::max_index(zoom)?;

    // Calculate number of tiles at this zoom level
    let n = 2.0_f64.powi(zoom as i32);

    // Convert longitude to tile X coordinate
    let x = ((lon + 180.0) / 360.0 * n) as u32;

    // Convert latitude to tile Y coordinate using Web Mercator projection
    let lat_rad = lat * PI / 180.0;
    let y = ((1.0 - lat_rad.tan().asinh() / PI) / 2.0 * n) as u32;

    // lon = 180.0 and lat = MIN_LAT land exactly one past the last tile
    TileCoord::new(zoom, x.min(max), y.min(max))
}

/// Converts tile coordinates back to geographic coordinates.
///
/// Returns the latitude/longitude of the tile's northwest corner.
#[inline]
pub fn tile_to_lat_lon(tile: &TileCoord) -> (f64, f64) {
    let n = 2.0_f64.powi(tile.zoom() as i32);

    // Convert tile X coordinate to longitude
    let lon = tile.x() as f64 / n * 360.0 - 180.0;

    // Convert tile Y coordinate to latitude using inverse Web Mercator
    let y = tile.y() as f64 / n;
    let lat_rad = (PI * (1.0 - 2.0 * y)).sinh().atan();
    let lat = lat_rad * 180.0 / PI;

    (lat, lon)
}
