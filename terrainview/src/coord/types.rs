//! Coordinate type definitions

use thiserror::Error;

/// Web Mercator valid latitude range
pub const MIN_LAT: f64 = -85.05112878;
pub const MAX_LAT: f64 = 85.05112878;

/// Valid longitude range
pub const MIN_LON: f64 = -180.0;
pub const MAX_LON: f64 = 180.0;

/// Zoom range accepted by the tile grid.
///
/// The rendering engine never requests beyond zoom 24, and keeping the
/// ceiling there leaves `1 << zoom` comfortably inside a `u32`.
pub const MIN_ZOOM: u8 = 0;
pub const MAX_ZOOM: u8 = 24;

/// Tile coordinates in the Web Mercator / Slippy Map grid.
///
/// A `TileCoord` can only be obtained through [`TileCoord::new`] (or the
/// lat/lon conversion), so every value in circulation satisfies
/// `x < 2^zoom` and `y < 2^zoom`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileCoord {
    zoom: u8,
    x: u32,
    y: u32,
}

impl TileCoord {
    /// Create a tile coordinate, validating it against the grid at `zoom`.
    ///
    /// # Errors
    ///
    /// * [`CoordError::InvalidZoom`] if `zoom > MAX_ZOOM`
    /// * [`CoordError::InvalidCoordinate`] if `x` or `y` is `>= 2^zoom`
    ///
    /// # Example
    ///
    /// ```
    /// use terrainview::coord::{CoordError, TileCoord};
    ///
    /// let tile = TileCoord::new(14, 14552, 6451).unwrap();
    /// assert_eq!(tile.zoom(), 14);
    ///
    /// assert!(matches!(
    ///     TileCoord::new(2, 4, 0),
    ///     Err(CoordError::InvalidCoordinate { .. })
    /// ));
    /// ```
    pub fn new(zoom: u8, x: u32, y: u32) -> Result<Self, CoordError> {
        let max = Self::max_index(zoom)?;
        if x > max || y > max {
            return Err(CoordError::InvalidCoordinate { zoom, x, y });
        }
        Ok(Self { zoom, x, y })
    }

    /// Largest valid x/y index at `zoom` (`2^zoom - 1`).
    pub fn max_index(zoom: u8) -> Result<u32, CoordError> {
        if zoom > MAX_ZOOM {
            return Err(CoordError::InvalidZoom(zoom));
        }
        Ok((1u32 << zoom) - 1)
    }

    /// Zoom level.
    #[inline]
    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    /// Column, 0 at 180°W, increasing eastward.
    #[inline]
    pub fn x(&self) -> u32 {
        self.x
    }

    /// Row, 0 at ~85.05°N, increasing southward.
    #[inline]
    pub fn y(&self) -> u32 {
        self.y
    }

    /// The quadtree ancestor of this tile at a coarser `zoom`.
    ///
    /// Returns `None` when `zoom` is finer than this tile.
    pub fn parent_at(&self, zoom: u8) -> Option<TileCoord> {
        if zoom > self.zoom {
            return None;
        }
        let shift = self.zoom - zoom;
        Some(TileCoord {
            zoom,
            x: self.x >> shift,
            y: self.y >> shift,
        })
    }
}

impl std::fmt::Display for TileCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}", self.zoom, self.x, self.y)
    }
}

/// Errors that can occur during coordinate validation and conversion.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordError {
    /// x or y lies outside the tile grid for the zoom level.
    #[error("Tile z={zoom} x={x} y={y} is outside the tile grid")]
    InvalidCoordinate { zoom: u8, x: u32, y: u32 },

    /// Zoom level above [`MAX_ZOOM`].
    #[error("Invalid zoom level: {0} (must be {MIN_ZOOM}-{MAX_ZOOM})")]
    InvalidZoom(u8),

    /// Latitude outside the Web Mercator range.
    #[error("Invalid latitude: {0} (must be between {MIN_LAT} and {MAX_LAT})")]
    InvalidLatitude(f64),

    /// Longitude outside -180..=180.
    #[error("Invalid longitude: {0} (must be between {MIN_LON} and {MAX_LON})")]
    InvalidLongitude(f64),
}
