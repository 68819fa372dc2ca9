//! Tile-to-archive remapping.

use thiserror::Error;

use super::locator::ArchiveLocator;
use crate::coord::{CoordError, TileCoord};

/// Zoom at and below which the consolidated archive serves every tile.
pub const DEFAULT_LOW_ZOOM_CUTOFF: u8 = 12;

/// Name of the consolidated low-zoom archive.
pub const DEFAULT_LOW_ZOOM_KEY: &str = "planet";

/// Zoom of the coarse grid that partitions high-zoom archives.
pub const DEFAULT_GRID_SHIFT: u8 = 6;

/// Delimiter between the parts of a partition archive key.
const KEY_DELIMITER: char = '-';

/// Errors raised when an [`ArchiveLayout`] is constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// The consolidated archive needs a name.
    #[error("Low-zoom archive key must not be empty")]
    EmptyLowZoomKey,

    /// Some zoom above the cutoff would be coarser than the partition grid.
    #[error("Grid shift {grid_shift} exceeds low-zoom cutoff {low_zoom_cutoff} + 1")]
    ShiftAboveCutoff { grid_shift: u8, low_zoom_cutoff: u8 },
}

/// How terrain tiles are distributed across archives.
///
/// The layout is plain configuration: resolving against it is a pure bit-shift
/// computation with no I/O and no shared state, so one layout can be shared
/// by every in-flight fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveLayout {
    low_zoom_cutoff: u8,
    low_zoom_key: String,
    grid_shift: u8,
}

impl Default for ArchiveLayout {
    fn default() -> Self {
        Self {
            low_zoom_cutoff: DEFAULT_LOW_ZOOM_CUTOFF,
            low_zoom_key: DEFAULT_LOW_ZOOM_KEY.to_string(),
            grid_shift: DEFAULT_GRID_SHIFT,
        }
    }
}

impl ArchiveLayout {
    /// Create a layout.
    ///
    /// # Arguments
    ///
    /// * `low_zoom_cutoff` - Zoom at/below which `low_zoom_key` is used
    /// * `low_zoom_key` - Name of the consolidated archive
    /// * `grid_shift` - Zoom of the coarse partitioning grid
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError`] if the key is empty or if `grid_shift` is more
    /// than one level above the cutoff (which would make `zoom - grid_shift`
    /// negative for the first zoom past the cutoff).
    pub fn new(
        low_zoom_cutoff: u8,
        low_zoom_key: impl Into<String>,
        grid_shift: u8,
    ) -> Result<Self, LayoutError> {
        let low_zoom_key = low_zoom_key.into();
        if low_zoom_key.is_empty() {
            return Err(LayoutError::EmptyLowZoomKey);
        }
        if u16::from(grid_shift) > u16::from(low_zoom_cutoff) + 1 {
            return Err(LayoutError::ShiftAboveCutoff {
                grid_shift,
                low_zoom_cutoff,
            });
        }
        Ok(Self {
            low_zoom_cutoff,
            low_zoom_key,
            grid_shift,
        })
    }

    /// Zoom at/below which the consolidated archive is used.
    pub fn low_zoom_cutoff(&self) -> u8 {
        self.low_zoom_cutoff
    }

    /// Name of the consolidated archive.
    pub fn low_zoom_key(&self) -> &str {
        &self.low_zoom_key
    }

    /// Zoom of the coarse partitioning grid.
    pub fn grid_shift(&self) -> u8 {
        self.grid_shift
    }

    /// Resolve a tile to the archive that holds it.
    ///
    /// Tiles at or below the cutoff map to the consolidated archive. Finer
    /// tiles map to `"{grid_shift}-{x >> s}-{y >> s}"` with
    /// `s = zoom - grid_shift`. The shift floors; there is no rounding.
    pub fn resolve(&self, coord: &TileCoord) -> ArchiveLocator {
        if coord.zoom() <= self.low_zoom_cutoff {
            return ArchiveLocator::new(self.low_zoom_key.clone(), *coord);
        }

        // Construction guarantees grid_shift <= cutoff + 1 <= zoom
        let shift = coord.zoom() - self.grid_shift;
        let key = format!(
            "{}{d}{}{d}{}",
            self.grid_shift,
            coord.x() >> shift,
            coord.y() >> shift,
            d = KEY_DELIMITER
        );
        ArchiveLocator::new(key, *coord)
    }

    /// Validate raw indices and resolve them.
    ///
    /// # Errors
    ///
    /// Returns [`CoordError::InvalidCoordinate`] when `x`/`y` fall outside the
    /// grid at `zoom`, or [`CoordError::InvalidZoom`] for an unsupported zoom.
    pub fn locate(&self, zoom: u8, x: u32, y: u32) -> Result<ArchiveLocator, CoordError> {
        let coord = TileCoord::new(zoom, x, y)?;
        Ok(self.resolve(&coord))
    }
}

/// Resolve a tile against an ad-hoc layout.
///
/// Convenience wrapper over [`ArchiveLayout::new`] + [`ArchiveLayout::resolve`]
/// for callers that keep the three parameters separately.
pub fn resolve(
    coord: &TileCoord,
    low_zoom_cutoff: u8,
    low_zoom_key: &str,
    grid_shift: u8,
) -> Result<ArchiveLocator, LayoutError> {
    Ok(ArchiveLayout::new(low_zoom_cutoff, low_zoom_key, grid_shift)?.resolve(coord))
}
