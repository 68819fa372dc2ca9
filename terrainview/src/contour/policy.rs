//! Zoom-banded contour intervals.

use super::error::PolicyError;

/// Line spacings that become active at `zoom_floor`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThresholdBand {
    /// Inclusive lower zoom bound of the band.
    pub zoom_floor: u8,
    /// Line spacings in meters, strictly ascending.
    pub intervals: Vec<u32>,
}

impl ThresholdBand {
    /// Create a band.
    pub fn new(zoom_floor: u8, intervals: Vec<u32>) -> Self {
        Self {
            zoom_floor,
            intervals,
        }
    }
}

/// Minor/major line spacing of the active band.
///
/// With a single interval both are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContourLevels {
    /// Smallest interval: every line drawn is a multiple of it.
    pub minor: u32,
    /// Largest interval: bold, labelled lines.
    pub major: u32,
}

/// Validated threshold table.
///
/// Bands are sorted by strictly ascending `zoom_floor`, so at any zoom at
/// most one band is selected: the last band whose floor does not exceed the
/// zoom. Below the first floor no band is selected and no contours are drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContourPolicy {
    bands: Vec<ThresholdBand>,
}

impl ContourPolicy {
    /// Validate and wrap a band table.
    ///
    /// # Errors
    ///
    /// [`PolicyError`] if the table is empty, a band has no intervals or a
    /// zero interval, intervals are not strictly ascending, or floors are
    /// not strictly ascending.
    pub fn new(bands: Vec<ThresholdBand>) -> Result<Self, PolicyError> {
        if bands.is_empty() {
            return Err(PolicyError::EmptyTable);
        }

        for band in &bands {
            if band.intervals.is_empty() {
                return Err(PolicyError::EmptyIntervals {
                    zoom_floor: band.zoom_floor,
                });
            }
            if band.intervals.contains(&0) {
                return Err(PolicyError::NonPositiveInterval {
                    zoom_floor: band.zoom_floor,
                });
            }
            if band.intervals.windows(2).any(|w| w[0] >= w[1]) {
                return Err(PolicyError::UnsortedIntervals {
                    zoom_floor: band.zoom_floor,
                    intervals: band.intervals.clone(),
                });
            }
        }

        if let Some(pair) = bands.windows(2).find(|w| w[0].zoom_floor >= w[1].zoom_floor) {
            return Err(PolicyError::UnsortedBands {
                previous: pair[0].zoom_floor,
                next: pair[1].zoom_floor,
            });
        }

        Ok(Self { bands })
    }

    /// The bands, sorted by floor.
    pub fn bands(&self) -> &[ThresholdBand] {
        &self.bands
    }

    /// The band selected at `zoom`, if any.
    pub fn band_at(&self, zoom: u8) -> Option<&ThresholdBand> {
        self.bands.iter().rev().find(|band| band.zoom_floor <= zoom)
    }

    /// Line spacings active at `zoom`.
    ///
    /// Empty below the first floor. Above the last floor the last band stays
    /// active.
    pub fn active_intervals(&self, zoom: u8) -> &[u32] {
        self.band_at(zoom)
            .map(|band| band.intervals.as_slice())
            .unwrap_or(&[])
    }

    /// Minor/major spacing at `zoom`.
    pub fn levels(&self, zoom: u8) -> Option<ContourLevels> {
        let intervals = self.active_intervals(zoom);
        Some(ContourLevels {
            minor: *intervals.first()?,
            major: *intervals.last()?,
        })
    }

    /// Level of the contour line at `elevation` meters.
    ///
    /// Returns `None` when no line is drawn there (no active band, or the
    /// elevation is not a multiple of the minor spacing). Otherwise the index
    /// of the largest interval dividing the elevation: 0 for a minor line,
    /// `intervals.len() - 1` for a major line.
    pub fn level_for_elevation(&self, zoom: u8, elevation: i32) -> Option<u8> {
        let intervals = self.active_intervals(zoom);
        let divides = |interval: u32| i64::from(elevation) % i64::from(interval) == 0;

        if !divides(*intervals.first()?) {
            return None;
        }
        intervals
            .iter()
            .rposition(|&interval| divides(interval))
            .and_then(|index| u8::try_from(index).ok())
    }
}
