//! Named peaks and camera targets.
//!
//! The viewer offers a list of well-known mountains; picking one flies the
//! camera there. This module holds the catalog and computes the camera
//! target; animating the flight is up to the rendering engine.

use std::time::Duration;

use crate::coord::{to_tile_coords, CoordError, TileCoord};

/// Zoom the camera settles at after flying to a peak.
pub const FLY_TO_ZOOM: f64 = 12.0;

/// Camera pitch (degrees) after flying to a peak.
pub const FLY_TO_PITCH: f64 = 45.0;

/// Duration of the fly-to animation.
pub const FLY_TO_DURATION: Duration = Duration::from_millis(5000);

/// A named summit.
#[derive(Debug, Clone, PartialEq)]
pub struct Peak {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

impl Peak {
    /// Create a peak.
    pub fn new(name: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            name: name.into(),
            lat,
            lon,
        }
    }

    /// Camera target centred on the summit.
    pub fn camera_target(&self) -> CameraTarget {
        CameraTarget {
            lon: self.lon,
            lat: self.lat,
            zoom: FLY_TO_ZOOM,
            pitch: FLY_TO_PITCH,
            bearing: 0.0,
            duration: FLY_TO_DURATION,
        }
    }

    /// Terrain tile containing the summit at `zoom`.
    pub fn tile(&self, zoom: u8) -> Result<TileCoord, CoordError> {
        to_tile_coords(self.lat, self.lon, zoom)
    }
}

/// Where the camera should end up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraTarget {
    pub lon: f64,
    pub lat: f64,
    pub zoom: f64,
    pub pitch: f64,
    pub bearing: f64,
    pub duration: Duration,
}

/// Camera constraints and the view shown at startup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InitialView {
    pub center: CameraTarget,
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub max_pitch: f64,
}

impl Default for InitialView {
    fn default() -> Self {
        Self {
            center: CameraTarget {
                lon: 138.72,
                lat: 35.35,
                zoom: 12.0,
                pitch: 45.0,
                bearing: 0.0,
                duration: Duration::ZERO,
            },
            min_zoom: 4.0,
            max_zoom: 17.0,
            max_pitch: 85.0,
        }
    }
}

/// Ordered list of selectable peaks.
#[derive(Debug, Clone, PartialEq)]
pub struct PeakCatalog {
    peaks: Vec<Peak>,
}

impl Default for PeakCatalog {
    fn default() -> Self {
        Self::japan()
    }
}

impl PeakCatalog {
    /// Catalog from an explicit list.
    pub fn new(peaks: Vec<Peak>) -> Self {
        Self { peaks }
    }

    /// The built-in selection of Japanese mountains.
    pub fn japan() -> Self {
        Self::new(vec![
            Peak::new("富士山 Mt.Fuji", 35.35, 138.72),
            Peak::new("阿蘇山 Mt.Aso", 32.8985064, 131.0874754),
            Peak::new("槍ヶ岳 Yariga-take", 36.3420332, 137.6476213),
            Peak::new("奥穂高岳 Okuhotaka-take", 36.289167, 137.648056),
            Peak::new("白馬岳 Hakuba-take", 36.7587181, 137.7585896),
            Peak::new("八ヶ岳 Yatsuga-take", 35.97397, 138.31987),
            Peak::new("蔵王山 Mt.Zao", 38.1529672, 140.4458267),
            Peak::new("筑波山 Mt.Tsukuba", 36.2253757, 140.1074925),
            Peak::new("磐梯山 Mt.Bandai", 37.6009417, 140.0722501),
            Peak::new("御嶽山 Mt.Ontake", 35.8823266, 137.4485337),
        ])
    }

    /// All peaks in display order.
    pub fn peaks(&self) -> &[Peak] {
        &self.peaks
    }

    /// Peak at a list position.
    pub fn get(&self, index: usize) -> Option<&Peak> {
        self.peaks.get(index)
    }

    /// First peak whose name contains `query`, ignoring ASCII case.
    pub fn find(&self, query: &str) -> Option<&Peak> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return None;
        }
        self.peaks
            .iter()
            .find(|peak| peak.name.to_lowercase().contains(&query))
    }
}
