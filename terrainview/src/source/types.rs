//! Source descriptor types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::contour::ContourTemplate;

/// Id of the raster elevation source.
pub const DEM_SOURCE_ID: &str = "mapterhorn-dem";

/// Id of the contour vector source.
pub const CONTOUR_SOURCE_ID: &str = "mapterhorn-contour";

/// Id of the hillshade layer.
pub const HILLSHADE_LAYER_ID: &str = "mapterhorn_hillshade";

/// How elevation is packed into RGB pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DemEncoding {
    /// `(R * 256 + G + B / 256) - 32768`
    Terrarium,
    /// `-10000 + (R * 65536 + G * 256 + B) * 0.1`
    Mapbox,
}

impl fmt::Display for DemEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DemEncoding::Terrarium => write!(f, "terrarium"),
            DemEncoding::Mapbox => write!(f, "mapbox"),
        }
    }
}

impl FromStr for DemEncoding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "terrarium" => Ok(DemEncoding::Terrarium),
            "mapbox" => Ok(DemEncoding::Mapbox),
            other => Err(format!("unknown DEM encoding '{}'", other)),
        }
    }
}

/// Raster elevation source (terrain and hillshade input).
///
/// Either `url` (a TileJSON endpoint) or `tiles` (URL templates, possibly on
/// a custom protocol scheme) is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RasterDemSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tiles: Option<Vec<String>>,
    pub encoding: DemEncoding,
    #[serde(rename = "tileSize")]
    pub tile_size: u32,
    pub minzoom: u8,
    pub maxzoom: u8,
    pub attribution: String,
}

impl RasterDemSource {
    /// Source backed by a TileJSON endpoint.
    pub fn from_tilejson(url: impl Into<String>, encoding: DemEncoding) -> Self {
        Self {
            url: Some(url.into()),
            tiles: None,
            encoding,
            tile_size: 512,
            minzoom: 5,
            maxzoom: 14,
            attribution: String::new(),
        }
    }

    /// Source served by a registered protocol handler (`{scheme}://{z}/{x}/{y}`).
    pub fn from_protocol(scheme: &str, encoding: DemEncoding) -> Self {
        Self {
            url: None,
            tiles: Some(vec![format!("{}://{{z}}/{{x}}/{{y}}", scheme)]),
            ..Self::from_tilejson(String::new(), encoding)
        }
    }

    /// Set the zoom range.
    pub fn with_zoom_range(mut self, minzoom: u8, maxzoom: u8) -> Self {
        self.minzoom = minzoom;
        self.maxzoom = maxzoom;
        self
    }

    /// Set the tile size in pixels.
    pub fn with_tile_size(mut self, tile_size: u32) -> Self {
        self.tile_size = tile_size;
        self
    }

    /// Set the attribution HTML.
    pub fn with_attribution(mut self, attribution: impl Into<String>) -> Self {
        self.attribution = attribution.into();
        self
    }
}

/// The DEM the contour generator samples.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContourDemSource {
    pub url: String,
    pub encoding: DemEncoding,
    pub maxzoom: u8,
    /// Generate contours off the main thread.
    pub worker: bool,
}

/// Vector tile source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VectorSource {
    pub tiles: Vec<String>,
    pub maxzoom: u8,
}

impl VectorSource {
    /// Contour source fed by a template.
    pub fn from_template(template: &ContourTemplate, maxzoom: u8) -> Self {
        Self {
            tiles: vec![template.as_str().to_string()],
            maxzoom,
        }
    }
}

/// A style source entry, tagged with its `type`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum StyleSource {
    #[serde(rename = "raster-dem")]
    RasterDem(RasterDemSource),
    #[serde(rename = "vector")]
    Vector(VectorSource),
}

/// 3-D terrain settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerrainSettings {
    pub source: String,
    pub exaggeration: f64,
}

/// Hillshade layer drawn from the DEM source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HillshadeLayer {
    pub id: String,
    pub source: String,
}

impl HillshadeLayer {
    fn to_json(&self) -> Value {
        json!({
            "id": self.id,
            "type": "hillshade",
            "source": self.source,
        })
    }
}

/// Everything the engine needs to register terrain and contours.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceSet {
    pub dem: RasterDemSource,
    pub contour: VectorSource,
    pub contour_dem: ContourDemSource,
    pub terrain: TerrainSettings,
    pub hillshade: HillshadeLayer,
}

impl SourceSet {
    /// Assemble the standard source set with the default ids.
    pub fn new(
        dem: RasterDemSource,
        contour: VectorSource,
        contour_dem: ContourDemSource,
        exaggeration: f64,
    ) -> Self {
        Self {
            dem,
            contour,
            contour_dem,
            terrain: TerrainSettings {
                source: DEM_SOURCE_ID.to_string(),
                exaggeration,
            },
            hillshade: HillshadeLayer {
                id: HILLSHADE_LAYER_ID.to_string(),
                source: DEM_SOURCE_ID.to_string(),
            },
        }
    }

    /// Style fragment: `sources`, `terrain`, `layers` and the contour DEM.
    pub fn to_style_json(&self) -> Result<Value, serde_json::Error> {
        let dem = serde_json::to_value(StyleSource::RasterDem(self.dem.clone()))?;
        let contour = serde_json::to_value(StyleSource::Vector(self.contour.clone()))?;

        Ok(json!({
            "sources": {
                DEM_SOURCE_ID: dem,
                CONTOUR_SOURCE_ID: contour,
            },
            "terrain": serde_json::to_value(&self.terrain)?,
            "layers": [self.hillshade.to_json()],
            "contourDem": serde_json::to_value(&self.contour_dem)?,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contour::{build_template, ContourFields, ThresholdBand};

    fn sample_set() -> SourceSet {
        let template = build_template(
            vec![
                ThresholdBand::new(12, vec![100, 500]),
                ThresholdBand::new(14, vec![20, 100]),
            ],
            ContourFields::default(),
        )
        .unwrap();
        SourceSet::new(
            RasterDemSource::from_tilejson(
                "https://tiles.mapterhorn.com/tilejson.json",
                DemEncoding::Terrarium,
            )
            .with_attribution("© Mapterhorn"),
            VectorSource::from_template(&template, 17),
            ContourDemSource {
                url: "https://tiles.mapterhorn.com/{z}/{x}/{y}.webp".to_string(),
                encoding: DemEncoding::Terrarium,
                maxzoom: 12,
                worker: true,
            },
            1.0,
        )
    }

    #[test]
    fn test_encoding_parse() {
        assert_eq!("Terrarium".parse::<DemEncoding>(), Ok(DemEncoding::Terrarium));
        assert_eq!("mapbox".parse::<DemEncoding>(), Ok(DemEncoding::Mapbox));
        assert!("png".parse::<DemEncoding>().is_err());
    }

    #[test]
    fn test_raster_dem_json() {
        let value = serde_json::to_value(StyleSource::RasterDem(sample_set().dem)).unwrap();
        assert_eq!(value["type"], "raster-dem");
        assert_eq!(value["encoding"], "terrarium");
        assert_eq!(value["tileSize"], 512);
        assert_eq!(value["minzoom"], 5);
        assert_eq!(value["maxzoom"], 14);
        assert!(value.get("tiles").is_none());
    }

    #[test]
    fn test_protocol_source_uses_tiles() {
        let source = RasterDemSource::from_protocol("mapterhorn", DemEncoding::Terrarium);
        assert_eq!(source.url, None);
        assert_eq!(
            source.tiles,
            Some(vec!["mapterhorn://{z}/{x}/{y}".to_string()])
        );
    }

    #[test]
    fn test_style_json() {
        let style = sample_set().to_style_json().unwrap();
        assert_eq!(style["terrain"]["source"], DEM_SOURCE_ID);
        assert_eq!(style["layers"][0]["type"], "hillshade");
        assert_eq!(style["sources"][CONTOUR_SOURCE_ID]["type"], "vector");
        assert_eq!(style["sources"][CONTOUR_SOURCE_ID]["maxzoom"], 17);
        assert_eq!(style["contourDem"]["maxzoom"], 12);
        assert!(style["sources"][CONTOUR_SOURCE_ID]["tiles"][0]
            .as_str()
            .unwrap()
            .starts_with("dem-contour://"));
    }
}
