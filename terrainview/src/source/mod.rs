//! Source descriptors for the rendering engine.
//!
//! The library does not render anything. It hands the engine a description
//! of where elevation data comes from and how it is encoded; the engine
//! derives 3-D relief, hillshading and contour lines from it.

mod types;

pub use types::{
    ContourDemSource, DemEncoding, HillshadeLayer, RasterDemSource, SourceSet, StyleSource,
    TerrainSettings, VectorSource, CONTOUR_SOURCE_ID, DEM_SOURCE_ID, HILLSHADE_LAYER_ID,
};
