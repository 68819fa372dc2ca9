//! Default values for every configuration key.

/// Base URL the partitioned archives are published under.
pub const DEFAULT_ARCHIVE_BASE_URL: &str = "https://download.mapterhorn.com";

/// URL scheme of the terrain protocol handler.
pub const DEFAULT_ARCHIVE_SCHEME: &str = "mapterhorn";

/// TileJSON endpoint of the hosted terrain tiles.
pub const DEFAULT_DEM_TILEJSON_URL: &str = "https://tiles.mapterhorn.com/tilejson.json";

/// Terrain tile size in pixels.
pub const DEFAULT_DEM_TILE_SIZE: u32 = 512;

/// Zoom range of the terrain source.
pub const DEFAULT_DEM_MIN_ZOOM: u8 = 5;
pub const DEFAULT_DEM_MAX_ZOOM: u8 = 14;

/// Attribution shown for the terrain source.
pub const DEFAULT_DEM_ATTRIBUTION: &str =
    "<a href=\"https://mapterhorn.com/attribution\">© Mapterhorn</a>";

/// Vertical exaggeration of the 3-D terrain.
pub const DEFAULT_TERRAIN_EXAGGERATION: f64 = 1.0;

/// Tile URL the contour generator samples elevation from.
pub const DEFAULT_CONTOUR_DEM_URL: &str = "https://tiles.mapterhorn.com/{z}/{x}/{y}.webp";

/// Highest zoom of the DEM the contour generator samples.
pub const DEFAULT_CONTOUR_DEM_MAX_ZOOM: u8 = 12;

/// Threshold table in config syntax.
pub const DEFAULT_CONTOUR_THRESHOLDS: &str = "12:100,500;14:20,100";

/// Highest zoom the contour vector source is requested at.
pub const DEFAULT_CONTOUR_MAX_ZOOM: u8 = 17;

/// Default log directory.
pub const DEFAULT_LOG_DIRECTORY: &str = "logs";

/// Default log file name.
pub const DEFAULT_LOG_FILE: &str = "terrainview.log";
