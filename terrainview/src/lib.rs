//! terrainview - terrain tiles and contour lines for a 3-D map viewer
//!
//! This library resolves slippy-map tile requests to the partitioned
//! elevation archives they live in, serves them through a custom URL
//! protocol, and describes which contour intervals a contour generator
//! should draw at each zoom level.
//!
//! # Modules
//!
//! * [`coord`] - tile coordinates and lat/lon conversion
//! * [`archive`] - tile → archive resolution and archive readers
//! * [`protocol`] - `mapterhorn://z/x/y` request handling
//! * [`contour`] - threshold policy and the contour tile URL template
//! * [`source`] - style sources for terrain, hillshade and contours
//! * [`peaks`] - built-in mountain catalog and camera targets
//! * [`config`] - `config.ini` loading and saving
//! * [`app`] - bootstrap wiring everything together
//! * [`logging`] - `tracing` subscriber setup

pub mod app;
pub mod archive;
pub mod config;
pub mod contour;
pub mod coord;
pub mod logging;
pub mod peaks;
pub mod protocol;
pub mod source;
