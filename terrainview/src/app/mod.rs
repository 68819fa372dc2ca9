//! Application bootstrap.
//!
//! [`TerrainViewApp`] turns a [`crate::config::ConfigFile`] into a running
//! application: validated archive layout and contour policy, the contour
//! template, the terrain protocol handler and the style sources.
//!
//! ```text
//! ConfigFile ──► AppConfig ──► TerrainViewApp
//!                 (validate)    ├── ProtocolRegistry ── TerrainProtocol<R>
//!                               ├── ContourTemplate
//!                               └── SourceSet
//! ```

mod bootstrap;
mod config;
mod error;

pub use bootstrap::TerrainViewApp;
pub use config::AppConfig;
pub use error::AppError;
