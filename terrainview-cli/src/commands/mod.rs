//! CLI command implementations.
//!
//! # Command Modules
//!
//! - [`common`] - Config loading shared by every command
//! - [`contours`] - Contour intervals per zoom level
//! - [`fetch`] - Fetch a tile from local archives through the protocol handler
//! - [`init`] - Configuration initialization
//! - [`peaks`] - Built-in mountain catalog
//! - [`resolve`] - Tile → archive resolution
//! - [`style`] - Contour template and style sources

pub mod common;
pub mod contours;
pub mod fetch;
pub mod init;
pub mod peaks;
pub mod resolve;
pub mod style;
