//! Custom tile-fetch protocol.
//!
//! The rendering engine requests terrain tiles through a named URL scheme
//! (`mapterhorn://{z}/{x}/{y}`). A [`TerrainProtocol`] handles such requests:
//! it parses the URL, resolves the archive with an
//! [`ArchiveLayout`](crate::archive::ArchiveLayout) and reads the tile through
//! an [`ArchiveReader`](crate::archive::ArchiveReader).
//!
//! Handlers are explicit objects. They are constructed once at startup and
//! handed to a [`ProtocolRegistry`], which the rendering side dispatches
//! through; nothing is registered globally.
//!
//! ```text
//! request ──► ProtocolRegistry ──► TerrainProtocol ──► ArchiveLayout::resolve
//!                                        │
//!                                        └──► ArchiveReader::read_tile
//!                                               ├─ Some(bytes) ──► Ok(bytes)
//!                                               └─ None ────────► TileNotFound
//! ```

mod error;
mod handler;
mod registry;
mod url;

pub use error::{FetchError, RegistryError};
pub use handler::{BoxFuture, SchemeHandler, TerrainProtocol, TileFetchRequest, DEFAULT_SCHEME};
pub use registry::ProtocolRegistry;
pub use url::{parse_tile_url, tile_url, url_scheme};
