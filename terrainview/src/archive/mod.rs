//! Terrain archive addressing.
//!
//! Terrain tiles are stored in a set of partitioned archives. Every tile at
//! or below the low-zoom cutoff lives in one consolidated archive; finer
//! tiles live in the archive of their quadtree ancestor at the coarse
//! partition zoom. Each partition archive is self-sufficient for all of its
//! descendant tiles.
//!
//! ```text
//!   z <= 12            z > 12
//!   ┌──────────┐       ┌──────────────────────────────┐
//!   │ planet   │       │ 6-{x >> (z-6)}-{y >> (z-6)}  │
//!   └──────────┘       └──────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use terrainview::archive::ArchiveLayout;
//! use terrainview::coord::TileCoord;
//!
//! let layout = ArchiveLayout::default();
//!
//! let low = layout.resolve(&TileCoord::new(10, 905, 403).unwrap());
//! assert_eq!(low.archive_key(), "planet");
//!
//! let high = layout.resolve(&TileCoord::new(14, 14505, 6469).unwrap());
//! assert_eq!(high.archive_key(), "6-56-25");
//! ```

mod directory;
mod layout;
mod locator;
mod memory;
mod reader;

pub use directory::DirectoryArchiveReader;
pub use layout::{
    resolve, ArchiveLayout, LayoutError, DEFAULT_GRID_SHIFT, DEFAULT_LOW_ZOOM_CUTOFF,
    DEFAULT_LOW_ZOOM_KEY,
};
pub use locator::{ArchiveLocator, DEFAULT_TILE_EXTENSION};
pub use memory::MemoryArchiveReader;
pub use reader::{ArchiveError, ArchiveReader};
