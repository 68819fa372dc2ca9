//! In-memory archive reader.

use bytes::Bytes;
use dashmap::DashMap;

use super::locator::ArchiveLocator;
use super::reader::{ArchiveError, ArchiveReader};
use crate::coord::TileCoord;

/// Archive reader backed by a concurrent map.
///
/// Tiles are keyed by `(archive_key, coord)`, so inserting a tile under the
/// wrong archive makes it invisible to a correctly resolved locator.
#[derive(Debug, Default)]
pub struct MemoryArchiveReader {
    tiles: DashMap<(String, TileCoord), Bytes>,
}

impl MemoryArchiveReader {
    /// Create an empty reader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a tile.
    pub fn insert(&self, archive_key: impl Into<String>, coord: TileCoord, data: impl Into<Bytes>) {
        self.tiles.insert((archive_key.into(), coord), data.into());
    }

    /// Store a tile at the position a locator points to.
    pub fn insert_at(&self, locator: &ArchiveLocator, data: impl Into<Bytes>) {
        self.insert(locator.archive_key(), *locator.coord(), data);
    }

    /// Number of stored tiles.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Returns true if no tiles are stored.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

impl ArchiveReader for MemoryArchiveReader {
    async fn read_tile(&self, locator: &ArchiveLocator) -> Result<Option<Bytes>, ArchiveError> {
        let key = (locator.archive_key().to_string(), *locator.coord());
        Ok(self.tiles.get(&key).map(|entry| entry.value().clone()))
    }

    fn name(&self) -> &str {
        "memory"
    }
}
