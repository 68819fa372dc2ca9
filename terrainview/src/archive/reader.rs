//! Archive reader abstraction.
//!
//! The archive-reading collaborator turns an [`ArchiveLocator`] into tile
//! bytes. Absence is reported explicitly as `Ok(None)` so callers can tell a
//! missing tile apart from an empty one.

use std::future::Future;

use bytes::Bytes;
use thiserror::Error;

use super::locator::ArchiveLocator;

/// Errors reported by an archive reader.
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// I/O error while reading archive content.
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The archive itself could not be opened or is corrupt.
    #[error("Archive {archive} unavailable: {reason}")]
    Unavailable { archive: String, reason: String },
}

/// Async trait for archive readers.
///
/// Implementations must be safe to call concurrently from many fetches and
/// must tolerate the returned future being dropped before completion.
pub trait ArchiveReader: Send + Sync {
    /// Read the tile a locator points at.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(bytes))` - the encoded tile
    /// * `Ok(None)` - the archive has no such tile
    /// * `Err(_)` - the archive could not be read
    fn read_tile(
        &self,
        locator: &ArchiveLocator,
    ) -> impl Future<Output = Result<Option<Bytes>, ArchiveError>> + Send;

    /// Returns the reader's name for logging and identification.
    fn name(&self) -> &str;
}
