//! Archive reader for unpacked archives on local disk.
//!
//! Layout: `{root}/{archive_key}/{z}/{x}/{y}.{ext}`

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use bytes::Bytes;
use tracing::trace;

use super::locator::{ArchiveLocator, DEFAULT_TILE_EXTENSION};
use super::reader::{ArchiveError, ArchiveReader};

/// Reads tiles from archives extracted into a directory tree.
#[derive(Debug, Clone)]
pub struct DirectoryArchiveReader {
    root: PathBuf,
    extension: String,
}

impl DirectoryArchiveReader {
    /// Create a reader rooted at `root` using the default tile extension.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_extension(root, DEFAULT_TILE_EXTENSION)
    }

    /// Create a reader with a custom tile extension.
    pub fn with_extension(root: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            extension: extension.into(),
        }
    }

    /// Root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File path a locator maps to.
    pub fn tile_file(&self, locator: &ArchiveLocator) -> PathBuf {
        self.root
            .join(locator.archive_key())
            .join(locator.tile_path(&self.extension))
    }
}

impl DirectoryArchiveReader {
    /// A missing tile only means "not found" when the archive root exists.
    async fn ensure_root(&self, locator: &ArchiveLocator) -> Result<(), ArchiveError> {
        let reason = match tokio::fs::metadata(&self.root).await {
            Ok(meta) if meta.is_dir() => return Ok(()),
            Ok(_) => format!("{} is not a directory", self.root.display()),
            Err(e) => format!("cannot open {}: {}", self.root.display(), e),
        };
        Err(ArchiveError::Unavailable {
            archive: locator.archive_key().to_string(),
            reason,
        })
    }
}

impl ArchiveReader for DirectoryArchiveReader {
    async fn read_tile(&self, locator: &ArchiveLocator) -> Result<Option<Bytes>, ArchiveError> {
        let path = self.tile_file(locator);
        trace!(path = %path.display(), "Reading tile from directory archive");

        match tokio::fs::read(&path).await {
            Ok(data) => Ok(Some(Bytes::from(data))),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                self.ensure_root(locator).await?;
                Ok(None)
            }
            Err(e) => Err(ArchiveError::Io {
                path: path.display().to_string(),
                source: e,
            }),
        }
    }

    fn name(&self) -> &str {
        "directory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::TileCoord;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_reads_existing_tile() {
        let dir = TempDir::new().unwrap();
        let tile_dir = dir.path().join("6-56-25").join("14").join("14505");
        std::fs::create_dir_all(&tile_dir).unwrap();
        std::fs::write(tile_dir.join("6469.webp"), b"RIFF").unwrap();

        let reader = DirectoryArchiveReader::new(dir.path());
        let locator = ArchiveLocator::new("6-56-25", TileCoord::new(14, 14505, 6469).unwrap());

        let data = reader.read_tile(&locator).await.unwrap().unwrap();
        assert_eq!(&data[..], b"RIFF");
    }

    #[tokio::test]
    async fn test_missing_tile_is_none() {
        let dir = TempDir::new().unwrap();
        let reader = DirectoryArchiveReader::new(dir.path());
        let locator = ArchiveLocator::new("planet", TileCoord::new(3, 1, 2).unwrap());

        assert!(reader.read_tile(&locator).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_missing_root_is_unavailable() {
        let dir = TempDir::new().unwrap();
        let reader = DirectoryArchiveReader::new(dir.path().join("absent"));
        let locator = ArchiveLocator::new("planet", TileCoord::new(3, 1, 2).unwrap());

        let err = reader.read_tile(&locator).await.unwrap_err();
        assert!(matches!(
            err,
            ArchiveError::Unavailable { ref archive, .. } if archive == "planet"
        ));
    }

    #[tokio::test]
    async fn test_root_that_is_a_file_is_unavailable() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("archives");
        std::fs::write(&file, b"").unwrap();
        let reader = DirectoryArchiveReader::new(&file);
        let locator = ArchiveLocator::new("planet", TileCoord::new(3, 1, 2).unwrap());

        assert!(matches!(
            reader.read_tile(&locator).await,
            Err(ArchiveError::Unavailable { .. })
        ));
    }

    #[test]
    fn test_tile_file_with_extension() {
        let reader = DirectoryArchiveReader::with_extension("/data", "png");
        let locator = ArchiveLocator::new("planet", TileCoord::new(3, 1, 2).unwrap());
        assert_eq!(
            reader.tile_file(&locator),
            PathBuf::from("/data/planet/3/1/2.png")
        );
    }
}
