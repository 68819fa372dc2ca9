//! Archive locator produced by the resolver.

use crate::coord::TileCoord;

/// Default file extension of terrain tiles inside an archive.
pub const DEFAULT_TILE_EXTENSION: &str = "webp";

/// Where a terrain tile lives: an archive key plus the tile inside it.
///
/// Once opened, an archive is addressed with the same z/x/y as the original
/// request, so the locator carries the coordinate unchanged. Locators are
/// computed fresh per request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArchiveLocator {
    archive_key: String,
    coord: TileCoord,
}

impl ArchiveLocator {
    /// Create a locator.
    pub fn new(archive_key: impl Into<String>, coord: TileCoord) -> Self {
        Self {
            archive_key: archive_key.into(),
            coord,
        }
    }

    /// Identifier of the archive shard (e.g. `planet`, `6-56-25`).
    pub fn archive_key(&self) -> &str {
        &self.archive_key
    }

    /// The requested tile.
    pub fn coord(&self) -> &TileCoord {
        &self.coord
    }

    /// Tile path inside the archive: `{z}/{x}/{y}.{ext}`.
    pub fn tile_path(&self, extension: &str) -> String {
        format!(
            "{}/{}/{}.{}",
            self.coord.zoom(),
            self.coord.x(),
            self.coord.y(),
            extension
        )
    }

    /// URL of the archive file: `{base}/{archive_key}.pmtiles`.
    pub fn archive_url(&self, base_url: &str) -> String {
        format!(
            "{}/{}.pmtiles",
            base_url.trim_end_matches('/'),
            self.archive_key
        )
    }

    /// Byte-range locator understood by a PMTiles reader:
    /// `pmtiles://{archive_url}/{z}/{x}/{y}.{ext}`.
    pub fn protocol_url(&self, base_url: &str, extension: &str) -> String {
        format!(
            "pmtiles://{}/{}",
            self.archive_url(base_url),
            self.tile_path(extension)
        )
    }
}

impl std::fmt::Display for ArchiveLocator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.archive_key, self.coord)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locator() -> ArchiveLocator {
        ArchiveLocator::new("6-56-25", TileCoord::new(14, 14505, 6469).unwrap())
    }

    #[test]
    fn test_tile_path() {
        assert_eq!(locator().tile_path("webp"), "14/14505/6469.webp");
    }

    #[test]
    fn test_archive_url_trims_trailing_slash() {
        assert_eq!(
            locator().archive_url("https://download.mapterhorn.com/"),
            "https://download.mapterhorn.com/6-56-25.pmtiles"
        );
    }

    #[test]
    fn test_protocol_url() {
        assert_eq!(
            locator().protocol_url("https://download.mapterhorn.com", DEFAULT_TILE_EXTENSION),
            "pmtiles://https://download.mapterhorn.com/6-56-25.pmtiles/14/14505/6469.webp"
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(locator().to_string(), "6-56-25:14/14505/6469");
    }
}
