//! Terrain tile protocol handler.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use bytes::Bytes;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use super::error::FetchError;
use super::url::parse_tile_url;
use crate::archive::{ArchiveLayout, ArchiveReader};

/// Scheme the terrain handler answers to unless configured otherwise.
pub const DEFAULT_SCHEME: &str = "mapterhorn";

/// Boxed future type for dyn-compatible async methods.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// A tile request as issued by the rendering engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileFetchRequest {
    url: String,
}

impl TileFetchRequest {
    /// Create a request for `url`.
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// The requested URL.
    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Handler for one custom URL scheme.
///
/// Dyn-compatible so a [`ProtocolRegistry`](super::ProtocolRegistry) can hold
/// handlers backed by different readers.
pub trait SchemeHandler: Send + Sync {
    /// The scheme this handler serves (without `://`).
    fn scheme(&self) -> &str;

    /// Fetch the tile for `request`, giving up when `cancel` fires.
    fn fetch<'a>(
        &'a self,
        request: &'a TileFetchRequest,
        cancel: CancellationToken,
    ) -> BoxFuture<'a, Result<Bytes, FetchError>>;
}

/// Serves terrain tiles from partitioned archives.
///
/// Holds no per-request state: every fetch parses, resolves and reads
/// independently, so a single instance can serve any number of concurrent
/// requests.
pub struct TerrainProtocol<R: ArchiveReader> {
    scheme: String,
    layout: ArchiveLayout,
    reader: Arc<R>,
}

impl<R: ArchiveReader> TerrainProtocol<R> {
    /// Create a handler on [`DEFAULT_SCHEME`].
    pub fn new(layout: ArchiveLayout, reader: Arc<R>) -> Self {
        Self::with_scheme(DEFAULT_SCHEME, layout, reader)
    }

    /// Create a handler on a custom scheme.
    pub fn with_scheme(scheme: impl Into<String>, layout: ArchiveLayout, reader: Arc<R>) -> Self {
        Self {
            scheme: scheme.into(),
            layout,
            reader,
        }
    }

    /// The archive layout used for resolution.
    pub fn layout(&self) -> &ArchiveLayout {
        &self.layout
    }

    /// The archive reader.
    pub fn reader(&self) -> &Arc<R> {
        &self.reader
    }

    /// Fetch a tile.
    ///
    /// # Errors
    ///
    /// * [`FetchError::InvalidUrl`] / [`FetchError::InvalidCoordinate`] for a
    ///   malformed request; the reader is never consulted
    /// * [`FetchError::TileNotFound`] when the reader reports absence
    /// * [`FetchError::Cancelled`] when `cancel` fires first
    /// * [`FetchError::Archive`] when the reader fails
    pub async fn fetch(
        &self,
        request: &TileFetchRequest,
        cancel: CancellationToken,
    ) -> Result<Bytes, FetchError> {
        let coord = parse_tile_url(&self.scheme, request.url())?;
        let locator = self.layout.resolve(&coord);

        debug!(
            tile = %coord,
            archive = locator.archive_key(),
            reader = self.reader.name(),
            "Resolved terrain tile"
        );

        let result = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                debug!(tile = %coord, "Terrain tile request cancelled");
                return Err(FetchError::Cancelled(request.url().to_string()));
            }
            result = self.reader.read_tile(&locator) => result,
        };

        match result? {
            Some(data) => Ok(data),
            None => {
                warn!(
                    tile = %coord,
                    archive = locator.archive_key(),
                    "Terrain tile not found"
                );
                Err(FetchError::TileNotFound {
                    zoom: coord.zoom(),
                    x: coord.x(),
                    y: coord.y(),
                    archive: locator.archive_key().to_string(),
                })
            }
        }
    }
}

impl<R: ArchiveReader + 'static> SchemeHandler for TerrainProtocol<R> {
    fn scheme(&self) -> &str {
        &self.scheme
    }

    fn fetch<'a>(
        &'a self,
        request: &'a TileFetchRequest,
        cancel: CancellationToken,
    ) -> BoxFuture<'a, Result<Bytes, FetchError>> {
        Box::pin(TerrainProtocol::fetch(self, request, cancel))
    }
}
