//! Errors raised while serving protocol requests.

use thiserror::Error;

use crate::archive::ArchiveError;
use crate::coord::CoordError;

/// Errors surfaced to the rendering engine for a single tile request.
///
/// Each request fails independently; one failing tile never affects other
/// in-flight requests.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request URL does not match `{scheme}://{z}/{x}/{y}`.
    #[error("Invalid tile URL: {0}")]
    InvalidUrl(String),

    /// The URL parsed but the coordinate is off the grid.
    #[error(transparent)]
    InvalidCoordinate(#[from] CoordError),

    /// The archive reader reported the tile as absent.
    #[error("Tile z={zoom} x={x} y={y} not found.")]
    TileNotFound {
        zoom: u8,
        x: u32,
        y: u32,
        archive: String,
    },

    /// The request was cancelled before the tile arrived.
    #[error("Tile request cancelled: {0}")]
    Cancelled(String),

    /// The archive could not be read.
    #[error(transparent)]
    Archive(#[from] ArchiveError),

    /// No handler is registered for the URL's scheme.
    #[error("No handler registered for scheme '{0}'")]
    UnknownScheme(String),
}

impl FetchError {
    /// Returns true for errors caused by the request itself rather than by
    /// the archive, i.e. errors that retrying cannot fix.
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            FetchError::InvalidUrl(_)
                | FetchError::InvalidCoordinate(_)
                | FetchError::UnknownScheme(_)
        )
    }
}

/// Errors raised while registering handlers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Another handler already owns the scheme.
    #[error("Scheme '{0}' is already registered")]
    AlreadyRegistered(String),

    /// Scheme names must be non-empty and URL-safe.
    #[error("Invalid scheme name '{0}'")]
    InvalidScheme(String),
}
