//! Contour policy errors.

use thiserror::Error;

/// A malformed contour policy or template.
///
/// Raised at construction time so a bad table stops startup before any
/// contour source is registered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
    /// No bands were declared.
    #[error("Contour threshold table is empty")]
    EmptyTable,

    /// A band declares no intervals.
    #[error("Band at zoom {zoom_floor} has no intervals")]
    EmptyIntervals { zoom_floor: u8 },

    /// An interval is zero.
    #[error("Band at zoom {zoom_floor} has a non-positive interval")]
    NonPositiveInterval { zoom_floor: u8 },

    /// Intervals inside a band are not strictly ascending.
    #[error("Band at zoom {zoom_floor} has unsorted intervals {intervals:?}")]
    UnsortedIntervals { zoom_floor: u8, intervals: Vec<u32> },

    /// Band floors are not strictly ascending (unsorted or overlapping).
    #[error("Band at zoom {next} follows band at zoom {previous}; floors must strictly ascend")]
    UnsortedBands { previous: u8, next: u8 },

    /// A required field name is empty.
    #[error("Contour field '{0}' must not be empty")]
    EmptyField(&'static str),

    /// A template string could not be decoded.
    #[error("Malformed contour template: {0}")]
    MalformedTemplate(String),
}
