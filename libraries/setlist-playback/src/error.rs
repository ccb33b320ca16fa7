//! Error types for playlist operations

use thiserror::Error;

/// Playlist errors
///
/// None of these are fatal. Each one describes a guarded precondition that an
/// operation declined to act on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
    /// No entry carries the given title
    #[error("No entry titled {0:?}")]
    NotFound(String),

    /// There is no current entry to play or navigate from
    #[error("Playlist is empty")]
    EmptyCollection,
}

/// Result type for playlist operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
