/// Storage error types
use thiserror::Error;

/// Result type alias using `StorageError`
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors reading or writing playlist files
#[derive(Error, Debug)]
pub enum StorageError {
    /// The file could not be opened, read or written
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A record did not follow `title,artist,album,duration,favorite,path`
    #[error("Malformed record on line {line}: {reason}")]
    Malformed { line: usize, reason: String },
}

impl StorageError {
    /// Create a malformed-record error
    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Self::Malformed {
            line,
            reason: reason.into(),
        }
    }
}
