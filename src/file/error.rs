use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while generating or verifying a document
#[derive(Error, Debug)]
pub enum GenerateError {
    /// Output file could not be opened for writing
    #[error("Could not create file {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Writing or flushing the document content failed
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Syncing the file to disk failed
    #[error("Failed to sync {path} to disk: {source}")]
    Sync {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Captured time cannot be expressed as a 4-digit year
    #[error("Timestamp year {year} is outside 0..=9999")]
    TimestampOutOfRange { year: i32 },

    /// Every collision suffix was already taken
    #[error("No free filename for {base} after {attempts} attempts")]
    NoUniqueName { base: String, attempts: u32 },

    /// Failed to read a document back for verification
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Filename does not follow the hello_world_YYYYMMDD_HHMMSS.md pattern
    #[error("Not a generated document filename: {0}")]
    InvalidFilename(String),

    /// Document has no parseable "Generated at:" line
    #[error("No \"Generated at:\" timestamp in {0}")]
    MissingTimestamp(PathBuf),
}

/// Result type for document operations
pub type GenerateResult<T> = Result<T, GenerateError>;

impl GenerateError {
    /// Path the failed operation was working on, if any
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::Open { path, .. }
            | Self::Write { path, .. }
            | Self::Sync { path, .. }
            | Self::Read { path, .. }
            | Self::MissingTimestamp(path) => Some(path.as_path()),
            _ => None,
        }
    }

    /// Whether the error means a file could not be found
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Read { source, .. } | Self::Open { source, .. } => {
                source.kind() == std::io::ErrorKind::NotFound
            }
            _ => false,
        }
    }
}
