//! Storage errors.

use std::path::PathBuf;

/// Error returned by a [`PreferenceStorage`](crate::PreferenceStorage) backend.
///
/// The theme store never surfaces these to callers; it logs them and keeps
/// going.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Reading or writing the backing file failed.
    #[error("storage i/o error at {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The backing file exists but is not a JSON object of strings.
    #[error("malformed storage file {}: {}", .path.display(), .source)]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The backend refuses access (disabled, quota exceeded, ...).
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}
