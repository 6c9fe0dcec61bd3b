use std::fmt;
use std::io;
use std::path::PathBuf;

/// Failure reading or writing a [`KeyValueStore`](super::KeyValueStore).
#[derive(Debug)]
pub enum StorageError {
    /// Filesystem access failed.
    Io { path: PathBuf, source: io::Error },
    /// The backing file is not a JSON object of strings.
    Corrupt { path: PathBuf, source: serde_json::Error },
    /// A value could not be encoded.
    Encode(serde_json::Error),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "storage i/o error at {}: {source}", path.display())
            }
            Self::Corrupt { path, source } => {
                write!(f, "storage file {} is corrupt: {source}", path.display())
            }
            Self::Encode(source) => write!(f, "failed to encode stored value: {source}"),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Corrupt { source, .. } | Self::Encode(source) => Some(source),
        }
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(e: serde_json::Error) -> Self {
        Self::Encode(e)
    }
}
