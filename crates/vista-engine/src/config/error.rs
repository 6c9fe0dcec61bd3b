use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::windowing::ViewportError;

/// Failure loading a [`VistaConfig`](super::VistaConfig).
#[derive(Debug)]
pub enum ConfigError {
    Read { path: PathBuf, source: io::Error },
    Parse(toml::de::Error),
    List(ViewportError),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "cannot read config {}: {source}", path.display())
            }
            Self::Parse(e) => write!(f, "config parse error: {e}"),
            Self::List(e) => write!(f, "invalid [list] section: {e}"),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Parse(e) => Some(e),
            Self::List(e) => Some(e),
            Self::Invalid(_) => None,
        }
    }
}
