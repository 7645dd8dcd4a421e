use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised while loading the known-server settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read settings file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("settings file {} is not valid JSON: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ConfigError {
    pub(crate) fn read(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub(crate) fn parse(path: impl AsRef<Path>, source: serde_json::Error) -> Self {
        Self::Parse {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}
