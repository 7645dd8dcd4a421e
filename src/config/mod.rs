//! Known mail provider settings, loaded once at startup from a JSON file.

mod error;
mod types;

pub use error::ConfigError;
pub use types::{KnownServerPattern, Settings};

use std::fs;
use std::path::Path;

/// File looked up in the working directory when no explicit path is given.
pub const DEFAULT_SETTINGS_FILE: &str = "appsettings.json";

impl Settings {
    /// Read and parse the settings file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::read(path, source))?;
        let settings: Settings =
            serde_json::from_str(&text).map_err(|source| ConfigError::parse(path, source))?;
        tracing::debug!(
            path = %path.display(),
            known_servers = settings.known_servers.len(),
            "settings loaded"
        );
        Ok(settings)
    }

    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(text).map_err(|source| ConfigError::parse("<inline>", source))
    }
}
