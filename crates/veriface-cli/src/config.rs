//! Credential config file handling.
//!
//! The CLI remembers the last-used AppCode in a small JSON file so repeat
//! runs don't need the flag. Loading tolerates a missing or unreadable
//! file; saving is best-effort.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default config file name, resolved relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "config.json";

/// On-disk config shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub appcode: String,
}

/// Load the config file, falling back to defaults when it is missing or
/// unparseable.
pub fn load(path: impl AsRef<Path>) -> FileConfig {
    let path = path.as_ref();
    match std::fs::read_to_string(path) {
        Ok(contents) => match serde_json::from_str(&contents) {
            Ok(config) => config,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "config file unparseable, using defaults");
                FileConfig::default()
            }
        },
        Err(e) => {
            debug!(path = %path.display(), error = %e, "config file unreadable, using defaults");
            FileConfig::default()
        }
    }
}

/// Persist the config file, pretty-printed.
///
/// Failures are logged at debug level and otherwise ignored; persistence
/// is a convenience, not a correctness requirement.
pub fn save(path: impl AsRef<Path>, config: &FileConfig) {
    let path = path.as_ref();
    let json = match serde_json::to_string_pretty(config) {
        Ok(json) => json,
        Err(e) => {
            debug!(error = %e, "config serialization failed");
            return;
        }
    };
    if let Err(e) = std::fs::write(path, json) {
        debug!(path = %path.display(), error = %e, "config save failed");
    }
}
