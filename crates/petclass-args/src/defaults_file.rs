//! Optional TOML file supplying defaults for the three options.
//!
//! ```toml
//! dir = "pet_images/"
//! dogfile = "dognames.txt"
//! arch = "resnet"
//! ```
//!
//! Every key is optional. Values are not validated here; the reader runs
//! them through the same checks as command-line values.

use std::path::Path;

use petclass_common::ConfigError;
use serde::Deserialize;
use tracing::info;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileDefaults {
    pub dir: Option<String>,
    pub dogfile: Option<String>,
    pub arch: Option<String>,
}

/// Load defaults from a specific TOML file path.
pub fn load_from_path(path: &Path) -> Result<FileDefaults, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        ConfigError::ParseError(format!("failed to read {}: {e}", path.display()))
    })?;

    let defaults = parse(&content)?;
    info!("loaded argument defaults from {}", path.display());
    Ok(defaults)
}

/// Parse defaults from TOML text.
pub fn parse(content: &str) -> Result<FileDefaults, ConfigError> {
    toml::from_str(content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))
}
