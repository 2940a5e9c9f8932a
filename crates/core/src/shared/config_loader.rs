use std::fs;
use std::path::{Path, PathBuf};

use super::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::segmentation::domain::segmenter_config::{ConfigError, SegmenterConfig};

/// Platform config location, e.g. `~/.config/subcue/config.json` on Linux.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Parse and validate a JSON config. Missing fields keep their defaults.
pub fn parse_config(json: &str) -> Result<SegmenterConfig, ConfigError> {
    let config: SegmenterConfig = serde_json::from_str(json)?;
    config.validate()?;
    Ok(config)
}

/// Resolve the segmenter config.
///
/// Resolution order:
/// 1. `explicit` path (must exist)
/// 2. Platform config file, if present
/// 3. Built-in defaults
pub fn load_config(explicit: Option<&Path>) -> Result<SegmenterConfig, ConfigError> {
    if let Some(path) = explicit {
        return read_config(path);
    }

    match default_config_path() {
        Some(path) if path.exists() => read_config(&path),
        _ => Ok(SegmenterConfig::default()),
    }
}

fn read_config(path: &Path) -> Result<SegmenterConfig, ConfigError> {
    let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_config(&json)?;
    log::debug!("Loaded segmenter config from {}", path.display());
    Ok(config)
}
