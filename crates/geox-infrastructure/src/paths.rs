//! Path management for GeoX configuration files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/geox/          # Config directory (platform config dir + "geox")
//! └── config.toml          # Engine configuration
//! ```

use std::path::PathBuf;

use geox_core::error::{GeoxError, Result};

const APP_DIR: &str = "geox";
const CONFIG_FILE: &str = "config.toml";

/// Resolves platform-specific locations for GeoX.
pub struct GeoxPaths;

impl GeoxPaths {
    /// Returns the GeoX configuration directory (e.g., `~/.config/geox/`).
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| GeoxError::config("Cannot find config directory"))
    }

    /// Returns the path of `config.toml`.
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file_is_inside_config_dir() {
        // Some CI sandboxes have no config dir; both calls must agree either way.
        match (GeoxPaths::config_dir(), GeoxPaths::config_file()) {
            (Ok(dir), Ok(file)) => {
                assert!(dir.ends_with("geox"));
                assert_eq!(file, dir.join("config.toml"));
            }
            (Err(a), Err(b)) => assert_eq!(a, b),
            (dir, file) => panic!("inconsistent paths: {dir:?} vs {file:?}"),
        }
    }
}
