//! TOML-backed configuration repository.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use geox_core::config::EngineConfig;
use geox_core::error::{GeoxError, Result};
use geox_core::repository::ConfigRepository;
use tokio::fs;

use crate::paths::GeoxPaths;

/// Stores [`EngineConfig`] in a single TOML file.
///
/// Loading a missing or empty file yields the default configuration; the file
/// is only created by [`save`](ConfigRepository::save).
#[derive(Debug, Clone)]
pub struct TomlConfigRepository {
    path: PathBuf,
}

impl TomlConfigRepository {
    /// Uses the platform default location (`~/.config/geox/config.toml`).
    pub fn new() -> Result<Self> {
        Ok(Self::with_path(GeoxPaths::config_file()?))
    }

    /// Uses an explicit file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ConfigRepository for TomlConfigRepository {
    async fn load(&self) -> Result<EngineConfig> {
        if !fs::try_exists(&self.path).await? {
            tracing::debug!(path = %self.path.display(), "no config file, using defaults");
            return Ok(EngineConfig::default());
        }

        let content = fs::read_to_string(&self.path).await.map_err(|e| {
            GeoxError::io(format!(
                "Failed to read config file at {:?}: {}",
                self.path, e
            ))
        })?;

        let config = EngineConfig::from_toml(&content)?;
        tracing::info!(path = %self.path.display(), "config loaded");
        Ok(config)
    }

    async fn save(&self, config: &EngineConfig) -> Result<()> {
        config.validate()?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                GeoxError::io(format!(
                    "Failed to create config directory at {:?}: {}",
                    parent, e
                ))
            })?;
        }

        let toml_string = config.to_toml()?;
        fs::write(&self.path, toml_string).await.map_err(|e| {
            GeoxError::io(format!(
                "Failed to write config file at {:?}: {}",
                self.path, e
            ))
        })?;
        tracing::info!(path = %self.path.display(), "config saved");
        Ok(())
    }
}
