//! Filesystem adapters for GeoX.

pub mod paths;
pub mod toml_config_repository;

pub use crate::paths::GeoxPaths;
pub use crate::toml_config_repository::TomlConfigRepository;
