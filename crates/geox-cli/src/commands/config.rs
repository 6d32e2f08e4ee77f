use std::path::PathBuf;

use anyhow::{Context, Result};
use geox_core::config::EngineConfig;
use geox_core::repository::ConfigRepository;
use geox_infrastructure::TomlConfigRepository;

pub fn repository(path: Option<PathBuf>) -> Result<TomlConfigRepository> {
    let repo = match path {
        Some(path) => TomlConfigRepository::with_path(path),
        None => TomlConfigRepository::new().context("Failed to resolve config path")?,
    };
    tracing::debug!(path = %repo.path().display(), "using config file");
    Ok(repo)
}

pub async fn load(repo: &TomlConfigRepository) -> Result<EngineConfig> {
    repo.load()
        .await
        .with_context(|| format!("Failed to load {}", repo.path().display()))
}

pub async fn show(repo: &TomlConfigRepository) -> Result<()> {
    let config = load(repo).await?;
    let source = if repo.path().exists() {
        repo.path().display().to_string()
    } else {
        format!("{} (not found, defaults)", repo.path().display())
    };
    println!("# {source}");
    print!("{}", config.to_toml()?);
    Ok(())
}

pub async fn init(repo: &TomlConfigRepository, force: bool) -> Result<()> {
    if repo.path().exists() && !force {
        println!(
            "Config already exists at {} (use --force to overwrite)",
            repo.path().display()
        );
        return Ok(());
    }
    repo.save(&EngineConfig::default())
        .await
        .with_context(|| format!("Failed to write {}", repo.path().display()))?;
    println!("Wrote default config to {}", repo.path().display());
    Ok(())
}
