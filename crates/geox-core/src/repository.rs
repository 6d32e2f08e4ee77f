//! Repository traits implemented by the infrastructure layer.

use async_trait::async_trait;

use crate::config::EngineConfig;
use crate::error::Result;

/// Storage for the engine configuration.
#[async_trait]
pub trait ConfigRepository: Send + Sync {
    /// Loads the configuration. A missing or empty store yields defaults.
    async fn load(&self) -> Result<EngineConfig>;

    /// Persists the configuration.
    async fn save(&self, config: &EngineConfig) -> Result<()>;
}
