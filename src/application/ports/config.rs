//! Configuration port interface

use async_trait::async_trait;
use std::path::PathBuf;

use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

/// Port for reading configuration overrides
#[async_trait]
pub trait ConfigSource: Send + Sync {
    /// Load configuration from the source.
    ///
    /// # Returns
    /// The loaded config (fields absent from the source are None)
    async fn load(&self) -> Result<AppConfig, ConfigError>;

    /// Get the location this source reads from.
    fn path(&self) -> PathBuf;
}
