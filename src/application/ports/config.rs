//! Configuration port interface

use std::path::Path;

use async_trait::async_trait;

use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

/// Port for the persisted settings file
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Read the stored settings, or `None` if nothing has been written yet.
    async fn read(&self) -> Result<Option<AppConfig>, ConfigError>;

    /// Replace the stored settings.
    async fn write(&self, config: &AppConfig) -> Result<(), ConfigError>;

    /// Write `config` only if no settings are stored yet.
    ///
    /// Fails with `ConfigError::AlreadyExists` otherwise.
    async fn create(&self, config: &AppConfig) -> Result<(), ConfigError>;

    /// Location of the settings file.
    fn path(&self) -> &Path;
}
