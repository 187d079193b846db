use async_trait::async_trait;

use super::{
    errors::ConfigExportError,
    models::{config_entry::ConfigEntry, config_name::ConfigName},
};

#[async_trait]
/// Read access to the store owning configuration objects.
pub trait ConfigStore: Send + Sync + 'static {
    /// Returns `None` when nothing is stored under `name`.
    async fn get(&self, name: &ConfigName) -> Result<Option<ConfigEntry>, anyhow::Error>;
}

#[async_trait]
pub trait ConfigExportService: Send + Sync + 'static {
    async fn export(&self, name: String) -> Result<ConfigEntry, ConfigExportError>;
}
