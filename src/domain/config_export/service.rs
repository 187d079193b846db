use async_trait::async_trait;
use std::sync::Arc;

use super::{
    errors::ConfigExportError,
    models::{config_entry::ConfigEntry, config_name::ConfigName},
    ports::{ConfigExportService, ConfigStore},
};

#[derive(Debug)]
pub struct ConfigExport<S>
where
    S: ConfigStore,
{
    pub store: Arc<S>,
}

impl<S> ConfigExport<S>
where
    S: ConfigStore,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> ConfigExportService for ConfigExport<S>
where
    S: ConfigStore,
{
    async fn export(&self, name: String) -> Result<ConfigEntry, ConfigExportError> {
        let name = ConfigName::parse(name)?;
        self.store
            .get(&name)
            .await?
            .ok_or_else(|| ConfigExportError::NotFound(name.to_string()))
    }
}
