use async_trait::async_trait;
use serde_json::{Map, Value};
use sqlx::types::Json;

use super::*;
use crate::domain::config_export::{
    models::{config_entry::ConfigEntry, config_name::ConfigName},
    ports::ConfigStore,
};

#[async_trait]
impl ConfigStore for PostgresDb {
    #[tracing::instrument(name = "Load configuration object", skip(self, name), fields(config_name = %name))]
    async fn get(&self, name: &ConfigName) -> Result<Option<ConfigEntry>, anyhow::Error> {
        let row = sqlx::query(r#"SELECT data FROM config WHERE name = $1"#)
            .bind(name.as_str())
            .fetch_optional(&self.pool)
            .await
            .context("Failed to perform a query to retrieve a configuration object.")?;

        row.map(|row| -> Result<ConfigEntry, anyhow::Error> {
            let Json(data): Json<Map<String, Value>> = row
                .try_get("data")
                .context("Stored configuration data is not a key/value mapping.")?;
            Ok(ConfigEntry::new(name.clone(), data))
        })
        .transpose()
    }
}
