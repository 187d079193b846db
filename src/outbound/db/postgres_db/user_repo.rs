use async_trait::async_trait;

use super::*;
use crate::domain::contact::ports::{UserDataRepository, UserRepository};

#[async_trait]
impl UserRepository for PostgresDb {
    #[tracing::instrument(name = "Load user account", skip(self))]
    async fn load_user(&self, id: &UserId) -> Result<Option<UserAccount>, anyhow::Error> {
        let row = sqlx::query(r#"SELECT user_id, name, mail FROM users WHERE user_id = $1"#)
            .bind(id.as_i64())
            .fetch_optional(&self.pool)
            .await
            .context("Failed to perform a query to load a user account.")?;

        row.as_ref().map(account_from_row).transpose()
    }
}

#[async_trait]
impl UserDataRepository for PostgresDb {
    #[tracing::instrument(name = "Read user data", skip(self))]
    async fn get_user_data(
        &self,
        module: &str,
        id: &UserId,
        name: &str,
    ) -> Result<Option<String>, anyhow::Error> {
        let value = sqlx::query_scalar::<_, String>(
            r#"SELECT value FROM users_data WHERE uid = $1 AND module = $2 AND name = $3"#,
        )
        .bind(id.as_i64())
        .bind(module)
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to perform a query to read user data.")?;

        Ok(value)
    }
}
