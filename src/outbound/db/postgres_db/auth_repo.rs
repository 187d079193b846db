use async_trait::async_trait;

use super::*;
use crate::domain::auth::credentials::{CredentialsError, StoredCredentials};
use crate::domain::auth::ports::AuthRepository;

#[async_trait]
impl AuthRepository for PostgresDb {
    #[tracing::instrument(name = "Get stored credentials", skip(username, self))]
    async fn get_stored_credentials(
        &self,
        username: &str,
    ) -> Result<Option<StoredCredentials>, CredentialsError> {
        let row = sqlx::query(
            r#"SELECT user_id, name, mail, pass FROM users WHERE name = $1 AND status = 1"#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to perform a query to retrieve stored credentials.")?;

        let Some(row) = row else {
            return Ok(None);
        };
        let account = account_from_row(&row)?;
        let password_hash: String = row
            .try_get("pass")
            .context("Failed to read the stored password hash.")?;
        Ok(Some(StoredCredentials::new(account, password_hash)))
    }
}
