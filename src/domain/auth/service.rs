use async_trait::async_trait;

use super::ports::{AuthRepository, AuthService};
use crate::domain::account::user::UserAccount;
use crate::domain::auth::credentials::{Credentials, CredentialsError};

use std::sync::Arc;

#[derive(Debug)]
pub struct Auth<R>
where
    R: AuthRepository,
{
    pub repo: Arc<R>,
}

impl<R> Auth<R>
where
    R: AuthRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> AuthService for Auth<R>
where
    R: AuthRepository,
{
    #[tracing::instrument(
        name = "Authenticate current user",
        skip(self, credentials),
        fields(username = %credentials.username(), user_id = tracing::field::Empty)
    )]
    async fn authenticate(
        &self,
        credentials: Credentials,
    ) -> Result<UserAccount, CredentialsError> {
        let stored_credentials = self
            .repo
            .get_stored_credentials(credentials.username())
            .await?;

        let account = credentials.validate(stored_credentials).await?;
        tracing::Span::current().record("user_id", tracing::field::display(&account.id));
        Ok(account)
    }
}
