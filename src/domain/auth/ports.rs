use async_trait::async_trait;

use crate::domain::account::user::UserAccount;
use crate::domain::auth::credentials::{Credentials, CredentialsError, StoredCredentials};

#[async_trait]
pub trait AuthRepository: Send + Sync + 'static {
    /// Credentials of the active account named `username`, if any.
    async fn get_stored_credentials(
        &self,
        username: &str,
    ) -> Result<Option<StoredCredentials>, CredentialsError>;
}

#[async_trait]
pub trait AuthService: Send + Sync + 'static {
    /// Resolves the account acting as current user for a request.
    async fn authenticate(&self, credentials: Credentials)
        -> Result<UserAccount, CredentialsError>;
}
