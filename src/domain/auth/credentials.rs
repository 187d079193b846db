use crate::domain::account::user::UserAccount;
use crate::outbound::telemetry::spawn_blocking_with_tracing;
use anyhow::Context;
use argon2::{Argon2, PasswordHash, PasswordVerifier};
use once_cell::sync::Lazy;
use secrecy::{ExposeSecret, Secret};

#[derive(Debug)]
pub struct Credentials {
    username: String,
    password: Secret<String>,
}

impl Credentials {
    pub fn new(username: String, password: String) -> Self {
        Self {
            username,
            password: Secret::new(password),
        }
    }

    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Verifies the password against the stored hash and returns the account
    /// it unlocks. Unknown usernames are checked against a dummy hash so both
    /// failure paths cost the same.
    #[tracing::instrument(name = "Validate credentials", skip(self, stored_credentials))]
    pub async fn validate(
        self,
        stored_credentials: Option<StoredCredentials>,
    ) -> Result<UserAccount, CredentialsError> {
        let stored_credentials = stored_credentials.unwrap_or_default();
        let password_hash = stored_credentials.password_hash;
        let password = self.password;

        spawn_blocking_with_tracing(move || verify_password_hash(password_hash, password))
            .await
            .context("Failed to spawn a blocking task.")
            .map_err(CredentialsError::Unexpected)??;

        stored_credentials
            .account
            .ok_or_else(|| CredentialsError::AuthError("Unknown username.".into()))
    }
}

pub struct StoredCredentials {
    account: Option<UserAccount>,
    password_hash: Secret<String>,
}

static DEFAULT_PASSWORD_HASH: Lazy<Secret<String>> = Lazy::new(|| {
    Secret::new(
        "$argon2id$v=19$m=15000,t=2,p=1$\
    gZiV/M1gPc22ElAH/Jh1Hw$\
    CWOrkoo7oJBQ/iyh7uJ0LO2aLEfrHwTWllSAxT0zRno"
            .to_string(),
    )
});

impl StoredCredentials {
    pub fn new(account: UserAccount, password_hash: String) -> Self {
        Self {
            account: Some(account),
            password_hash: Secret::new(password_hash),
        }
    }
}

impl Default for StoredCredentials {
    fn default() -> Self {
        Self {
            account: None,
            password_hash: DEFAULT_PASSWORD_HASH.clone(),
        }
    }
}

fn verify_password_hash(
    expected_password_hash: Secret<String>,
    password_candidate: Secret<String>,
) -> Result<(), CredentialsError> {
    let expected_password_hash = PasswordHash::new(expected_password_hash.expose_secret())
        .context("Failed to parse hash in PHC string format.")
        .map_err(CredentialsError::Unexpected)?;

    Argon2::default()
        .verify_password(
            password_candidate.expose_secret().as_bytes(),
            &expected_password_hash,
        )
        .map_err(|_| CredentialsError::AuthError("Invalid password.".into()))
}

#[derive(thiserror::Error, Debug)]
pub enum CredentialsError {
    #[error("Authentication error: {0}")]
    AuthError(String),
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}
