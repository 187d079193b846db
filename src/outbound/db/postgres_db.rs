use crate::configuration::DatabaseSettings;
use crate::domain::account::email::AccountEmail;
use crate::domain::account::user::{UserAccount, UserId};
use anyhow::Context;
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};

mod auth_repo;
mod config_repo;
mod message_repo;
mod user_repo;

#[derive(Clone, Debug)]
pub struct PostgresDb {
    pool: PgPool,
}

impl PostgresDb {
    pub fn new(configuration: &DatabaseSettings) -> PostgresDb {
        PostgresDb {
            pool: PgPoolOptions::new()
                .acquire_timeout(std::time::Duration::from_secs(2))
                .connect_lazy_with(configuration.with_db()),
        }
    }
}

/// Maps a `users` row selected as `user_id, name, mail`.
fn account_from_row(row: &PgRow) -> Result<UserAccount, anyhow::Error> {
    let user_id: i64 = row.try_get("user_id")?;
    let name: String = row.try_get("name")?;
    let mail: String = row.try_get("mail")?;

    let id = UserId::try_from(user_id)?;
    let email = AccountEmail::parse(mail)
        .with_context(|| format!("User {} has an invalid stored email", user_id))?;
    Ok(UserAccount::new(id, name, email))
}
