use async_trait::async_trait;

use super::{
    errors::ContactError,
    models::{message::Message, submission::ContactSubmissionRequest},
};
use crate::domain::account::user::{UserAccount, UserId};

#[async_trait]
/// Represents the store of user accounts
pub trait UserRepository: Send + Sync + 'static {
    /// Loads a user, `None` if no account has this id
    async fn load_user(&self, id: &UserId) -> Result<Option<UserAccount>, anyhow::Error>;
}

#[async_trait]
/// Per-user key/value settings grouped by module
pub trait UserDataRepository: Send + Sync + 'static {
    async fn get_user_data(
        &self,
        module: &str,
        id: &UserId,
        name: &str,
    ) -> Result<Option<String>, anyhow::Error>;
}

#[async_trait]
pub trait MessageRepository: Send + Sync + 'static {
    /// Persists a new message and returns it with its assigned id
    async fn save_message(&self, message: Message) -> Result<Message, anyhow::Error>;
}

#[async_trait]
pub trait MailHandler: Send + Sync + 'static {
    /// Sends `message` to its recipient, plus a copy to `sender` when requested.
    async fn send_mail_messages(
        &self,
        message: &Message,
        sender: &UserAccount,
    ) -> Result<(), MailError>;
}

#[derive(thiserror::Error, Debug)]
pub enum MailError {
    #[error("Unable to send email. Contact the site administrator if the problem persists.")]
    Delivery(#[source] anyhow::Error),
}

#[async_trait]
pub trait ContactService: Send + Sync + 'static {
    async fn submit(
        &self,
        request: ContactSubmissionRequest,
        sender: &UserAccount,
    ) -> Result<Message, ContactError>;
}
