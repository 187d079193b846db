use async_trait::async_trait;
use std::sync::Arc;

use super::{
    errors::ContactError,
    models::{
        message::Message,
        preference::{ContactPreference, CONTACT_ENABLED_KEY, CONTACT_MODULE},
        submission::{ContactSubmission, ContactSubmissionRequest},
    },
    ports::{ContactService, MailHandler, MessageRepository, UserDataRepository, UserRepository},
};
use crate::domain::account::user::{UserAccount, UserId};

#[derive(Debug)]
pub struct Contact<U, D, M, N>
where
    U: UserRepository,
    D: UserDataRepository,
    M: MessageRepository,
    N: MailHandler,
{
    pub users: Arc<U>,
    pub user_data: Arc<D>,
    pub messages: Arc<M>,
    pub mail_handler: Arc<N>,
}

impl<U, D, M, N> Contact<U, D, M, N>
where
    U: UserRepository,
    D: UserDataRepository,
    M: MessageRepository,
    N: MailHandler,
{
    pub fn new(users: Arc<U>, user_data: Arc<D>, messages: Arc<M>, mail_handler: Arc<N>) -> Self {
        Self {
            users,
            user_data,
            messages,
            mail_handler,
        }
    }

    async fn resolve_recipient(&self, recipient: &str) -> Result<UserAccount, ContactError> {
        let id = UserId::parse(recipient).map_err(|_| ContactError::InvalidRecipient)?;
        self.users
            .load_user(&id)
            .await?
            .ok_or(ContactError::InvalidRecipient)
    }
}

#[async_trait]
impl<U, D, M, N> ContactService for Contact<U, D, M, N>
where
    U: UserRepository,
    D: UserDataRepository,
    M: MessageRepository,
    N: MailHandler,
{
    #[tracing::instrument(
        name = "Submit a contact message",
        skip(self, request, sender),
        fields(sender = %sender.id, recipient = tracing::field::Empty)
    )]
    async fn submit(
        &self,
        request: ContactSubmissionRequest,
        sender: &UserAccount,
    ) -> Result<Message, ContactError> {
        let submission = ContactSubmission::parse(request)?;
        tracing::Span::current().record("recipient", submission.recipient());

        let recipient = self.resolve_recipient(submission.recipient()).await?;
        let preference: ContactPreference = self
            .user_data
            .get_user_data(CONTACT_MODULE, &recipient.id, CONTACT_ENABLED_KEY)
            .await?
            .into();
        if !preference.is_enabled() {
            return Err(ContactError::ContactDisabled);
        }

        let recipient_id = recipient.id;
        let message = self
            .messages
            .save_message(Message::new(submission, recipient, sender))
            .await?;

        // The stored message is kept even when delivery fails.
        if let Err(e) = self.mail_handler.send_mail_messages(&message, sender).await {
            tracing::error!(
                error.cause_chain = ?e,
                "Failed to send email to \"{}\".",
                recipient_id
            );
            return Err(ContactError::DeliveryFailed(e.to_string()));
        }

        Ok(message)
    }
}
