use async_trait::async_trait;

use super::*;
use crate::domain::account::user::UserAccount;
use crate::domain::contact::{
    models::message::Message,
    ports::{MailError, MailHandler},
};

impl EmailClient {
    fn personal_text(message: &Message) -> String {
        format!(
            "Hello {},\n\n{} ({}) has sent you a message via your contact form.\n\n{}",
            message.recipient.account_name(),
            message.sender_name,
            message.sender_mail,
            message.body.as_ref()
        )
    }

    fn copy_text(message: &Message) -> String {
        format!(
            "This is a copy of the message you sent to {}.\n\n{}",
            message.recipient.account_name(),
            message.body.as_ref()
        )
    }
}

#[async_trait]
impl MailHandler for EmailClient {
    #[tracing::instrument(
        name = "Send a contact message",
        skip(self, message, sender),
        fields(recipient = %message.recipient_id(), copy = message.copy)
    )]
    async fn send_mail_messages(
        &self,
        message: &Message,
        sender: &UserAccount,
    ) -> Result<(), MailError> {
        let text_body = Self::personal_text(message);
        self.send_email(SendEmailRequest {
            from: self.sender.as_ref(),
            to: message.recipient.email().as_ref(),
            reply_to: message.sender_mail.as_ref(),
            subject: message.subject.as_ref(),
            text_body: &text_body,
        })
        .await
        .map_err(MailError::Delivery)?;

        if message.copy {
            let copy_body = Self::copy_text(message);
            self.send_email(SendEmailRequest {
                from: self.sender.as_ref(),
                to: sender.email().as_ref(),
                reply_to: message.sender_mail.as_ref(),
                subject: message.subject.as_ref(),
                text_body: &copy_body,
            })
            .await
            .map_err(MailError::Delivery)?;
        }

        Ok(())
    }
}
