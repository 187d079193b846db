use async_trait::async_trait;

use super::*;
use crate::domain::contact::{models::message::Message, ports::MessageRepository};

#[async_trait]
impl MessageRepository for PostgresDb {
    #[tracing::instrument(
        name = "Saving new contact message in db",
        skip(self, message),
        fields(recipient = %message.recipient_id(), message_id = tracing::field::Empty)
    )]
    async fn save_message(&self, message: Message) -> Result<Message, anyhow::Error> {
        let message_id = uuid::Uuid::new_v4();
        sqlx::query(
            r#"
        INSERT INTO contact_message
            (id, contact_form, subject, message, copy, recipient, name, mail, created)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(message_id)
        .bind(message.contact_form())
        .bind(message.subject.as_ref())
        .bind(message.body.as_ref())
        .bind(message.copy_flag())
        .bind(message.recipient_id().as_i64())
        .bind(&message.sender_name)
        .bind(message.sender_mail.as_str())
        .bind(message.created)
        .execute(&self.pool)
        .await
        .context("Failed to insert a new contact message in the database")?;

        tracing::Span::current().record("message_id", tracing::field::display(&message_id));
        Ok(message.with_id(Some(message_id)))
    }
}
