use super::submission::{ContactSubmission, MessageBody, MessageSubject};
use crate::domain::account::email::AccountEmail;
use crate::domain::account::user::{UserAccount, UserId};
use chrono::{DateTime, Utc};

pub type MessageId = Option<uuid::Uuid>;

/// Contact form a message belongs to. User-to-user messages always use the
/// personal form.
pub const PERSONAL_CONTACT_FORM: &str = "personal";

/// A contact message addressed to one user. Built once recipient and
/// preference checks have passed, then persisted and never changed.
#[derive(Debug, Clone)]
pub struct Message {
    pub id: MessageId,
    pub subject: MessageSubject,
    pub body: MessageBody,
    pub copy: bool,
    pub recipient: UserAccount,
    pub sender_name: String,
    pub sender_mail: AccountEmail,
    pub created: DateTime<Utc>,
}

impl Message {
    pub fn new(submission: ContactSubmission, recipient: UserAccount, sender: &UserAccount) -> Self {
        let (subject, body, copy) = submission.into_parts();
        Self {
            id: None,
            subject,
            body,
            copy,
            recipient,
            sender_name: sender.account_name().to_string(),
            sender_mail: sender.email().clone(),
            created: Utc::now(),
        }
    }

    pub fn with_id(self, id: MessageId) -> Self {
        Self { id, ..self }
    }

    pub fn contact_form(&self) -> &'static str {
        PERSONAL_CONTACT_FORM
    }

    pub fn recipient_id(&self) -> UserId {
        self.recipient.id
    }

    /// Stored representation of the copy flag.
    pub fn copy_flag(&self) -> i16 {
        if self.copy {
            1
        } else {
            0
        }
    }
}
