use super::models::submission::MessageSubject;

#[derive(thiserror::Error, Debug)]
pub enum ContactError {
    #[error("Missing recipient, subject, or message.")]
    MissingFields,
    #[error("Subject cannot be longer than {} characters.", MessageSubject::MAX_LENGTH)]
    SubjectTooLong,
    #[error("Please provide a valid user ID for the recipient.")]
    InvalidRecipient,
    #[error("The recipient has disabled contact. Please contact the administrator.")]
    ContactDisabled,
    /// The message was stored but could not be delivered.
    #[error("{0}")]
    DeliveryFailed(String),
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}
