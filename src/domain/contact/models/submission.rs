use crate::domain::contact::errors::ContactError;
use serde_json::Value;

/// Raw payload of `POST /api/contact-user`. Every field may be absent or of
/// an unexpected JSON type; `ContactSubmission::parse` decides what is usable.
#[derive(Debug, Default, serde::Deserialize)]
pub struct ContactSubmissionRequest {
    #[serde(default)]
    pub recipient: Value,
    #[serde(default)]
    pub subject: Value,
    #[serde(default)]
    pub message: Value,
    #[serde(default)]
    pub copy: Value,
}

impl ContactSubmissionRequest {
    pub fn new(recipient: impl Into<Value>, subject: &str, message: &str) -> Self {
        Self {
            recipient: recipient.into(),
            subject: subject.into(),
            message: message.into(),
            copy: Value::Null,
        }
    }

    pub fn with_copy(self, copy: impl Into<Value>) -> Self {
        Self {
            copy: copy.into(),
            ..self
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MessageSubject(String);

impl MessageSubject {
    /// Counted in characters, the unit of the `VARCHAR(100)` column.
    pub const MAX_LENGTH: usize = 100;

    fn parse(s: String) -> Result<MessageSubject, ContactError> {
        if s.chars().count() > Self::MAX_LENGTH {
            return Err(ContactError::SubjectTooLong);
        }
        Ok(Self(s))
    }
}

impl AsRef<str> for MessageSubject {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MessageBody(String);

impl AsRef<str> for MessageBody {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A submission whose required fields are all present.
#[derive(Debug, Clone)]
pub struct ContactSubmission {
    recipient: String,
    subject: MessageSubject,
    body: MessageBody,
    copy: bool,
}

impl ContactSubmission {
    pub fn parse(request: ContactSubmissionRequest) -> Result<ContactSubmission, ContactError> {
        if is_empty(&request.recipient) || is_empty(&request.subject) || is_empty(&request.message)
        {
            return Err(ContactError::MissingFields);
        }
        let recipient = scalar_text(&request.recipient).unwrap_or_default();
        let subject = scalar_text(&request.subject).ok_or(ContactError::MissingFields)?;
        let body = scalar_text(&request.message).ok_or(ContactError::MissingFields)?;

        Ok(Self {
            recipient,
            subject: MessageSubject::parse(subject)?,
            body: MessageBody(body),
            copy: !is_empty(&request.copy),
        })
    }

    /// The recipient exactly as submitted; it may not name a real user.
    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    pub fn subject(&self) -> &MessageSubject {
        &self.subject
    }

    pub fn body(&self) -> &MessageBody {
        &self.body
    }

    pub fn copy(&self) -> bool {
        self.copy
    }

    pub(crate) fn into_parts(self) -> (MessageSubject, MessageBody, bool) {
        (self.subject, self.body, self.copy)
    }
}

/// Loose emptiness: `null`, `false`, `0`, `""`, `"0"` and empty containers.
fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().map_or(false, |f| f == 0.0),
        Value::String(s) => s.is_empty() || s == "0",
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(number_text(n)),
        Value::Bool(true) => Some("1".into()),
        _ => None,
    }
}

/// Integral floats such as `2.0` are written without the fraction.
fn number_text(n: &serde_json::Number) -> String {
    match n.as_f64() {
        Some(f)
            if !n.is_i64() && !n.is_u64() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 =>
        {
            (f as i64).to_string()
        }
        _ => n.to_string(),
    }
}
