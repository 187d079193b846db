use super::email::AccountEmail;

/// Identifier of a stored user account. Only positive ids name real users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(i64);

#[derive(thiserror::Error, Debug)]
pub enum UserIdError {
    #[error("'{0}' is not a valid user id")]
    Invalid(String),
}

impl UserId {
    pub fn parse(s: &str) -> Result<UserId, UserIdError> {
        let trimmed = s.trim();
        if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
            return Err(UserIdError::Invalid(s.to_string()));
        }
        match trimmed.parse::<i64>() {
            Ok(id) if id > 0 => Ok(Self(id)),
            _ => Err(UserIdError::Invalid(s.to_string())),
        }
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for UserId {
    type Error = UserIdError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value > 0 {
            Ok(Self(value))
        } else {
            Err(UserIdError::Invalid(value.to_string()))
        }
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAccount {
    pub id: UserId,
    pub account_name: String,
    pub email: AccountEmail,
}

impl UserAccount {
    pub fn new(id: UserId, account_name: impl Into<String>, email: AccountEmail) -> Self {
        Self {
            id,
            account_name: account_name.into(),
            email,
        }
    }

    pub fn account_name(&self) -> &str {
        &self.account_name
    }

    pub fn email(&self) -> &AccountEmail {
        &self.email
    }
}
