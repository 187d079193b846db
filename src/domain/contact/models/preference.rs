/// User data namespace holding contact settings.
pub const CONTACT_MODULE: &str = "contact";
/// Key of the per-user contact flag inside `CONTACT_MODULE`.
pub const CONTACT_ENABLED_KEY: &str = "enabled";

const ENABLED_MARKER: &str = "1";

/// Whether a user accepts personal contact messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactPreference {
    Enabled,
    Disabled,
}

impl ContactPreference {
    pub fn is_enabled(&self) -> bool {
        matches!(self, ContactPreference::Enabled)
    }
}

impl From<Option<String>> for ContactPreference {
    fn from(stored: Option<String>) -> Self {
        match stored.as_deref() {
            Some(ENABLED_MARKER) => ContactPreference::Enabled,
            _ => ContactPreference::Disabled,
        }
    }
}
