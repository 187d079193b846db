#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigNameError {
    #[error("Config name parameter is missing.")]
    Missing,
}

/// Name under which a configuration object is stored, e.g. `system.site`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConfigName(String);

impl ConfigName {
    /// `""` and `"0"` read as no name at all; anything else, whitespace
    /// included, is looked up as given.
    pub fn parse(s: String) -> Result<ConfigName, ConfigNameError> {
        if s.is_empty() || s == "0" {
            return Err(ConfigNameError::Missing);
        }
        Ok(Self(s))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ConfigName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ConfigName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
