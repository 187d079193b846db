use super::models::config_name::ConfigNameError;

#[derive(thiserror::Error, Debug)]
pub enum ConfigExportError {
    #[error("{0}")]
    InvalidName(#[from] ConfigNameError),
    #[error("Configuration '{0}' does not exist.")]
    NotFound(String),
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}
