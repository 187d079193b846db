pub mod config_export;
pub mod contact_user;
pub mod health_check;

pub use config_export::export_config;
pub use contact_user::contact_user;
pub use health_check::health_check;
