pub mod account;
pub mod auth;
pub mod config_export;
pub mod contact;
