pub mod config_entry;
pub mod config_name;
