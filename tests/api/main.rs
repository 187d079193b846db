mod config_export;
mod health_check;
mod helpers;
