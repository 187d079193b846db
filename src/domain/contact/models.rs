pub mod message;
pub mod preference;
pub mod submission;
