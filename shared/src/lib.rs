pub mod entry;
pub mod error;
pub mod log_config;
