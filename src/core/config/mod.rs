pub mod config_models;
pub mod config_service;

pub use config_models::{EnvSnapshot, ExportConfig, ExportOptions};
