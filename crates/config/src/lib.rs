//! Configuration management for the vendor assistant
//!
//! Supports loading configuration from:
//! - YAML/TOML files (`config/default`, `config/{env}`)
//! - Environment variables (`VENDOR_ASSIST` prefix)
//!
//! Reference data (prices, locations, wholesale markets) lives in the
//! [`ReferenceData`] catalogue: the built-in demo tables, or a JSON/TOML
//! file named by `reference_data_path`.

pub mod catalog;
pub mod constants;
pub mod settings;

pub use catalog::ReferenceData;
pub use settings::{load_settings, load_settings_from, ObservabilityConfig, Settings};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

impl From<ConfigError> for vendor_assist_core::Error {
    fn from(err: ConfigError) -> Self {
        vendor_assist_core::Error::Config(err.to_string())
    }
}
