//! Main settings module

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use vendor_assist_core::Language;
use vendor_assist_text_processing::KeywordGroup;

use crate::constants::{defaults, env as env_vars};
use crate::{ConfigError, ReferenceData};

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// UI language replies default to when the input isn't Tamil script
    #[serde(default)]
    pub language: Language,

    /// English name of the initially selected city
    #[serde(default = "default_location")]
    pub location: String,

    /// Artificial delay before the assistant reply is appended (0 disables)
    #[serde(default = "default_reply_delay_ms")]
    pub reply_delay_ms: u64,

    /// Optional JSON/TOML catalogue replacing the built-in reference data
    #[serde(default)]
    pub reference_data_path: Option<String>,

    /// Keyword table replacing the built-in one, in priority order
    #[serde(default)]
    pub keywords: Option<Vec<KeywordGroup>>,

    /// Observability configuration
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

fn default_location() -> String {
    defaults::LOCATION.to_string()
}

fn default_reply_delay_ms() -> u64 {
    defaults::REPLY_DELAY_MS
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: Language::default(),
            location: default_location(),
            reply_delay_ms: default_reply_delay_ms(),
            reference_data_path: None,
            keywords: None,
            observability: ObservabilityConfig::default(),
        }
    }
}

impl Settings {
    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }

    /// Validate settings that don't depend on the catalogue
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.reply_delay_ms > defaults::MAX_REPLY_DELAY_MS {
            return Err(ConfigError::InvalidValue {
                field: "reply_delay_ms".to_string(),
                message: format!(
                    "Reply delay too high (maximum {}ms), got {}",
                    defaults::MAX_REPLY_DELAY_MS,
                    self.reply_delay_ms
                ),
            });
        }

        if self.location.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "location".to_string(),
                message: "Location cannot be empty".to_string(),
            });
        }

        Ok(())
    }

    /// Check the configured location exists in the catalogue
    pub fn validate_against(&self, data: &ReferenceData) -> Result<(), ConfigError> {
        if data.find_location(&self.location).is_none() {
            return Err(ConfigError::InvalidValue {
                field: "location".to_string(),
                message: format!("Unknown location: {}", self.location),
            });
        }
        Ok(())
    }

    /// Load the catalogue named by `reference_data_path`, or the built-in one
    pub fn reference_data(&self) -> Result<ReferenceData, ConfigError> {
        let data = match &self.reference_data_path {
            Some(path) => ReferenceData::from_file(path)?,
            None => ReferenceData::builtin(),
        };
        self.validate_against(&data)?;
        Ok(data)
    }
}

/// Observability configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Enable JSON logging
    #[serde(default)]
    pub log_json: bool,
}

fn default_log_level() -> String {
    defaults::LOG_LEVEL.to_string()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_json: false,
        }
    }
}

/// Load settings from `config/` and environment
///
/// Priority (highest to lowest):
/// 1. Environment variables (`VENDOR_ASSIST_` prefix, `__` between nested keys)
/// 2. config/{env}.yaml|toml (if env specified)
/// 3. config/default.yaml|toml
pub fn load_settings(env: Option<&str>) -> Result<Settings, ConfigError> {
    load_settings_from(Path::new("config"), env)
}

/// Same as [`load_settings`] with an explicit config directory
pub fn load_settings_from(dir: &Path, env: Option<&str>) -> Result<Settings, ConfigError> {
    let mut builder = Config::builder();

    let default_path = dir.join("default");
    builder = builder.add_source(File::with_name(&default_path.to_string_lossy()).required(false));

    if let Some(env_name) = env {
        let env_path = dir.join(env_name);
        builder = builder.add_source(File::with_name(&env_path.to_string_lossy()).required(false));
    }

    build_settings(builder.add_source(environment()))
}

/// Environment source: `VENDOR_ASSIST_REPLY_DELAY_MS`, nested keys with `__`
fn environment() -> Environment {
    Environment::with_prefix(env_vars::PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

fn build_settings(
    builder: config::ConfigBuilder<config::builder::DefaultState>,
) -> Result<Settings, ConfigError> {
    let config = builder.build()?;
    let settings: Settings = config.try_deserialize()?;

    settings.validate()?;

    Ok(settings)
}
