//! Application configuration structures
//!
//! This module contains the configuration loaded by the `omi-validate`
//! binary: the OMI settings, the access context and logging options.

use serde::{Deserialize, Serialize};
use std::path::Path;
use validator::{Validate, ValidationError};

use crate::domain::{AccessConfig, OmiConfig};
use crate::shared::error::AppError;
use crate::shared::logging::LOG_FORMATS;

/// Environment variable prefix, e.g. `OMI__OMI__OMI_NAME`
const ENV_PREFIX: &str = "OMI";

/// Default configuration file name, extension picked up by `config`
const DEFAULT_FILE: &str = "Omi";

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[validate(length(min = 1))]
    pub level: String,

    /// Log format (json, text)
    #[validate(custom(function = "validate_log_format"))]
    pub format: String,
}

fn validate_log_format(format: &str) -> Result<(), ValidationError> {
    if LOG_FORMATS.iter().any(|known| known.eq_ignore_ascii_case(format)) {
        Ok(())
    } else {
        Err(ValidationError::new("unsupported_log_format"))
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// OMI build settings
    pub omi: OmiConfig,

    /// Access context of the build
    pub access: AccessConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from the default file and environment variables
    pub fn load() -> crate::Result<Self> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name(DEFAULT_FILE).required(false));
        Self::build(builder)
    }

    /// Load configuration from an explicit file, overlaid with environment variables
    pub fn load_from(path: impl AsRef<Path>) -> crate::Result<Self> {
        let builder = config::Config::builder()
            .add_source(config::File::from(path.as_ref()).required(true));
        Self::build(builder)
    }

    /// Parse configuration from a TOML document
    pub fn from_toml_str(raw: &str) -> crate::Result<Self> {
        let config: AppConfig = toml::from_str(raw)?;
        config.validate_config()?;
        Ok(config)
    }

    fn build(builder: config::ConfigBuilder<config::builder::DefaultState>) -> crate::Result<Self> {
        let config = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("omi.omi_users")
                    .with_list_parse_key("omi.omi_groups")
                    .with_list_parse_key("omi.omi_product_codes")
                    .with_list_parse_key("omi.omi_regions")
                    .with_list_parse_key("omi.snapshot_users")
                    .with_list_parse_key("omi.snapshot_groups")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build configuration: {}", e)))?;

        let config: AppConfig = config
            .try_deserialize()
            .map_err(|e| AppError::Config(format!("Failed to deserialize configuration: {}", e)))?;

        config.validate_config()?;
        Ok(config)
    }

    /// Structural checks on the loaded sections
    pub fn validate_config(&self) -> Result<(), validator::ValidationErrors> {
        self.access.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
