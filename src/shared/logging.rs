//! Logging utilities module
//!
//! This module provides centralized logging functionality and utilities.

use tracing::{debug, info};

use crate::shared::error::AppError;

/// Log output formats accepted in `logging.format`
pub const LOG_FORMATS: &[&str] = &["text", "json"];

/// Logging utilities for the application
pub struct LoggingUtils;

impl LoggingUtils {
    /// Initialize logging with the specified level and format ("text" or "json")
    pub fn initialize(level: &str, format: &str) -> crate::Result<()> {
        use tracing_subscriber::{fmt, EnvFilter};

        let json = match format.to_ascii_lowercase().as_str() {
            "json" => true,
            "text" => false,
            other => {
                return Err(AppError::Config(format!(
                    "Unsupported log format '{}', expected one of: {}",
                    other,
                    LOG_FORMATS.join(", ")
                )))
            }
        };

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(level));

        let builder = fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .with_ansi(false);

        let result = if json {
            tracing::subscriber::set_global_default(builder.json().finish())
        } else {
            tracing::subscriber::set_global_default(builder.finish())
        };

        result.map_err(|e| AppError::Internal(format!("Failed to initialize logging: {}", e)))
    }

    /// Log that the origin region was removed from the copy targets
    pub fn log_origin_region_dropped(region: &str) {
        info!(
            region = %region,
            "Cannot copy OMI to session region, deleting it from omi_regions"
        );
    }

    /// Log the outcome of an OMI validation pass
    pub fn log_validation_summary(omi_name: &str, error_count: usize, region_count: usize) {
        debug!(
            omi_name = %omi_name,
            error_count = %error_count,
            region_count = %region_count,
            "OMI configuration validated"
        );
    }
}
