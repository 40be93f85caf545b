//! Configuration validation module
//!
//! This module applies the OMI consistency rules to a loaded application
//! configuration, beyond the structural checks done by the validator crate.

use crate::config::AppConfig;
use crate::domain::OmiValidator;
use crate::shared::error::AppError;

/// Configuration validator for additional validation logic
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the complete configuration
    ///
    /// Reconciles `omi.omi_regions` in place. Every OMI rule failure is
    /// returned at once inside [`AppError::InvalidOmiConfig`].
    pub fn validate_config(config: &mut AppConfig) -> crate::Result<()> {
        config.validate_config()?;

        let errs = OmiValidator::validate(&mut config.omi, Some(&config.access));
        if !errs.is_empty() {
            return Err(AppError::InvalidOmiConfig(errs));
        }

        Ok(())
    }
}
