//! Error handling module
//!
//! This module provides centralized error handling for the application.

use thiserror::Error;

use crate::domain::validation::OmiConfigError;

/// Application error types
#[derive(Error, Debug, Clone)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid OMI configuration: {}", join_messages(.0))]
    InvalidOmiConfig(Vec<OmiConfigError>),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Individual validation failures carried by this error, if any
    pub fn omi_errors(&self) -> &[OmiConfigError] {
        match self {
            AppError::InvalidOmiConfig(errs) => errs,
            _ => &[],
        }
    }
}

fn join_messages(errs: &[OmiConfigError]) -> String {
    errs.iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Application result type
pub type AppResult<T> = Result<T, AppError>;

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_omi_config_joins_messages() {
        let err = AppError::InvalidOmiConfig(vec![
            OmiConfigError::MissingName,
            OmiConfigError::NameLength,
        ]);
        assert_eq!(
            err.to_string(),
            "Invalid OMI configuration: omi_name must be specified; \
             omi_name must be between 3 and 128 characters long"
        );
        assert_eq!(err.omi_errors().len(), 2);
    }

    #[test]
    fn test_other_errors_carry_no_omi_errors() {
        let err = AppError::Config("missing file".to_string());
        assert!(err.omi_errors().is_empty());
        assert_eq!(err.to_string(), "Configuration error: missing file");
    }
}
