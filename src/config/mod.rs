//! Configuration management module
//!
//! This module handles loading the application configuration and running
//! the OMI validation rules over it.

pub mod app_config;
pub mod validation;

pub use app_config::{AppConfig, LoggingConfig};
pub use validation::ConfigValidator;
