//! OMI Config Validator - consistency checks for OMI build configuration
//!
//! This library validates the settings used to produce an OMI and copy it
//! to other regions: region deduplication, per-region KMS keys, sharing of
//! encrypted images and snapshots, and naming rules.

pub mod config;
pub mod domain;
pub mod shared;

#[cfg(test)]
mod tests;

pub use config::{AppConfig, ConfigValidator};
pub use domain::validation::{clean_omi_name, is_valid_kms_key, validate};
pub use domain::{AccessConfig, OmiConfig, OmiConfigError, OmiValidator};
pub use shared::error::{AppError, AppResult};

/// Application result type
pub type Result<T> = std::result::Result<T, shared::error::AppError>;
