//! OMI configuration validation
//!
//! This module contains the consistency rules applied to an OMI
//! configuration before any image is built or copied.

pub mod kms;
pub mod name;
pub mod omi_validator;
pub mod regions;
pub mod types;

pub use kms::is_valid_kms_key;
pub use name::{clean_omi_name, is_clean_name};
pub use omi_validator::{validate, OmiValidator};
pub use regions::{reconcile_regions, ReconciledRegions};
pub use types::{OmiConfigError, MAX_NAME_LENGTH, MIN_NAME_LENGTH};
