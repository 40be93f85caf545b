//! OMI configuration validator
//!
//! Runs every consistency rule over an [`OmiConfig`] and collects all
//! failures so they can be reported together. The only side effect is that
//! `regions` is replaced by its reconciled form.

use super::kms::is_valid_kms_key;
use super::name::clean_omi_name;
use super::regions::reconcile_regions;
use super::types::{OmiConfigError, MAX_NAME_LENGTH, MIN_NAME_LENGTH};
use crate::domain::access::AccessConfig;
use crate::domain::omi::OmiConfig;
use crate::shared::logging::LoggingUtils;

/// Validator for OMI build configuration
pub struct OmiValidator;

impl OmiValidator {
    /// Validate `config`, reconciling its region list in place
    ///
    /// Returns every failure in rule order; an empty list means the build can
    /// proceed.
    pub fn validate(config: &mut OmiConfig, access: Option<&AccessConfig>) -> Vec<OmiConfigError> {
        let mut errs = Vec::new();

        if config.name.is_empty() {
            errs.push(OmiConfigError::MissingName);
        }

        errs.extend(Self::check_key_regions_listed(config));
        errs.extend(Self::prepare_regions(config, access));

        if !config.users.is_empty() && config.encrypt_boot_volume {
            errs.push(OmiConfigError::SharedEncryptedBootVolume);
        }

        errs.extend(Self::check_kms_keys(config));
        errs.extend(Self::check_snapshot_sharing(config));

        if config.name.len() < MIN_NAME_LENGTH || config.name.len() > MAX_NAME_LENGTH {
            errs.push(OmiConfigError::NameLength);
        }

        if config.name != clean_omi_name(&config.name) {
            errs.push(OmiConfigError::UncleanName);
        }

        LoggingUtils::log_validation_summary(&config.name, errs.len(), config.regions.len());
        errs
    }

    /// Every region with a dedicated KMS key must also be a copy target
    fn check_key_regions_listed(config: &OmiConfig) -> Vec<OmiConfigError> {
        config
            .region_kms_key_ids
            .keys()
            .filter(|region| !config.regions.contains(region))
            .map(|region| OmiConfigError::KmsRegionNotInRegions {
                region: region.clone(),
            })
            .collect()
    }

    fn prepare_regions(config: &mut OmiConfig, access: Option<&AccessConfig>) -> Vec<OmiConfigError> {
        if config.regions.is_empty() {
            return Vec::new();
        }

        let origin = access.and_then(AccessConfig::origin_region);
        let reconciled = reconcile_regions(&config.regions, &config.region_kms_key_ids, origin);
        config.regions = reconciled.regions;
        reconciled.errors
    }

    /// Keys that will be used for encryption. A region mapped to an empty key
    /// falls back to the default key, so the default is checked once more for
    /// each such region.
    fn candidate_kms_keys(config: &OmiConfig) -> Vec<&str> {
        let mut keys = Vec::new();
        if !config.kms_key_id.is_empty() {
            keys.push(config.kms_key_id.as_str());
        }
        for key in config.region_kms_key_ids.values() {
            if key.is_empty() {
                keys.push(config.kms_key_id.as_str());
            }
        }
        keys
    }

    fn check_kms_keys(config: &OmiConfig) -> Vec<OmiConfigError> {
        Self::candidate_kms_keys(config)
            .into_iter()
            .filter(|key| !is_valid_kms_key(key))
            .map(|key| OmiConfigError::InvalidKmsKey {
                key: key.to_string(),
            })
            .collect()
    }

    fn check_snapshot_sharing(config: &OmiConfig) -> Vec<OmiConfigError> {
        let mut errs = Vec::new();
        if config.snapshot_users.is_empty() {
            return errs;
        }

        if config.kms_key_id.is_empty() && config.encrypt_boot_volume {
            errs.push(OmiConfigError::SharedSnapshotDefaultKey);
        }
        for key in config.region_kms_key_ids.values() {
            if key.is_empty() {
                errs.push(OmiConfigError::SharedSnapshotDefaultKey);
            }
        }
        errs
    }
}

impl OmiConfig {
    /// Validate this configuration; see [`OmiValidator::validate`]
    pub fn prepare(&mut self, access: Option<&AccessConfig>) -> Vec<OmiConfigError> {
        OmiValidator::validate(self, access)
    }
}

/// Validate `config` against the build's access context
pub fn validate(config: &mut OmiConfig, access: Option<&AccessConfig>) -> Vec<OmiConfigError> {
    OmiValidator::validate(config, access)
}
