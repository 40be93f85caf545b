//! End-to-end checks of the OMI validation rules
//!
//! Scenarios that combine several rules or go through the configuration
//! layer. Rule-level tests live next to each rule.


use crate::config::{AppConfig, ConfigValidator};
use crate::domain::validation::{clean_omi_name, is_clean_name, is_valid_kms_key};
use crate::domain::{OmiConfig, OmiConfigError, OmiValidator};
use crate::shared::error::AppError;
use fixtures::*;

#[test]
fn test_valid_config_has_no_errors() {
    let mut config = valid_config();
    assert!(OmiValidator::validate(&mut config, None).is_empty());
}

#[test]
fn test_documented_kms_key_shapes() {
    for key in [KEY_ID, "alias/my-key", KEY_ARN, ALIAS_ARN] {
        assert!(is_valid_kms_key(key), "{key}");
    }
    for key in ["", "not-a-key!", "Alias/bad-case"] {
        assert!(!is_valid_kms_key(key), "{key}");
    }
}

#[test]
fn test_multi_region_copy_from_origin() {
    let mut config = multi_region_config();
    let errs = OmiValidator::validate(&mut config, Some(&access("us-east-2")));

    assert!(errs.is_empty(), "{errs:?}");
    assert_eq!(config.regions, strings(&["eu-west-2", "us-west-1"]));
}

#[test]
fn test_multi_region_missing_key_for_region() {
    let mut config = multi_region_config();
    config.regions.push("ap-northeast-1".to_string());

    let errs = OmiValidator::validate(&mut config, Some(&access("us-east-2")));
    assert_eq!(
        errs,
        vec![OmiConfigError::RegionNotInKmsKeys {
            region: "ap-northeast-1".to_string()
        }]
    );
    assert_eq!(
        config.regions,
        strings(&["eu-west-2", "us-west-1", "ap-northeast-1"])
    );
}

#[test]
fn test_sharing_encrypted_image_always_rejected() {
    for with_key in [false, true] {
        let mut config = multi_region_config();
        config.users = vec![ACCOUNT_ID.to_string()];
        if !with_key {
            config.kms_key_id.clear();
        }

        let errs = OmiValidator::validate(&mut config, None);
        assert!(errs.contains(&OmiConfigError::SharedEncryptedBootVolume));
    }
}

#[test]
fn test_snapshot_shared_with_default_key_regions() {
    let mut config = multi_region_config();
    config.snapshot_users = vec![ACCOUNT_ID.to_string()];
    config
        .region_kms_key_ids
        .insert("us-west-1".to_string(), String::new());

    let errs = OmiValidator::validate(&mut config, None);
    assert_eq!(errs, vec![OmiConfigError::SharedSnapshotDefaultKey]);
}

#[test]
fn test_suggested_name_passes() {
    let mut config = OmiConfig::with_name("nightly: web#1");
    let errs = OmiValidator::validate(&mut config, None);
    assert_eq!(errs, vec![OmiConfigError::UncleanName]);

    let cleaned = clean_omi_name(&config.name);
    assert!(is_clean_name(&cleaned));
    let mut config = OmiConfig::with_name(cleaned);
    assert!(OmiValidator::validate(&mut config, None).is_empty());
}

#[test]
fn test_toml_config_end_to_end() {
    let mut config = AppConfig::from_toml_str(
        r#"
        [omi]
        omi_name = "web server (prod)"
        omi_regions = ["eu-west-2", "us-east-2", "eu-west-2"]
        omi_users = ["123456789012"]
        encrypt_boot = true

        [access]
        region = "eu-west-2"
        "#,
    )
    .unwrap();

    let err = ConfigValidator::validate_config(&mut config).unwrap_err();
    assert!(matches!(err, AppError::InvalidOmiConfig(_)));
    assert_eq!(err.omi_errors(), &[OmiConfigError::SharedEncryptedBootVolume]);
    assert_eq!(config.omi.regions, strings(&["us-east-2"]));
}
