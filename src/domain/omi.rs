//! OMI configuration record
//!
//! Settings controlling how an OMI is produced, shared and copied to other
//! regions. Keys match the names users write in their build templates.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Tags applied to an OMI or its snapshots
pub type TagMap = BTreeMap<String, String>;

/// Common configuration related to creating OMIs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OmiConfig {
    /// Name of the produced image
    #[serde(rename = "omi_name")]
    pub name: String,

    #[serde(rename = "omi_description")]
    pub description: String,

    #[serde(rename = "omi_virtualization_type")]
    pub virtualization_type: String,

    /// Accounts the image is shared with
    #[serde(rename = "omi_users")]
    pub users: Vec<String>,

    #[serde(rename = "omi_groups")]
    pub groups: Vec<String>,

    #[serde(rename = "omi_product_codes")]
    pub product_codes: Vec<String>,

    /// Regions the image is copied to. Deduplicated during validation.
    #[serde(rename = "omi_regions")]
    pub regions: Vec<String>,

    pub skip_region_validation: bool,

    pub tags: TagMap,

    pub ena_support: Option<bool>,

    #[serde(rename = "sriov_support")]
    pub sriov_net_support: bool,

    pub force_deregister: bool,

    pub force_delete_snapshot: bool,

    #[serde(rename = "encrypt_boot")]
    pub encrypt_boot_volume: bool,

    /// Default KMS key used for encryption
    pub kms_key_id: String,

    /// Per-region KMS key overrides. An empty value means "use the default key".
    pub region_kms_key_ids: BTreeMap<String, String>,

    pub snapshot_tags: TagMap,

    pub snapshot_users: Vec<String>,

    pub snapshot_groups: Vec<String>,
}

impl OmiConfig {
    /// Create a configuration with only the image name set
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_uses_template_keys() {
        let raw = serde_json::json!({
            "omi_name": "web-server",
            "omi_regions": ["eu-west-2", "us-east-2"],
            "encrypt_boot": true,
            "sriov_support": true,
            "region_kms_key_ids": { "eu-west-2": "alias/web" }
        });

        let config: OmiConfig = serde_json::from_value(raw).unwrap();
        assert_eq!(config.name, "web-server");
        assert_eq!(config.regions, vec!["eu-west-2", "us-east-2"]);
        assert!(config.encrypt_boot_volume);
        assert!(config.sriov_net_support);
        assert_eq!(config.region_kms_key_ids["eu-west-2"], "alias/web");
        assert!(config.users.is_empty());
        assert_eq!(config.ena_support, None);
    }

    #[test]
    fn test_serialize_uses_template_keys() {
        let mut config = OmiConfig::with_name("image");
        config.regions = vec!["eu-west-2".to_string()];
        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["omi_name"], "image");
        assert_eq!(value["omi_regions"][0], "eu-west-2");
        assert_eq!(value["encrypt_boot"], false);
    }
}
