//! Access context for a build

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Session settings of the build; only the origin region matters here
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct AccessConfig {
    /// Region the OMI is originally created in
    #[serde(rename = "region")]
    #[validate(length(min = 1))]
    pub raw_region: Option<String>,
}

impl AccessConfig {
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            raw_region: Some(region.into()),
        }
    }

    /// Origin region, if one is configured
    pub fn origin_region(&self) -> Option<&str> {
        self.raw_region.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_region() {
        assert_eq!(AccessConfig::new("eu-west-2").origin_region(), Some("eu-west-2"));
        assert_eq!(AccessConfig::default().origin_region(), None);
    }

    #[test]
    fn test_empty_region_rejected() {
        let access = AccessConfig {
            raw_region: Some(String::new()),
        };
        assert!(access.validate().is_err());
        assert!(AccessConfig::default().validate().is_ok());
    }
}
