//! Copy-target region reconciliation

use std::collections::{BTreeMap, HashSet};

use super::types::OmiConfigError;
use crate::shared::logging::LoggingUtils;

/// Result of reconciling the requested copy regions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconciledRegions {
    /// Deduplicated regions in first-seen order, origin region removed
    pub regions: Vec<String>,
    pub errors: Vec<OmiConfigError>,
}

/// Deduplicate `regions`, drop the origin region and check each region has a
/// per-region KMS key when any are configured.
///
/// The key check runs before the origin region is dropped, so a configured
/// key map must also name the origin region if it is listed.
pub fn reconcile_regions(
    regions: &[String],
    region_kms_key_ids: &BTreeMap<String, String>,
    origin_region: Option<&str>,
) -> ReconciledRegions {
    let mut result = ReconciledRegions {
        regions: Vec::with_capacity(regions.len()),
        errors: Vec::new(),
    };
    let mut seen: HashSet<&str> = HashSet::with_capacity(regions.len());

    for region in regions {
        if !seen.insert(region.as_str()) {
            continue;
        }

        if !region_kms_key_ids.is_empty() && !region_kms_key_ids.contains_key(region) {
            result.errors.push(OmiConfigError::RegionNotInKmsKeys {
                region: region.clone(),
            });
        }

        if origin_region == Some(region.as_str()) {
            LoggingUtils::log_origin_region_dropped(region);
            continue;
        }

        result.regions.push(region.clone());
    }

    result
}
