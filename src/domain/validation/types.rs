use thiserror::Error;

/// Shortest accepted OMI name, in bytes
pub const MIN_NAME_LENGTH: usize = 3;

/// Longest accepted OMI name, in bytes
pub const MAX_NAME_LENGTH: usize = 128;

/// A single reason an OMI configuration cannot be built
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OmiConfigError {
    #[error("omi_name must be specified")]
    MissingName,

    #[error("Region {region} is in region_kms_key_ids but not in omi_regions")]
    KmsRegionNotInRegions { region: String },

    #[error("Region {region} is in omi_regions but not in region_kms_key_ids")]
    RegionNotInKmsKeys { region: String },

    #[error("Cannot share OMI with encrypted boot volume")]
    SharedEncryptedBootVolume,

    #[error("{key} is not a valid KMS Key Id.")]
    InvalidKmsKey { key: String },

    #[error("Cannot share snapshot encrypted with default KMS key")]
    SharedSnapshotDefaultKey,

    #[error("omi_name must be between 3 and 128 characters long")]
    NameLength,

    #[error(
        "OMIName should only contain alphanumeric characters, parentheses (()), \
         square brackets ([]), spaces ( ), periods (.), slashes (/), dashes (-), \
         single quotes ('), at-signs (@), or underscores(_). You can use the \
         `clean_omi_name` template filter to automatically clean your omi name."
    )]
    UncleanName,
}
