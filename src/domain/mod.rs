//! Domain layer
//!
//! The OMI configuration record, the build's access context and the rules
//! that decide whether a configuration can be built.

pub mod access;
pub mod omi;
pub mod validation;

pub use access::AccessConfig;
pub use omi::{OmiConfig, TagMap};
pub use validation::{OmiConfigError, OmiValidator};
