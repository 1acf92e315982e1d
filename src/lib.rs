//! # Share Group Configuration
//!
//! Typed schema, loader and cross-field validator for the tunables of the
//! share group subsystem: delivery limits, session timeouts, heartbeat
//! intervals, record lock durations and group sizing.
//!
//! ## Layers
//!
//! - **Core**: error type and shared value types (`sharegroup-core`)
//! - **Schema**: key names, defaults, ranges and documentation
//! - **Registry**: typed parsing, default substitution and per-key range checks
//! - **Loader**: extraction of a [`ShareGroupConfig`] from a [`ConfigAccessor`]
//! - **Validator**: ordering checks between related keys

#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![deny(unsafe_code)]

/// Core types and errors
pub mod core {
    pub use sharegroup_core::*;
}

/// Schema, loading and validation
pub mod config {
    pub use sharegroup_config::*;
}

pub use crate::config::{ConfigAccessor, ConfigValidator, ShareGroupConfig, SHARE_GROUP_CONFIG_DEF};
pub use crate::core::{Result, ShareGroupError};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Resolve a share group configuration from raw wire-keyed values.
///
/// Values are parsed and range-checked against [`SHARE_GROUP_CONFIG_DEF`],
/// then the cross-field ordering checks run. Absent keys take their defaults.
pub fn resolve_raw(raw: &config::RawConfig) -> Result<ShareGroupConfig> {
    let parsed = SHARE_GROUP_CONFIG_DEF.parse(raw)?;
    ShareGroupConfig::new(&parsed)
}
