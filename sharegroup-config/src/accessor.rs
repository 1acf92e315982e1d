//! Typed read access to an already parsed configuration source

use std::collections::HashMap;
use std::hash::BuildHasher;

use sharegroup_core::{ConfigType, ConfigValue, Result, ShareGroupError};

/// Typed getters over a populated, range-checked configuration source.
///
/// Implementations return values with defaults already substituted; a key
/// that was never declared is reported as [`ShareGroupError::MissingKey`].
pub trait ConfigAccessor {
    fn get_bool(&self, key: &str) -> Result<bool>;
    fn get_int(&self, key: &str) -> Result<i32>;
    fn get_short(&self, key: &str) -> Result<i16>;
}

impl<S: BuildHasher> ConfigAccessor for HashMap<String, ConfigValue, S> {
    fn get_bool(&self, key: &str) -> Result<bool> {
        match self.get(key) {
            Some(ConfigValue::Bool(v)) => Ok(*v),
            Some(other) => Err(mismatch(key, ConfigType::Boolean, other)),
            None => Err(ShareGroupError::missing_key(key)),
        }
    }

    fn get_int(&self, key: &str) -> Result<i32> {
        match self.get(key) {
            Some(ConfigValue::Int(v)) => Ok(*v),
            Some(other) => Err(mismatch(key, ConfigType::Int, other)),
            None => Err(ShareGroupError::missing_key(key)),
        }
    }

    fn get_short(&self, key: &str) -> Result<i16> {
        match self.get(key) {
            Some(ConfigValue::Short(v)) => Ok(*v),
            Some(other) => Err(mismatch(key, ConfigType::Short, other)),
            None => Err(ShareGroupError::missing_key(key)),
        }
    }
}

fn mismatch(key: &str, expected: ConfigType, actual: &ConfigValue) -> ShareGroupError {
    ShareGroupError::type_mismatch(key, expected, actual.config_type())
}
