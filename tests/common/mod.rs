//! Shared helpers for integration tests

#![allow(dead_code)]

use std::collections::HashMap;

use sharegroup::config::{RawConfig, SHARE_GROUP_CONFIG_DEF};
use sharegroup::core::ConfigValue;

/// Raw source built from wire key / text pairs
pub fn raw(pairs: &[(&str, &str)]) -> RawConfig {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

/// Typed accessor holding schema defaults with `overrides` applied.
///
/// Bypasses the registry, so values outside the declared ranges are allowed.
pub fn typed_with(overrides: &[(&str, i32)]) -> HashMap<String, ConfigValue> {
    let mut values: HashMap<String, ConfigValue> =
        SHARE_GROUP_CONFIG_DEF.keys().iter().map(|k| (k.name.to_string(), k.default)).collect();
    for (key, value) in overrides {
        values.insert(key.to_string(), ConfigValue::Int(*value));
    }
    values
}
