//! Configuration definition registry
//!
//! A [`ConfigDef`] declares every recognized key with its type, default,
//! valid range and documentation. Parsing a raw source against it yields a
//! [`ParsedConfig`] whose values are typed, defaulted and range-checked, so
//! anything reading through [`ConfigAccessor`] never sees an out-of-range
//! single value.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use sharegroup_core::{ConfigType, ConfigValue, Importance, Result, ShareGroupError};

use crate::ConfigAccessor;

/// Raw configuration values keyed by wire name, before type conversion
pub type RawConfig = BTreeMap<String, String>;

/// Single-field range predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidRange {
    /// Inclusive on both ends
    Between(i64, i64),
    /// Inclusive lower bound
    AtLeast(i64),
}

impl ValidRange {
    pub const fn between(min: i64, max: i64) -> Self {
        Self::Between(min, max)
    }

    pub const fn at_least(min: i64) -> Self {
        Self::AtLeast(min)
    }

    /// Reject `value` if it falls outside the range
    pub fn ensure_valid(&self, key: &str, value: ConfigValue) -> Result<()> {
        let Some(n) = value.as_i64() else {
            return Err(ShareGroupError::invalid_value(key, value, "Value is not numeric"));
        };

        let (min, max) = match *self {
            ValidRange::Between(min, max) => (min, Some(max)),
            ValidRange::AtLeast(min) => (min, None),
        };

        if n < min {
            return Err(ShareGroupError::invalid_value(key, value, format!("Value must be at least {}", min)));
        }
        if let Some(max) = max {
            if n > max {
                return Err(ShareGroupError::invalid_value(key, value, format!("Value must be no more than {}", max)));
            }
        }
        Ok(())
    }
}

impl fmt::Display for ValidRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidRange::Between(min, max) => write!(f, "[{},...,{}]", min, max),
            ValidRange::AtLeast(min) => write!(f, "[{},...]", min),
        }
    }
}

/// Declaration of one configuration key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigKey {
    pub name: &'static str,
    pub config_type: ConfigType,
    pub default: ConfigValue,
    pub validator: Option<ValidRange>,
    pub importance: Importance,
    pub documentation: &'static str,
    /// Internal keys are accepted but left out of rendered documentation
    pub internal: bool,
}

impl ConfigKey {
    /// Convert a raw string into this key's declared type
    pub fn parse_value(&self, raw: &str) -> Result<ConfigValue> {
        let trimmed = raw.trim();
        match self.config_type {
            ConfigType::Boolean => {
                if trimmed.eq_ignore_ascii_case("true") {
                    Ok(ConfigValue::Bool(true))
                } else if trimmed.eq_ignore_ascii_case("false") {
                    Ok(ConfigValue::Bool(false))
                } else {
                    Err(ShareGroupError::invalid_value(
                        self.name,
                        raw,
                        "Expected value to be either true or false",
                    ))
                }
            }
            ConfigType::Int => trimmed
                .parse::<i32>()
                .map(ConfigValue::Int)
                .map_err(|_| ShareGroupError::invalid_value(self.name, raw, "Not a number of type int")),
            ConfigType::Short => trimmed
                .parse::<i16>()
                .map(ConfigValue::Short)
                .map_err(|_| ShareGroupError::invalid_value(self.name, raw, "Not a number of type short")),
        }
    }

    /// Parse and range-check a raw string
    pub fn resolve(&self, raw: &str) -> Result<ConfigValue> {
        let value = self.parse_value(raw)?;
        if let Some(range) = &self.validator {
            range.ensure_valid(self.name, value)?;
        }
        Ok(value)
    }
}

/// Ordered set of key declarations
#[derive(Debug, Clone, Default)]
pub struct ConfigDef {
    keys: Vec<ConfigKey>,
}

impl ConfigDef {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a public key. The type is taken from the default value.
    pub fn define(
        self,
        name: &'static str,
        default: ConfigValue,
        validator: Option<ValidRange>,
        importance: Importance,
        documentation: &'static str,
    ) -> Self {
        self.push(name, default, validator, importance, documentation, false)
    }

    /// Declare a key that is hidden from rendered documentation
    pub fn define_internal(
        self,
        name: &'static str,
        default: ConfigValue,
        validator: Option<ValidRange>,
        importance: Importance,
        documentation: &'static str,
    ) -> Self {
        self.push(name, default, validator, importance, documentation, true)
    }

    fn push(
        mut self,
        name: &'static str,
        default: ConfigValue,
        validator: Option<ValidRange>,
        importance: Importance,
        documentation: &'static str,
        internal: bool,
    ) -> Self {
        debug_assert!(self.key(name).is_none(), "configuration {} is defined twice", name);
        self.keys.push(ConfigKey {
            name,
            config_type: default.config_type(),
            default,
            validator,
            importance,
            documentation,
            internal,
        });
        self
    }

    pub fn key(&self, name: &str) -> Option<&ConfigKey> {
        self.keys.iter().find(|k| k.name == name)
    }

    /// All declarations, in definition order
    pub fn keys(&self) -> &[ConfigKey] {
        &self.keys
    }

    /// Declarations that appear in public documentation
    pub fn public_keys(&self) -> impl Iterator<Item = &ConfigKey> {
        self.keys.iter().filter(|k| !k.internal)
    }

    /// Default value of every declared key
    pub fn defaults(&self) -> ParsedConfig {
        ParsedConfig {
            values: self.keys.iter().map(|k| (k.name.to_string(), k.default)).collect(),
        }
    }

    /// Type-convert, default and range-check `raw` against this definition.
    ///
    /// Keys not declared here are ignored. The first invalid value aborts parsing.
    pub fn parse(&self, raw: &RawConfig) -> Result<ParsedConfig> {
        let mut values = HashMap::with_capacity(self.keys.len());

        for key in &self.keys {
            let value = match raw.get(key.name) {
                Some(text) => key.resolve(text)?,
                None => key.default,
            };
            tracing::debug!(key = key.name, %value, "resolved configuration");
            values.insert(key.name.to_string(), value);
        }

        for name in raw.keys().filter(|name| self.key(name).is_none()) {
            tracing::warn!(key = %name, "ignoring unknown configuration");
        }

        Ok(ParsedConfig { values })
    }
}

/// Typed values produced by [`ConfigDef::parse`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedConfig {
    values: HashMap<String, ConfigValue>,
}

impl ParsedConfig {
    pub fn get(&self, key: &str) -> Option<ConfigValue> {
        self.values.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl ConfigAccessor for ParsedConfig {
    fn get_bool(&self, key: &str) -> Result<bool> {
        self.values.get_bool(key)
    }

    fn get_int(&self, key: &str) -> Result<i32> {
        self.values.get_int(key)
    }

    fn get_short(&self, key: &str) -> Result<i16> {
        self.values.get_short(key)
    }
}
