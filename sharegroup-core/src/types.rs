//! Value types shared between the schema, the registry and the resolved configuration

use serde::Serialize;
use std::fmt;

/// Declared type of a configuration key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigType {
    /// `true` or `false`
    Boolean,
    /// 32-bit signed integer
    Int,
    /// 16-bit signed integer
    Short,
}

impl fmt::Display for ConfigType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigType::Boolean => write!(f, "boolean"),
            ConfigType::Int => write!(f, "int"),
            ConfigType::Short => write!(f, "short"),
        }
    }
}

/// A typed configuration value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Bool(bool),
    Int(i32),
    Short(i16),
}

impl ConfigValue {
    pub fn config_type(&self) -> ConfigType {
        match self {
            ConfigValue::Bool(_) => ConfigType::Boolean,
            ConfigValue::Int(_) => ConfigType::Int,
            ConfigValue::Short(_) => ConfigType::Short,
        }
    }

    /// Numeric view used by range predicates; `None` for booleans
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ConfigValue::Bool(_) => None,
            ConfigValue::Int(v) => Some(i64::from(*v)),
            ConfigValue::Short(v) => Some(i64::from(*v)),
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Bool(v) => write!(f, "{}", v),
            ConfigValue::Int(v) => write!(f, "{}", v),
            ConfigValue::Short(v) => write!(f, "{}", v),
        }
    }
}

/// Documentation-only importance tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Importance {
    High,
    Medium,
    Low,
}

impl fmt::Display for Importance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Importance::High => write!(f, "high"),
            Importance::Medium => write!(f, "medium"),
            Importance::Low => write!(f, "low"),
        }
    }
}

/// Required ordering between two configuration values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    /// left >= right
    AtLeast,
    /// left <= right
    AtMost,
}

impl Relation {
    pub fn holds<T: PartialOrd>(&self, left: T, right: T) -> bool {
        match self {
            Relation::AtLeast => left >= right,
            Relation::AtMost => left <= right,
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Relation::AtLeast => write!(f, "greater than or equals to"),
            Relation::AtMost => write!(f, "less than or equals to"),
        }
    }
}
