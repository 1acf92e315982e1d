//! Error types for share group configuration

use thiserror::Error;

use crate::{ConfigType, Relation};

/// Error type for share group configuration operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShareGroupError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Unknown configuration key: {key}")]
    MissingKey { key: String },

    #[error("Configuration {key} has type {actual}, not {expected}")]
    TypeMismatch {
        key: String,
        expected: ConfigType,
        actual: ConfigType,
    },

    #[error("Invalid value {value} for configuration {key}: {reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },

    /// Two independently configured keys violate an ordering constraint.
    #[error("{key} must be {relation} {other}")]
    Constraint {
        key: &'static str,
        relation: Relation,
        other: &'static str,
    },
}

impl ShareGroupError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config { message: message.into() }
    }

    pub fn missing_key<S: Into<String>>(key: S) -> Self {
        Self::MissingKey { key: key.into() }
    }

    pub fn type_mismatch<S: Into<String>>(key: S, expected: ConfigType, actual: ConfigType) -> Self {
        Self::TypeMismatch { key: key.into(), expected, actual }
    }

    pub fn invalid_value<K, V, R>(key: K, value: V, reason: R) -> Self
    where
        K: Into<String>,
        V: ToString,
        R: Into<String>,
    {
        Self::InvalidValue { key: key.into(), value: value.to_string(), reason: reason.into() }
    }

    pub fn constraint(key: &'static str, relation: Relation, other: &'static str) -> Self {
        Self::Constraint { key, relation, other }
    }

    /// Keys named by this error, in the order they appear in the message
    pub fn keys(&self) -> Vec<&str> {
        match self {
            Self::Config { .. } => Vec::new(),
            Self::MissingKey { key }
            | Self::TypeMismatch { key, .. }
            | Self::InvalidValue { key, .. } => vec![key.as_str()],
            Self::Constraint { key, other, .. } => vec![*key, *other],
        }
    }
}

/// Result type alias for share group configuration operations
pub type Result<T> = std::result::Result<T, ShareGroupError>;
