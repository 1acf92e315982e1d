//! Raw configuration sources

use std::path::{Path, PathBuf};

use sharegroup_core::{ConfigValue, Result, ShareGroupError};

use crate::RawConfig;

/// Default prefix for environment overrides
pub const DEFAULT_ENV_PREFIX: &str = "SHAREGROUP";

/// Collects raw key/value text from layered sources.
///
/// Sources are applied with the following precedence:
/// 1. Environment variables (highest precedence)
/// 2. Configuration file
/// 3. Inline TOML (lowest precedence)
///
/// Keys absent from every source are left out; the registry fills in defaults.
pub struct SourceLoader {
    inline: Vec<String>,
    file: Option<PathBuf>,
    env_prefix: Option<String>,
}

impl SourceLoader {
    pub fn new() -> Self {
        Self { inline: Vec::new(), file: None, env_prefix: Some(DEFAULT_ENV_PREFIX.to_string()) }
    }

    /// Read a TOML file; loading fails if it does not exist
    pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.file = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn with_toml<S: Into<String>>(mut self, contents: S) -> Self {
        self.inline.push(contents.into());
        self
    }

    /// Read `<PREFIX>_GROUP_SHARE_MAX_GROUPS` style variables as `group.share.max.groups`
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = Some(prefix.into());
        self
    }

    pub fn without_env(mut self) -> Self {
        self.env_prefix = None;
        self
    }

    /// Merge all sources into dotted wire keys
    pub fn load(&self) -> Result<RawConfig> {
        let mut builder = config::Config::builder();

        for contents in &self.inline {
            builder = builder.add_source(config::File::from_str(contents, config::FileFormat::Toml));
        }

        if let Some(path) = &self.file {
            tracing::debug!(path = %path.display(), "reading configuration file");
            builder = builder.add_source(config::File::from(path.as_path()).format(config::FileFormat::Toml));
        }

        if let Some(prefix) = &self.env_prefix {
            builder = builder.add_source(config::Environment::with_prefix(prefix).separator("_"));
        }

        let merged = builder
            .build()
            .map_err(|e| ShareGroupError::config(format!("Failed to build configuration: {}", e)))?;

        let tree: config::Map<String, config::Value> = merged
            .try_deserialize()
            .map_err(|e| ShareGroupError::config(format!("Failed to deserialize configuration: {}", e)))?;

        let mut raw = RawConfig::new();
        for (key, value) in tree {
            flatten(key, value, &mut raw)?;
        }
        Ok(raw)
    }
}

impl Default for SourceLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn flatten(key: String, value: config::Value, out: &mut RawConfig) -> Result<()> {
    use config::ValueKind;

    let text = match value.kind {
        ValueKind::Table(table) => {
            for (child, nested) in table {
                flatten(format!("{}.{}", key, child), nested, out)?;
            }
            return Ok(());
        }
        ValueKind::Boolean(v) => v.to_string(),
        ValueKind::I64(v) => v.to_string(),
        ValueKind::I128(v) => v.to_string(),
        ValueKind::U64(v) => v.to_string(),
        ValueKind::U128(v) => v.to_string(),
        ValueKind::String(v) => v,
        // Floats, arrays and nil have no declared type to convert into
        other => {
            return Err(ShareGroupError::invalid_value(
                key,
                format!("{:?}", other),
                "Expected an integer, boolean or string",
            ));
        }
    };

    // A quoted dotted key and a nested table can both name the same wire key
    if out.insert(key.clone(), text).is_some() {
        return Err(ShareGroupError::config(format!("{} is defined more than once", key)));
    }
    Ok(())
}

/// Render dotted keys as nested TOML tables that [`SourceLoader`] reads back
pub fn to_toml<'a, I>(values: I) -> Result<String>
where
    I: IntoIterator<Item = (&'a str, ConfigValue)>,
{
    let mut root = toml::Table::new();

    for (key, value) in values {
        let mut segments: Vec<&str> = key.split('.').collect();
        let leaf = segments.pop().unwrap_or(key);

        let mut table = &mut root;
        for segment in segments {
            table = table
                .entry(segment.to_string())
                .or_insert_with(|| toml::Value::Table(toml::Table::new()))
                .as_table_mut()
                .ok_or_else(|| ShareGroupError::config(format!("{} conflicts with value {}", key, segment)))?;
        }

        let value = toml::Value::try_from(value)
            .map_err(|e| ShareGroupError::config(format!("Failed to serialize {}: {}", key, e)))?;
        table.insert(leaf.to_string(), value);
    }

    toml::to_string_pretty(&root)
        .map_err(|e| ShareGroupError::config(format!("Failed to serialize configuration: {}", e)))
}
