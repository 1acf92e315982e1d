//! CLI command implementations

use std::path::Path;

use clap::ValueEnum;
use console::style;
use sharegroup_config::{
    render_markdown, render_text, to_toml, ShareGroupConfig, SourceLoader, SHARE_GROUP_CONFIG_DEF,
};
use sharegroup_core::Result;

/// Output format for `describe`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DocFormat {
    Markdown,
    Text,
}

/// Build a source loader for an optional file and environment prefix
pub fn source_loader(config: Option<&Path>, env_prefix: Option<&str>) -> SourceLoader {
    let mut loader = SourceLoader::new();
    if let Some(path) = config {
        loader = loader.with_file(path);
    }
    match env_prefix {
        Some(prefix) => loader.with_env_prefix(prefix),
        None => loader.without_env(),
    }
}

/// Load, parse and validate a share group configuration
pub fn resolve(loader: &SourceLoader) -> Result<ShareGroupConfig> {
    let raw = loader.load()?;
    let parsed = SHARE_GROUP_CONFIG_DEF.parse(&raw)?;
    ShareGroupConfig::new(&parsed)
}

/// Effective configuration as TOML
pub fn render_config(config: &ShareGroupConfig) -> Result<String> {
    to_toml(config.values())
}

/// Public documentation in the requested format
pub fn describe(format: DocFormat) -> String {
    match format {
        DocFormat::Markdown => render_markdown(&SHARE_GROUP_CONFIG_DEF),
        DocFormat::Text => render_text(&SHARE_GROUP_CONFIG_DEF),
    }
}

/// Default value of every public key as TOML
pub fn defaults() -> Result<String> {
    to_toml(SHARE_GROUP_CONFIG_DEF.public_keys().map(|key| (key.name, key.default)))
}

pub fn print_success(message: &str) {
    println!("{} {}", style("✓").green().bold(), message);
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", style("Error:").red().bold(), message);
}
