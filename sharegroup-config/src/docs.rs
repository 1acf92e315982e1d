//! Documentation rendering for declared keys
//!
//! Internal keys are never rendered.

use crate::{ConfigDef, ConfigKey};

fn valid_values(key: &ConfigKey) -> String {
    key.validator.map(|range| range.to_string()).unwrap_or_default()
}

/// Markdown table with one row per public key, in definition order
pub fn render_markdown(def: &ConfigDef) -> String {
    let mut out = String::from("| Name | Description | Type | Default | Valid Values | Importance |\n");
    out.push_str("|---|---|---|---|---|---|\n");

    for key in def.public_keys() {
        out.push_str(&format!(
            "| `{}` | {} | {} | {} | {} | {} |\n",
            key.name,
            key.documentation,
            key.config_type,
            key.default,
            valid_values(key),
            key.importance
        ));
    }
    out
}

/// Plain text, one block per public key
pub fn render_text(def: &ConfigDef) -> String {
    let mut out = String::new();

    for key in def.public_keys() {
        out.push_str(&format!("{}\n", key.name));
        out.push_str(&format!("  {}\n", key.documentation));
        out.push_str(&format!("  Type: {}\n", key.config_type));
        out.push_str(&format!("  Default: {}\n", key.default));
        if let Some(range) = key.validator {
            out.push_str(&format!("  Valid Values: {}\n", range));
        }
        out.push_str(&format!("  Importance: {}\n\n", key.importance));
    }
    out
}
