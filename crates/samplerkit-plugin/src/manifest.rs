// SPDX-FileCopyrightText: 2026 samplerkit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin manifest parsing from `plugin.toml` files.
//!
//! A manifest declares one plugin class: its name, the category (package)
//! that exports it, and the base class it implements. Declaring a class does
//! not make it constructible; a factory must also be linked into the binary.

use samplerkit_core::SamplerError;
use serde::{Deserialize, Serialize};

/// Parsed plugin manifest describing one plugin class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginManifest {
    /// Unique name of the plugin class (e.g., "joint_constraint_sampler").
    pub name: String,
    /// Semantic version string.
    pub version: String,
    /// Human-readable description.
    pub description: String,
    /// Category (exporting package) the class is declared under.
    pub category: String,
    /// Fully qualified base class the plugin implements.
    pub base_class: String,
    /// Optional author identifier.
    pub author: Option<String>,
}

impl PluginManifest {
    /// True if this manifest declares a class for the given category and base class.
    pub fn declares(&self, category: &str, base_class: &str) -> bool {
        self.category == category && self.base_class == base_class
    }
}

/// Intermediate TOML deserialization struct for `plugin.toml`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PluginManifestFile {
    plugin: PluginSection,
}

/// The `[plugin]` section of a `plugin.toml` file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PluginSection {
    name: String,
    version: String,
    #[serde(default)]
    description: String,
    category: String,
    base_class: String,
    author: Option<String>,
}

/// Parse a plugin manifest from TOML content.
///
/// Validates that name, category and base class are non-empty and that the
/// version is valid semver.
pub fn parse_plugin_manifest(toml_content: &str) -> Result<PluginManifest, SamplerError> {
    let file: PluginManifestFile = toml::from_str(toml_content)
        .map_err(|e| SamplerError::Config(format!("invalid plugin manifest: {e}")))?;

    let section = file.plugin;

    for (field, value) in [
        ("name", &section.name),
        ("category", &section.category),
        ("base_class", &section.base_class),
    ] {
        if value.trim().is_empty() {
            return Err(SamplerError::Config(format!(
                "plugin manifest: {field} must not be empty"
            )));
        }
    }

    if section.name.contains(char::is_whitespace) {
        return Err(SamplerError::Config(format!(
            "plugin manifest: name '{}' must not contain whitespace",
            section.name
        )));
    }

    semver::Version::parse(&section.version).map_err(|e| {
        SamplerError::Config(format!(
            "plugin manifest: invalid version '{}': {e}",
            section.version
        ))
    })?;

    Ok(PluginManifest {
        name: section.name,
        version: section.version,
        description: section.description,
        category: section.category,
        base_class: section.base_class,
        author: section.author,
    })
}
