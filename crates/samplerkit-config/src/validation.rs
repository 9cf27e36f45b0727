// SPDX-FileCopyrightText: 2026 samplerkit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation. Collects every failure instead of
//! stopping at the first.

use std::collections::HashSet;

use crate::diagnostic::ConfigError;
use crate::model::SamplerKitConfig;

/// Accepted values for `log.level`.
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate semantic constraints serde cannot express.
pub fn validate_config(config: &SamplerKitConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if !LOG_LEVELS.contains(&config.log.level.as_str()) {
        errors.push(ConfigError::validation(format!(
            "log.level `{}` is not one of {}",
            config.log.level,
            LOG_LEVELS.join(", ")
        )));
    }

    for (i, dir) in config.plugin.manifest_dirs.iter().enumerate() {
        if dir.trim().is_empty() {
            errors.push(ConfigError::validation(format!(
                "plugin.manifest_dirs[{i}] must not be empty"
            )));
        }
    }

    let mut seen = HashSet::new();
    for name in &config.plugin.disabled {
        if !seen.insert(name.as_str()) {
            errors.push(ConfigError::validation(format!(
                "plugin.disabled lists `{name}` more than once"
            )));
        }
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
