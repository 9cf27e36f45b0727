// SPDX-FileCopyrightText: 2026 samplerkit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs.
//!
//! All structs use `#[serde(deny_unknown_fields)]` so misspelled keys are
//! rejected at startup instead of silently ignored.

use samplerkit_core::{CONSTRAINT_SAMPLERS_PARAM, ParameterSource};
use serde::{Deserialize, Serialize};

/// Top-level samplerkit configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SamplerKitConfig {
    /// Space-separated allocator plugin names to load.
    ///
    /// `None` means the parameter is not set; `Some("")` is set but empty.
    #[serde(default)]
    pub constraint_samplers: Option<String>,

    /// Logging settings.
    #[serde(default)]
    pub log: LogConfig,

    /// Plugin discovery settings.
    #[serde(default)]
    pub plugin: PluginConfig,
}

impl ParameterSource for SamplerKitConfig {
    fn get_parameter(&self, name: &str) -> Option<&str> {
        match name {
            CONSTRAINT_SAMPLERS_PARAM => self.constraint_samplers.as_deref(),
            _ => None,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Plugin discovery configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PluginConfig {
    /// Directories scanned for `*.toml` plugin manifests.
    #[serde(default)]
    pub manifest_dirs: Vec<String>,

    /// Plugin names that must not be instantiated even if listed.
    #[serde(default)]
    pub disabled: Vec<String>,
}
