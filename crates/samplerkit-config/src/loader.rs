// SPDX-FileCopyrightText: 2026 samplerkit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./samplerkit.toml` > `~/.config/samplerkit/samplerkit.toml`
//! > `/etc/samplerkit/samplerkit.toml`, with environment variable overrides via
//! the `SAMPLERKIT_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use samplerkit_core::CONSTRAINT_SAMPLERS_PARAM;
use tracing::debug;

use crate::model::SamplerKitConfig;

/// Environment variable overriding `constraint_samplers`. Read verbatim.
pub const CONSTRAINT_SAMPLERS_ENV: &str = "SAMPLERKIT_CONSTRAINT_SAMPLERS";

/// System-wide configuration file.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/samplerkit/samplerkit.toml";

/// Configuration file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "samplerkit.toml";

/// Per-user configuration file under the XDG config directory.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("samplerkit").join(LOCAL_CONFIG_FILE))
}

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/samplerkit/samplerkit.toml`
/// 3. `~/.config/samplerkit/samplerkit.toml`
/// 4. `./samplerkit.toml`
/// 5. `SAMPLERKIT_*` environment variables
pub fn load_config() -> Result<SamplerKitConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no files, no env).
pub fn load_config_from_str(toml_content: &str) -> Result<SamplerKitConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(SamplerKitConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<SamplerKitConfig, figment::Error> {
    debug!(path = %path.display(), exists = path.is_file(), "loading config file");
    let figment = Figment::new()
        .merge(Serialized::defaults(SamplerKitConfig::default()))
        .merge(Toml::file(path));
    merge_env(figment).extract()
}

/// Build the Figment used for hierarchy loading, before extraction.
pub fn build_figment() -> Figment {
    let user = user_config_path().unwrap_or_default();
    for path in [Path::new(SYSTEM_CONFIG_PATH), user.as_path(), Path::new(LOCAL_CONFIG_FILE)] {
        if path.is_file() {
            debug!(path = %path.display(), "found config file");
        }
    }

    let figment = Figment::new()
        .merge(Serialized::defaults(SamplerKitConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG_PATH))
        .merge(Toml::file(&user))
        .merge(Toml::file(LOCAL_CONFIG_FILE));
    merge_env(figment)
}

/// Apply the environment layer on top of `figment`.
///
/// `SAMPLERKIT_CONSTRAINT_SAMPLERS` is merged verbatim as a string; figment's
/// env parsing would turn `42` into an integer.
fn merge_env(figment: Figment) -> Figment {
    let figment = figment.merge(env_provider());
    match std::env::var(CONSTRAINT_SAMPLERS_ENV) {
        Ok(value) => {
            debug!(variable = CONSTRAINT_SAMPLERS_ENV, "constraint_samplers set from environment");
            figment.merge(Serialized::default(CONSTRAINT_SAMPLERS_PARAM, value))
        }
        Err(_) => figment,
    }
}

/// Environment provider mapping `SAMPLERKIT_*` variables onto config keys.
///
/// Section prefixes are mapped explicitly rather than splitting on `_`, since
/// key names themselves contain underscores:
/// `SAMPLERKIT_LOG_LEVEL` -> `log.level`,
/// `SAMPLERKIT_PLUGIN_MANIFEST_DIRS` -> `plugin.manifest_dirs`.
/// Figment hands keys over in their original case.
fn env_provider() -> Env {
    Env::prefixed("SAMPLERKIT_")
        .filter(|key| !key.as_str().eq_ignore_ascii_case(CONSTRAINT_SAMPLERS_PARAM))
        .map(|key| map_env_key(key.as_str()).into())
}

fn map_env_key(key: &str) -> String {
    let key = key.to_ascii_lowercase();
    if let Some(rest) = key.strip_prefix("log_") {
        format!("log.{rest}")
    } else if let Some(rest) = key.strip_prefix("plugin_") {
        format!("plugin.{rest}")
    } else {
        key
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use tracing_test::traced_test;

    #[test]
    fn env_keys_map_regardless_of_case() {
        assert_eq!(map_env_key("LOG_LEVEL"), "log.level");
        assert_eq!(map_env_key("PLUGIN_MANIFEST_DIRS"), "plugin.manifest_dirs");
        assert_eq!(map_env_key("plugin_disabled"), "plugin.disabled");
        assert_eq!(map_env_key("UNKNOWN_KEY"), "unknown_key");
    }

    #[test]
    #[traced_test]
    fn found_config_files_are_logged() {
        Jail::expect_with(|jail| {
            jail.create_file(LOCAL_CONFIG_FILE, "[log]\nlevel = \"debug\"\n")?;
            let config = load_config()?;
            assert_eq!(config.log.level, "debug");
            Ok(())
        });
        assert!(logs_contain("found config file"));
    }
}
