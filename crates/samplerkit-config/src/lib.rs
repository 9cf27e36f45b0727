// SPDX-FileCopyrightText: 2026 samplerkit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration for samplerkit.
//!
//! TOML files are merged over compiled defaults following the XDG hierarchy,
//! then `SAMPLERKIT_*` environment variables are applied. Unknown keys are
//! rejected and reported as miette diagnostics with typo suggestions.
//!
//! The loaded [`SamplerKitConfig`] implements
//! [`ParameterSource`](samplerkit_core::ParameterSource), so it can be handed
//! to the plugin loader directly.
//!
//! # Usage
//!
//! ```no_run
//! use samplerkit_config::load_and_validate;
//!
//! let config = load_and_validate().expect("config errors");
//! println!("samplers: {:?}", config.constraint_samplers);
//! ```

pub mod diagnostic;
pub mod loader;
pub mod model;
pub mod validation;

use std::path::Path;

pub use diagnostic::{ConfigError, render_errors};
pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::{LogConfig, PluginConfig, SamplerKitConfig};

/// Load from the XDG hierarchy and validate.
pub fn load_and_validate() -> Result<SamplerKitConfig, Vec<ConfigError>> {
    finish(loader::load_config(), collect_toml_sources)
}

/// Load from a TOML string (no files, no env) and validate.
pub fn load_and_validate_str(toml_content: &str) -> Result<SamplerKitConfig, Vec<ConfigError>> {
    finish(loader::load_config_from_str(toml_content), || {
        vec![("<inline>".to_string(), toml_content.to_string())]
    })
}

/// Load from an explicit file (plus env overrides) and validate.
pub fn load_and_validate_path(path: &Path) -> Result<SamplerKitConfig, Vec<ConfigError>> {
    finish(loader::load_config_from_path(path), || {
        std::fs::read_to_string(path)
            .map(|content| vec![(path.display().to_string(), content)])
            .unwrap_or_default()
    })
}

#[allow(clippy::result_large_err)]
fn finish(
    loaded: Result<SamplerKitConfig, figment::Error>,
    sources: impl FnOnce() -> Vec<(String, String)>,
) -> Result<SamplerKitConfig, Vec<ConfigError>> {
    match loaded {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => Err(diagnostic::figment_to_config_errors(err, &sources())),
    }
}

/// Read whichever hierarchy files exist, for source span resolution.
fn collect_toml_sources() -> Vec<(String, String)> {
    let local = std::env::current_dir()
        .map(|d| d.join(loader::LOCAL_CONFIG_FILE))
        .unwrap_or_else(|_| loader::LOCAL_CONFIG_FILE.into());

    [
        Some(local),
        loader::user_config_path(),
        Some(loader::SYSTEM_CONFIG_PATH.into()),
    ]
    .into_iter()
    .flatten()
    .filter_map(|path| {
        std::fs::read_to_string(&path)
            .ok()
            .map(|content| (path.display().to_string(), content))
    })
    .collect()
}
