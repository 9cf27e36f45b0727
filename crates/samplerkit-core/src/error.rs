// SPDX-FileCopyrightText: 2026 samplerkit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for samplerkit.

use thiserror::Error;

/// The primary error type shared by the plugin framework, the sampler manager
/// and the loader.
#[derive(Debug, Error)]
pub enum SamplerError {
    /// Configuration errors (invalid TOML, bad parameter values).
    #[error("configuration error: {0}")]
    Config(String),

    /// The plugin class loader could not be constructed, usually because no
    /// manifest declares the requested category/base class pair.
    #[error("cannot create class loader for {category}/{base_class}: {reason}")]
    ResolverUnavailable {
        category: String,
        base_class: String,
        reason: String,
    },

    /// No plugin class with this name is declared for the loader.
    #[error("plugin '{name}' is not declared (declared classes: {declared})")]
    PluginNotFound { name: String, declared: String },

    /// The plugin is declared but switched off.
    #[error("plugin '{name}' is disabled")]
    PluginDisabled { name: String },

    /// The plugin is declared by a manifest but no factory is linked into
    /// this binary.
    #[error("plugin '{name}' is declared but no factory is linked for it")]
    PluginNotLinked { name: String },

    /// The plugin factory failed while constructing an instance.
    #[error("failed to create plugin '{name}': {source}")]
    PluginCreation {
        name: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A plugin manifest could not be read or parsed.
    #[error("invalid plugin manifest {path}: {message}")]
    Manifest { path: String, message: String },

    /// Filesystem errors while discovering manifests.
    #[error("i/o error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl SamplerError {
    /// Build a `PluginCreation` error from a plain message.
    pub fn creation(name: impl Into<String>, message: impl Into<String>) -> Self {
        let message: String = message.into();
        SamplerError::PluginCreation {
            name: name.into(),
            source: message.into(),
        }
    }
}
