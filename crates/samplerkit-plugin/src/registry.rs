// SPDX-FileCopyrightText: 2026 samplerkit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin registry for declared and linked plugin classes.
//!
//! The `PluginRegistry` stores `PluginEntry` records keyed by plugin name.
//! Each entry contains a manifest, status, and optional factory for creating
//! allocator instances at runtime.

use std::collections::HashMap;
use std::sync::Arc;

use samplerkit_core::{ConstraintSamplerAllocator, SamplerError};
use tracing::debug;

use crate::builtin;
use crate::catalog::builtin_catalog;
use crate::manifest::PluginManifest;

/// Status of a plugin in the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PluginStatus {
    /// Plugin can be instantiated.
    Enabled,
    /// Plugin is explicitly disabled by the user.
    Disabled,
    /// Plugin is declared by a manifest but no factory is linked.
    NotLinked,
}

impl std::fmt::Display for PluginStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PluginStatus::Enabled => write!(f, "enabled"),
            PluginStatus::Disabled => write!(f, "disabled"),
            PluginStatus::NotLinked => write!(f, "not-linked"),
        }
    }
}

/// Factory trait for creating allocator instances.
///
/// Any `Fn() -> Result<Box<dyn ConstraintSamplerAllocator>, SamplerError>`
/// is a factory.
pub trait PluginFactory: Send + Sync {
    /// Create a new allocator instance.
    fn create(&self) -> Result<Box<dyn ConstraintSamplerAllocator>, SamplerError>;
}

impl<F> PluginFactory for F
where
    F: Fn() -> Result<Box<dyn ConstraintSamplerAllocator>, SamplerError> + Send + Sync,
{
    fn create(&self) -> Result<Box<dyn ConstraintSamplerAllocator>, SamplerError> {
        self()
    }
}

/// A single entry in the plugin registry.
#[derive(Clone)]
pub struct PluginEntry {
    /// Plugin manifest with metadata.
    pub manifest: PluginManifest,
    /// Current status of the plugin.
    pub status: PluginStatus,
    /// Optional factory for creating allocator instances.
    pub factory: Option<Arc<dyn PluginFactory>>,
}

impl std::fmt::Debug for PluginEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginEntry")
            .field("manifest", &self.manifest)
            .field("status", &self.status)
            .field("factory", &self.factory.is_some())
            .finish()
    }
}

/// Registry of known plugin classes.
pub struct PluginRegistry {
    entries: HashMap<String, PluginEntry>,
}

impl PluginRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Create a registry holding the built-in allocators with their factories.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for manifest in builtin_catalog() {
            let factory = builtin::factory_for(&manifest.name);
            registry.register(manifest, factory);
        }
        registry
    }

    /// Register a plugin.
    ///
    /// Status is `Enabled` when a factory is supplied and `NotLinked` otherwise.
    /// Re-registering a name replaces the previous entry.
    pub fn register(&mut self, manifest: PluginManifest, factory: Option<Arc<dyn PluginFactory>>) {
        let status = if factory.is_some() {
            PluginStatus::Enabled
        } else {
            PluginStatus::NotLinked
        };
        self.register_with_status(manifest, factory, status);
    }

    /// Register a plugin with an explicit status.
    pub fn register_with_status(
        &mut self,
        manifest: PluginManifest,
        factory: Option<Arc<dyn PluginFactory>>,
        status: PluginStatus,
    ) {
        let name = manifest.name.clone();
        self.entries.insert(
            name,
            PluginEntry {
                manifest,
                status,
                factory,
            },
        );
    }

    /// Declare manifests discovered on disk.
    ///
    /// A manifest whose name is already registered is ignored so that linked
    /// factories are never shadowed by a bare declaration. Returns how many
    /// manifests were added.
    pub fn declare_all(&mut self, manifests: impl IntoIterator<Item = PluginManifest>) -> usize {
        let mut added = 0;
        for manifest in manifests {
            if self.entries.contains_key(&manifest.name) {
                debug!(plugin = %manifest.name, "manifest already registered, ignoring");
                continue;
            }
            self.register(manifest, None);
            added += 1;
        }
        added
    }

    /// Get a plugin entry by name.
    pub fn get(&self, name: &str) -> Option<&PluginEntry> {
        self.entries.get(name)
    }

    /// All entries declared for the category/base class pair, sorted by name.
    pub fn classes_for(&self, category: &str, base_class: &str) -> Vec<&PluginEntry> {
        let mut entries: Vec<&PluginEntry> = self
            .entries
            .values()
            .filter(|e| e.manifest.declares(category, base_class))
            .collect();
        entries.sort_by(|a, b| a.manifest.name.cmp(&b.manifest.name));
        entries
    }

    /// List all plugin entries, sorted by name.
    pub fn list_all(&self) -> Vec<&PluginEntry> {
        let mut entries: Vec<&PluginEntry> = self.entries.values().collect();
        entries.sort_by(|a, b| a.manifest.name.cmp(&b.manifest.name));
        entries
    }

    /// Toggle a plugin's enabled status.
    ///
    /// Enabling a plugin without a factory leaves it `NotLinked`.
    pub fn set_enabled(&mut self, name: &str, enabled: bool) -> Result<(), SamplerError> {
        let declared = self.declared_names();
        let entry = self
            .entries
            .get_mut(name)
            .ok_or_else(|| SamplerError::PluginNotFound {
                name: name.to_string(),
                declared,
            })?;
        entry.status = match (enabled, entry.factory.is_some()) {
            (false, _) => PluginStatus::Disabled,
            (true, true) => PluginStatus::Enabled,
            (true, false) => PluginStatus::NotLinked,
        };
        Ok(())
    }

    /// Returns the number of registered plugins.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no plugins are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn declared_names(&self) -> String {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names.join(", ")
    }
}

impl Default for PluginRegistry {
    fn default() -> Self {
        Self::new()
    }
}
