// SPDX-FileCopyrightText: 2026 samplerkit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Process-wide plugin registry.
//!
//! Created on first use and seeded with the built-in allocators. Hosts add
//! discovered manifests or their own factories through [`global_registry`].

use std::sync::{LazyLock, PoisonError, RwLock};

use samplerkit_core::{ResolverProvider, SamplerError};

use crate::class_loader::ClassLoader;
use crate::registry::PluginRegistry;

static GLOBAL_REGISTRY: LazyLock<RwLock<PluginRegistry>> =
    LazyLock::new(|| RwLock::new(PluginRegistry::with_builtins()));

/// The process-wide plugin registry.
pub fn global_registry() -> &'static RwLock<PluginRegistry> {
    &GLOBAL_REGISTRY
}

/// Resolver provider backed by [`global_registry`].
///
/// The registry is read-locked only while the class loader snapshot is taken.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobalPluginRegistry;

impl ResolverProvider for GlobalPluginRegistry {
    type Resolver = ClassLoader;

    fn resolver(&self, category: &str, base_class: &str) -> Result<ClassLoader, SamplerError> {
        let registry = global_registry()
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        ClassLoader::new(&registry, category, base_class)
    }
}
