// SPDX-FileCopyrightText: 2026 samplerkit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Class loader: resolves plugin names to freshly constructed allocators.
//!
//! A `ClassLoader` is scoped to one category/base class pair and snapshots
//! the matching registry entries when it is created, so it does not borrow
//! the registry it came from.

use std::collections::BTreeMap;
use std::sync::Arc;

use samplerkit_core::{ConstraintSamplerAllocator, ResolverProvider, SamplerError, SamplerResolver};
use tracing::debug;

use crate::registry::{PluginFactory, PluginRegistry, PluginStatus};

#[derive(Clone)]
struct ClassRecord {
    status: PluginStatus,
    factory: Option<Arc<dyn PluginFactory>>,
}

/// Resolver for the classes declared under one category and base class.
#[derive(Clone)]
pub struct ClassLoader {
    category: String,
    base_class: String,
    classes: BTreeMap<String, ClassRecord>,
}

impl ClassLoader {
    /// Build a class loader from the registry.
    ///
    /// Fails with [`SamplerError::ResolverUnavailable`] if no entry declares
    /// the category/base class pair.
    pub fn new(
        registry: &PluginRegistry,
        category: &str,
        base_class: &str,
    ) -> Result<Self, SamplerError> {
        let classes: BTreeMap<String, ClassRecord> = registry
            .classes_for(category, base_class)
            .into_iter()
            .map(|entry| {
                (
                    entry.manifest.name.clone(),
                    ClassRecord {
                        status: entry.status.clone(),
                        factory: entry.factory.clone(),
                    },
                )
            })
            .collect();

        if classes.is_empty() {
            return Err(SamplerError::ResolverUnavailable {
                category: category.to_string(),
                base_class: base_class.to_string(),
                reason: "no plugin manifest declares this base class".to_string(),
            });
        }

        debug!(
            category,
            base_class,
            classes = classes.len(),
            "created plugin class loader"
        );

        Ok(Self {
            category: category.to_string(),
            base_class: base_class.to_string(),
            classes,
        })
    }

    /// Category this loader is scoped to.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Base class this loader is scoped to.
    pub fn base_class(&self) -> &str {
        &self.base_class
    }

    /// Names of all declared classes, sorted.
    pub fn declared_classes(&self) -> Vec<&str> {
        self.classes.keys().map(String::as_str).collect()
    }

    /// True if `name` is declared, enabled and linked.
    pub fn is_class_available(&self, name: &str) -> bool {
        self.classes
            .get(name)
            .is_some_and(|c| c.status == PluginStatus::Enabled && c.factory.is_some())
    }

    /// Construct a new instance of the class called `name`.
    pub fn create_instance(
        &self,
        name: &str,
    ) -> Result<Box<dyn ConstraintSamplerAllocator>, SamplerError> {
        let record = self
            .classes
            .get(name)
            .ok_or_else(|| SamplerError::PluginNotFound {
                name: name.to_string(),
                declared: self.declared_classes().join(", "),
            })?;

        if record.status == PluginStatus::Disabled {
            return Err(SamplerError::PluginDisabled {
                name: name.to_string(),
            });
        }

        let factory = record
            .factory
            .as_ref()
            .ok_or_else(|| SamplerError::PluginNotLinked {
                name: name.to_string(),
            })?;

        factory.create().map_err(|e| match e {
            SamplerError::PluginCreation { .. } => e,
            other => SamplerError::PluginCreation {
                name: name.to_string(),
                source: Box::new(other),
            },
        })
    }
}

impl std::fmt::Debug for ClassLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClassLoader")
            .field("category", &self.category)
            .field("base_class", &self.base_class)
            .field("classes", &self.declared_classes())
            .finish()
    }
}

impl SamplerResolver for ClassLoader {
    fn create_instance(
        &self,
        name: &str,
    ) -> Result<Box<dyn ConstraintSamplerAllocator>, SamplerError> {
        ClassLoader::create_instance(self, name)
    }
}

impl ResolverProvider for PluginRegistry {
    type Resolver = ClassLoader;

    fn resolver(&self, category: &str, base_class: &str) -> Result<ClassLoader, SamplerError> {
        ClassLoader::new(self, category, base_class)
    }
}
