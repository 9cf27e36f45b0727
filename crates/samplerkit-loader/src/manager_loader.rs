// SPDX-FileCopyrightText: 2026 samplerkit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Composition-root wrapper around the loading pass.

use samplerkit_core::{ConstraintSamplerManager, ParameterSource, ResolverProvider, SharedManager};
use samplerkit_plugin::GlobalPluginRegistry;

use crate::load::load_constraint_samplers;

/// Owns a sampler manager populated from the `constraint_samplers` parameter.
///
/// Loading happens once, in the constructor. The loader does not support
/// reloading; build a new one to load again.
#[derive(Debug, Clone)]
pub struct ConstraintSamplerManagerLoader {
    manager: SharedManager,
}

impl ConstraintSamplerManagerLoader {
    /// Load plugins through the process-wide plugin registry.
    ///
    /// When `manager` is `None` a new empty manager is created.
    pub fn new<P>(params: &P, manager: Option<SharedManager>) -> Self
    where
        P: ParameterSource + ?Sized,
    {
        Self::with_provider(params, manager, &GlobalPluginRegistry)
    }

    /// Load plugins through an explicit resolver provider.
    pub fn with_provider<P, R>(params: &P, manager: Option<SharedManager>, provider: &R) -> Self
    where
        P: ParameterSource + ?Sized,
        R: ResolverProvider + ?Sized,
    {
        let manager = manager.unwrap_or_else(ConstraintSamplerManager::shared);
        let mut handle = manager.clone();
        load_constraint_samplers(params, &mut handle, provider);
        Self { manager }
    }

    /// The manager the plugins were registered into.
    pub fn manager(&self) -> &SharedManager {
        &self.manager
    }

    /// Consume the loader and return its manager.
    pub fn into_manager(self) -> SharedManager {
        self.manager
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use samplerkit_plugin::builtin::{JOINT_SAMPLER, UNION_SAMPLER};
    use samplerkit_test_utils::{FakeResolverProvider, MockAllocator, params};
    use std::sync::Arc;

    #[test]
    fn creates_manager_when_none_given() {
        let loader = ConstraintSamplerManagerLoader::with_provider(
            &params(&[("constraint_samplers", "a")]),
            None,
            &FakeResolverProvider::new(),
        );
        assert_eq!(loader.manager().read().unwrap().allocator_names(), vec!["a"]);
    }

    #[test]
    fn appends_to_supplied_manager() {
        let shared = ConstraintSamplerManager::shared();
        shared
            .write()
            .unwrap()
            .register_sampler_allocator(Box::new(MockAllocator::new("preexisting")));

        let loader = ConstraintSamplerManagerLoader::with_provider(
            &params(&[("constraint_samplers", "b c")]),
            Some(Arc::clone(&shared)),
            &FakeResolverProvider::new(),
        );

        assert!(Arc::ptr_eq(loader.manager(), &shared));
        assert_eq!(
            shared.read().unwrap().allocator_names(),
            vec!["preexisting", "b", "c"]
        );
    }

    #[test]
    fn loads_builtins_through_global_registry() {
        let value = format!("{JOINT_SAMPLER} no_such_sampler {UNION_SAMPLER}");
        let loader =
            ConstraintSamplerManagerLoader::new(&params(&[("constraint_samplers", value.as_str())]), None);
        let manager = loader.into_manager();
        assert_eq!(
            manager.read().unwrap().allocator_names(),
            vec![JOINT_SAMPLER, UNION_SAMPLER]
        );
    }
}
