// SPDX-FileCopyrightText: 2026 samplerkit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for loading through the process-wide plugin registry.

use std::sync::Arc;

use samplerkit_core::{
    ConstraintKind, ConstraintSamplerAllocator, SAMPLER_ALLOCATOR_BASE_CLASS,
    SAMPLER_PLUGIN_CATEGORY, SamplerError, SamplerRequest,
};
use samplerkit_loader::ConstraintSamplerManagerLoader;
use samplerkit_plugin::{PluginManifest, global_registry};
use samplerkit_test_utils::{MockAllocator, params};

fn manifest(name: &str) -> PluginManifest {
    PluginManifest {
        name: name.to_string(),
        version: "0.3.0".to_string(),
        description: "host-provided allocator".to_string(),
        category: SAMPLER_PLUGIN_CATEGORY.to_string(),
        base_class: SAMPLER_ALLOCATOR_BASE_CLASS.to_string(),
        author: None,
    }
}

fn create_host_sampler() -> Result<Box<dyn ConstraintSamplerAllocator>, SamplerError> {
    Ok(Box::new(MockAllocator::new("host_sampler")))
}

#[test]
fn host_factories_and_builtins_load_side_by_side() {
    {
        let mut registry = global_registry().write().unwrap();
        registry.register(manifest("host_sampler"), Some(Arc::new(create_host_sampler)));
        registry.declare_all(vec![manifest("declared_only")]);
    }

    let loader = ConstraintSamplerManagerLoader::new(
        &params(&[(
            "constraint_samplers",
            "host_sampler declared_only pose_constraint_sampler",
        )]),
        None,
    );

    let manager = loader.manager().read().unwrap();
    assert_eq!(
        manager.allocator_names(),
        vec!["host_sampler", "pose_constraint_sampler"]
    );

    // Earlier registrations win: the mock services everything.
    let request = SamplerRequest::new("arm").with(ConstraintKind::Position, 1);
    let sampler = manager.select_sampler(&request).unwrap();
    assert_eq!(sampler.name(), "host_sampler");
    assert_eq!(sampler.group_name(), "arm");
}

#[test]
fn absent_parameter_leaves_manager_empty() {
    let loader = ConstraintSamplerManagerLoader::new(&params(&[]), None);
    assert!(loader.manager().read().unwrap().is_empty());
}
