// SPDX-FileCopyrightText: 2026 samplerkit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests: manifests on disk combined with linked built-ins.

use samplerkit_core::{SAMPLER_ALLOCATOR_BASE_CLASS, SAMPLER_PLUGIN_CATEGORY, SamplerError};
use samplerkit_plugin::builtin::{JOINT_SAMPLER, POSE_SAMPLER};
use samplerkit_plugin::{ClassLoader, PluginRegistry, PluginStatus, discover_manifests};

fn write_manifest(dir: &std::path::Path, file: &str, name: &str, category: &str) {
    let content = format!(
        r#"
[plugin]
name = "{name}"
version = "1.2.3"
description = "Externally declared sampler"
category = "{category}"
base_class = "{SAMPLER_ALLOCATOR_BASE_CLASS}"
"#
    );
    std::fs::write(dir.join(file), content).unwrap();
}

#[test]
fn discovered_manifests_extend_builtins() {
    let dir = tempfile::tempdir().unwrap();
    write_manifest(dir.path(), "a.toml", "gravity_sampler", SAMPLER_PLUGIN_CATEGORY);
    write_manifest(dir.path(), "b.toml", "foreign_sampler", "another_pkg");
    // Same name as a built-in: must not shadow the linked factory.
    write_manifest(dir.path(), "c.toml", JOINT_SAMPLER, SAMPLER_PLUGIN_CATEGORY);

    let mut registry = PluginRegistry::with_builtins();
    let manifests = discover_manifests(dir.path()).unwrap();
    assert_eq!(manifests.len(), 3);
    assert_eq!(registry.declare_all(manifests), 2);

    let loader =
        ClassLoader::new(&registry, SAMPLER_PLUGIN_CATEGORY, SAMPLER_ALLOCATOR_BASE_CLASS).unwrap();
    assert_eq!(
        loader.declared_classes(),
        vec![
            "gravity_sampler",
            JOINT_SAMPLER,
            POSE_SAMPLER,
            "union_constraint_sampler"
        ]
    );

    assert!(loader.create_instance(JOINT_SAMPLER).is_ok());
    assert!(matches!(
        loader.create_instance("gravity_sampler"),
        Err(SamplerError::PluginNotLinked { .. })
    ));
    // Declared under another category, so invisible to this loader.
    assert!(matches!(
        loader.create_instance("foreign_sampler"),
        Err(SamplerError::PluginNotFound { .. })
    ));
    assert_eq!(
        registry.get("foreign_sampler").unwrap().status,
        PluginStatus::NotLinked
    );
}

#[test]
fn loader_for_category_with_only_foreign_manifests_is_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    write_manifest(dir.path(), "x.toml", "foreign_sampler", "another_pkg");

    let mut registry = PluginRegistry::new();
    registry.declare_all(discover_manifests(dir.path()).unwrap());

    let err = ClassLoader::new(&registry, SAMPLER_PLUGIN_CATEGORY, SAMPLER_ALLOCATOR_BASE_CLASS)
        .unwrap_err();
    assert!(matches!(err, SamplerError::ResolverUnavailable { .. }));
}
