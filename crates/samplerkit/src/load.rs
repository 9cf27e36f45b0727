// SPDX-FileCopyrightText: 2026 samplerkit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `samplerkit load` command implementation.

use std::path::Path;
use std::sync::PoisonError;

use colored::Colorize;
use samplerkit_config::{PluginConfig, SamplerKitConfig};
use samplerkit_core::{ConstraintSamplerManager, SharedManager};
use samplerkit_loader::ConstraintSamplerManagerLoader;
use samplerkit_plugin::{PluginRegistry, discover_manifests, global_registry};
use tracing::{debug, warn};

/// Add manifests from the configured directories to `registry` and apply
/// the disabled list. Returns the number of newly declared plugins.
///
/// Unreadable directories and unknown disabled names are logged and skipped.
pub fn prepare_registry(registry: &mut PluginRegistry, plugin: &PluginConfig) -> usize {
    let mut declared = 0;
    for dir in &plugin.manifest_dirs {
        match discover_manifests(Path::new(dir)) {
            Ok(manifests) => {
                let added = registry.declare_all(manifests);
                debug!(dir = %dir, added, "declared plugins from manifest directory");
                declared += added;
            }
            Err(e) => warn!(dir = %dir, error = %e, "cannot read plugin manifest directory"),
        }
    }

    for name in &plugin.disabled {
        if let Err(e) = registry.set_enabled(name, false) {
            warn!(plugin = %name, error = %e, "cannot disable plugin");
        }
    }
    declared
}

/// Seed the process-wide registry from `plugin`.
pub fn prepare_global_registry(plugin: &PluginConfig) -> usize {
    let mut registry = global_registry()
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    prepare_registry(&mut registry, plugin)
}

/// Run the loading pass against the process-wide registry.
///
/// `samplers` replaces the configured `constraint_samplers` value when given.
pub fn load_manager(mut config: SamplerKitConfig, samplers: Option<String>) -> SharedManager {
    if samplers.is_some() {
        config.constraint_samplers = samplers;
    }
    prepare_global_registry(&config.plugin);
    ConstraintSamplerManagerLoader::new(&config, None).into_manager()
}

/// Lines printed for a loaded manager.
pub fn summary_lines(manager: &ConstraintSamplerManager) -> Vec<String> {
    if manager.is_empty() {
        return vec!["no constraint sampler allocators loaded".to_string()];
    }
    let mut lines = vec![format!(
        "loaded {} constraint sampler allocator(s):",
        manager.len()
    )];
    lines.extend(
        manager
            .allocator_names()
            .iter()
            .enumerate()
            .map(|(i, name)| format!("  {}. {}", i + 1, name.bold())),
    );
    lines
}

/// Entry point for `samplerkit load`. Plugin failures are reported through
/// the log, so this always succeeds.
pub fn run_load(config: SamplerKitConfig, samplers: Option<String>) {
    let manager = load_manager(config, samplers);
    let manager = manager.read().unwrap_or_else(PoisonError::into_inner);
    for line in summary_lines(&manager) {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use samplerkit_core::{SAMPLER_ALLOCATOR_BASE_CLASS, SAMPLER_PLUGIN_CATEGORY};
    use samplerkit_plugin::PluginStatus;

    fn write_manifest(dir: &Path, name: &str) {
        let body = format!(
            "[plugin]\nname = \"{name}\"\nversion = \"1.0.0\"\ndescription = \"external\"\n\
             category = \"{SAMPLER_PLUGIN_CATEGORY}\"\nbase_class = \"{SAMPLER_ALLOCATOR_BASE_CLASS}\"\n"
        );
        std::fs::write(dir.join(format!("{name}.toml")), body).unwrap();
    }

    #[test]
    fn manifests_are_declared_and_disabled_names_applied() {
        let dir = tempfile::tempdir().unwrap();
        write_manifest(dir.path(), "gpu_sampler");
        write_manifest(dir.path(), "joint_constraint_sampler");

        let mut registry = PluginRegistry::with_builtins();
        let plugin = PluginConfig {
            manifest_dirs: vec![dir.path().display().to_string()],
            disabled: vec!["pose_constraint_sampler".to_string()],
        };

        // The builtin joint sampler is already linked and is not shadowed.
        assert_eq!(prepare_registry(&mut registry, &plugin), 1);
        assert_eq!(
            registry.get("gpu_sampler").unwrap().status,
            PluginStatus::NotLinked
        );
        assert_eq!(
            registry.get("joint_constraint_sampler").unwrap().status,
            PluginStatus::Enabled
        );
        assert_eq!(
            registry.get("pose_constraint_sampler").unwrap().status,
            PluginStatus::Disabled
        );
    }

    #[test]
    fn missing_directory_and_unknown_disabled_name_are_skipped() {
        let mut registry = PluginRegistry::with_builtins();
        let plugin = PluginConfig {
            manifest_dirs: vec!["/nonexistent/samplerkit/manifests".to_string()],
            disabled: vec!["no_such_plugin".to_string()],
        };
        assert_eq!(prepare_registry(&mut registry, &plugin), 0);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn summary_for_empty_manager() {
        let manager = ConstraintSamplerManager::new();
        assert_eq!(
            summary_lines(&manager),
            vec!["no constraint sampler allocators loaded"]
        );
    }

    #[test]
    fn override_replaces_configured_samplers() {
        colored::control::set_override(false);
        let config = SamplerKitConfig {
            constraint_samplers: Some("pose_constraint_sampler".to_string()),
            ..Default::default()
        };
        let manager = load_manager(
            config,
            Some("joint_constraint_sampler missing_sampler".to_string()),
        );
        let manager = manager.read().unwrap();
        assert_eq!(manager.allocator_names(), vec!["joint_constraint_sampler"]);
        assert_eq!(
            summary_lines(&manager),
            vec![
                "loaded 1 constraint sampler allocator(s):",
                "  1. joint_constraint_sampler"
            ]
        );
    }
}
