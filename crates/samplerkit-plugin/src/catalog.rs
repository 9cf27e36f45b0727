// SPDX-FileCopyrightText: 2026 samplerkit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin catalog: built-in manifests and on-disk manifest discovery.

use std::path::{Path, PathBuf};

use samplerkit_core::{SAMPLER_ALLOCATOR_BASE_CLASS, SAMPLER_PLUGIN_CATEGORY, SamplerError};
use tracing::{debug, warn};

use crate::builtin::{JOINT_SAMPLER, POSE_SAMPLER, UNION_SAMPLER};
use crate::manifest::{PluginManifest, parse_plugin_manifest};

fn builtin_manifest(name: &str, description: &str) -> PluginManifest {
    PluginManifest {
        name: name.to_string(),
        version: "0.1.0".to_string(),
        description: description.to_string(),
        category: SAMPLER_PLUGIN_CATEGORY.to_string(),
        base_class: SAMPLER_ALLOCATOR_BASE_CLASS.to_string(),
        author: Some("samplerkit Contributors".to_string()),
    }
}

/// Returns manifests for all built-in allocators.
///
/// - joint_constraint_sampler
/// - pose_constraint_sampler
/// - union_constraint_sampler
pub fn builtin_catalog() -> Vec<PluginManifest> {
    vec![
        builtin_manifest(
            JOINT_SAMPLER,
            "Samples joint-space states for requests made only of joint constraints",
        ),
        builtin_manifest(
            POSE_SAMPLER,
            "Samples end-effector poses for position and orientation constraints",
        ),
        builtin_manifest(
            UNION_SAMPLER,
            "Combines samplers for arbitrary mixed constraint sets",
        ),
    ]
}

/// Search the built-in catalog by query string.
///
/// Filters entries whose name or description contains the query (case-insensitive).
/// If query is empty, returns all entries.
pub fn search_catalog(query: &str) -> Vec<PluginManifest> {
    filter_manifests(builtin_catalog(), query)
}

/// Case-insensitive name/description filter over any manifest list.
pub fn filter_manifests(manifests: Vec<PluginManifest>, query: &str) -> Vec<PluginManifest> {
    if query.is_empty() {
        return manifests;
    }
    let query_lower = query.to_lowercase();
    manifests
        .into_iter()
        .filter(|m| {
            m.name.to_lowercase().contains(&query_lower)
                || m.description.to_lowercase().contains(&query_lower)
        })
        .collect()
}

/// Read every `*.toml` manifest in `dir` (non-recursive), in path order.
///
/// Files that fail to read or parse are logged and skipped; only a missing or
/// unreadable directory is an error.
pub fn discover_manifests(dir: &Path) -> Result<Vec<PluginManifest>, SamplerError> {
    let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "toml"))
        .collect();
    paths.sort();

    let mut manifests = Vec::with_capacity(paths.len());
    for path in paths {
        match read_manifest(&path) {
            Ok(manifest) => {
                debug!(path = %path.display(), plugin = %manifest.name, "discovered plugin manifest");
                manifests.push(manifest);
            }
            Err(e) => warn!(path = %path.display(), error = %e, "skipping plugin manifest"),
        }
    }
    Ok(manifests)
}

fn read_manifest(path: &Path) -> Result<PluginManifest, SamplerError> {
    let content = std::fs::read_to_string(path)?;
    parse_plugin_manifest(&content).map_err(|e| SamplerError::Manifest {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    fn builtin_catalog_declares_allocator_interface() {
        let catalog = builtin_catalog();
        assert_eq!(catalog.len(), 3);
        assert!(
            catalog
                .iter()
                .all(|m| m.declares(SAMPLER_PLUGIN_CATEGORY, SAMPLER_ALLOCATOR_BASE_CLASS))
        );
    }

    #[test]
    fn search_catalog_case_insensitive() {
        let results = search_catalog("JOINT");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, JOINT_SAMPLER);
    }

    #[test]
    fn search_catalog_by_description() {
        let results = search_catalog("end-effector");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, POSE_SAMPLER);
    }

    #[test]
    fn search_catalog_empty_returns_all() {
        assert_eq!(search_catalog("").len(), 3);
    }

    #[test]
    fn search_catalog_no_match() {
        assert!(search_catalog("xyz_nonexistent").is_empty());
    }

    #[test]
    #[traced_test]
    fn discover_skips_invalid_manifests() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("broken.toml"), "[plugin]\nname = 3\n").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();
        std::fs::write(
            dir.path().join("external.toml"),
            r#"
[plugin]
name = "external_sampler"
version = "0.2.0"
category = "samplerkit_core"
base_class = "constraint_samplers::ConstraintSamplerAllocator"
"#,
        )
        .unwrap();

        let manifests = discover_manifests(dir.path()).unwrap();
        assert_eq!(manifests.len(), 1);
        assert_eq!(manifests[0].name, "external_sampler");
        assert!(logs_contain("skipping plugin manifest"));
    }

    #[test]
    fn discover_missing_dir_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(matches!(
            discover_manifests(&missing),
            Err(SamplerError::Io { .. })
        ));
    }
}
