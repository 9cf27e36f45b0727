// SPDX-FileCopyrightText: 2026 samplerkit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `samplerkit plugins` command implementation.

use std::sync::PoisonError;

use colored::{ColoredString, Colorize};
use samplerkit_config::SamplerKitConfig;
use samplerkit_plugin::{PluginRegistry, PluginStatus, filter_manifests, global_registry};

use crate::load::prepare_registry;

/// One listed plugin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginRow {
    pub name: String,
    pub version: String,
    pub status: PluginStatus,
    pub description: String,
}

/// Registry entries matching `query`, sorted by name.
pub fn plugin_rows(registry: &PluginRegistry, query: &str) -> Vec<PluginRow> {
    let manifests = registry
        .list_all()
        .into_iter()
        .map(|entry| entry.manifest.clone())
        .collect();

    filter_manifests(manifests, query)
        .into_iter()
        .filter_map(|manifest| {
            let status = registry.get(&manifest.name)?.status.clone();
            Some(PluginRow {
                name: manifest.name,
                version: manifest.version,
                status,
                description: manifest.description,
            })
        })
        .collect()
}

fn paint(status: &PluginStatus) -> ColoredString {
    let label = status.to_string();
    match status {
        PluginStatus::Enabled => label.green(),
        PluginStatus::Disabled => label.yellow(),
        PluginStatus::NotLinked => label.red(),
    }
}

/// Entry point for `samplerkit plugins`.
pub fn run_plugins(config: &SamplerKitConfig, query: &str) {
    let mut registry = global_registry()
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    prepare_registry(&mut registry, &config.plugin);

    let rows = plugin_rows(&registry, query);
    if rows.is_empty() {
        println!("no plugins match `{query}`");
        return;
    }

    let width = rows.iter().map(|r| r.name.len()).max().unwrap_or(0);
    for row in &rows {
        println!(
            "{:<width$}  {:<8}  {:<10}  {}",
            row.name,
            row.version,
            paint(&row.status),
            row.description,
        );
    }
}
