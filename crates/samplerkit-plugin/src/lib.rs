// SPDX-FileCopyrightText: 2026 samplerkit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin framework for constraint sampler allocators.
//!
//! Plugin classes are declared by manifests and made constructible by
//! factories linked into the binary. A [`ClassLoader`] scoped to a category
//! and base class turns a plugin name into a new allocator instance.

pub mod builtin;
pub mod catalog;
pub mod class_loader;
pub mod global;
pub mod manifest;
pub mod registry;

pub use catalog::{builtin_catalog, discover_manifests, filter_manifests, search_catalog};
pub use class_loader::ClassLoader;
pub use global::{GlobalPluginRegistry, global_registry};
pub use manifest::{PluginManifest, parse_plugin_manifest};
pub use registry::{PluginEntry, PluginFactory, PluginRegistry, PluginStatus};
