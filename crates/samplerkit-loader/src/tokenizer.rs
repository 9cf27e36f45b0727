// SPDX-FileCopyrightText: 2026 samplerkit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Splitting of the `constraint_samplers` parameter into plugin names.

/// Split a plugin list on spaces, dropping empty tokens.
///
/// Only the space character separates names; runs of spaces and leading or
/// trailing spaces never yield empty names. Order is preserved.
pub fn split_plugin_names(value: &str) -> impl Iterator<Item = &str> {
    value.split(' ').filter(|token| !token.is_empty())
}
