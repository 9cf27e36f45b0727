// SPDX-FileCopyrightText: 2026 samplerkit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Read-only access to named string parameters.

use std::collections::{BTreeMap, HashMap};

/// A key/value parameter store.
pub trait ParameterSource {
    /// Returns the string value for `name`, or `None` if it is not set.
    ///
    /// A parameter that is set to the empty string is present.
    fn get_parameter(&self, name: &str) -> Option<&str>;

    /// Returns true if `name` is set.
    fn has_parameter(&self, name: &str) -> bool {
        self.get_parameter(name).is_some()
    }
}

impl ParameterSource for HashMap<String, String> {
    fn get_parameter(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl ParameterSource for BTreeMap<String, String> {
    fn get_parameter(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}
