// SPDX-FileCopyrightText: 2026 samplerkit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for samplerkit.
//!
//! Provides fakes for deterministic loader tests without the real plugin
//! framework.
//!
//! # Components
//!
//! - [`FakeResolverProvider`] - Resolver provider that records constructions and lookups
//! - [`MockAllocator`] - Allocator that records the name it was created under
//! - [`params`] - Builds an in-memory parameter map

pub mod fake_resolver;
pub mod mock_allocator;

pub use fake_resolver::{FakeResolver, FakeResolverProvider, ResolverLog};
pub use mock_allocator::MockAllocator;

use std::collections::HashMap;

/// Build an in-memory parameter store from key/value pairs.
pub fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
