// SPDX-FileCopyrightText: 2026 samplerkit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Name-to-instance resolution for allocator plugins.

use crate::error::SamplerError;
use crate::traits::allocator::ConstraintSamplerAllocator;

/// Constructs allocator instances by plugin name.
pub trait SamplerResolver {
    /// Create a fresh allocator instance for the plugin called `name`.
    fn create_instance(
        &self,
        name: &str,
    ) -> Result<Box<dyn ConstraintSamplerAllocator>, SamplerError>;
}

/// Builds resolvers scoped to a plugin category and base class.
pub trait ResolverProvider {
    /// The resolver this provider hands out.
    type Resolver: SamplerResolver;

    /// Create a resolver for classes declared under `category` that derive
    /// from `base_class`.
    ///
    /// Fails with [`SamplerError::ResolverUnavailable`] when the backing
    /// metadata is missing.
    fn resolver(&self, category: &str, base_class: &str) -> Result<Self::Resolver, SamplerError>;
}
