// SPDX-FileCopyrightText: 2026 samplerkit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait seams between the loader and its collaborators.
//!
//! The loader only ever sees these traits: where parameters come from, how a
//! plugin name turns into an allocator, and where allocators end up.

pub mod allocator;
pub mod parameters;
pub mod registry;
pub mod resolver;

pub use allocator::{ConstraintSampler, ConstraintSamplerAllocator};
pub use parameters::ParameterSource;
pub use registry::SamplerRegistry;
pub use resolver::{ResolverProvider, SamplerResolver};
