// SPDX-FileCopyrightText: 2026 samplerkit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Destination for loaded allocators.

use crate::traits::allocator::ConstraintSamplerAllocator;

/// Accepts newly constructed allocators.
///
/// The loader only appends through this trait; it never reads back.
pub trait SamplerRegistry {
    /// Take ownership of an allocator and make it available for selection.
    fn register(&mut self, allocator: Box<dyn ConstraintSamplerAllocator>);
}
