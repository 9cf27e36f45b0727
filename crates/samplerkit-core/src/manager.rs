// SPDX-FileCopyrightText: 2026 samplerkit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Constraint sampler manager.
//!
//! Holds allocators in registration order and picks the first one able to
//! service a request.

use std::sync::{Arc, PoisonError, RwLock};

use tracing::{debug, warn};

use crate::traits::allocator::{ConstraintSampler, ConstraintSamplerAllocator};
use crate::traits::registry::SamplerRegistry;
use crate::types::SamplerRequest;

/// Manager handle shared between the loader and the rest of the host.
pub type SharedManager = Arc<RwLock<ConstraintSamplerManager>>;

/// Ordered collection of constraint sampler allocators.
#[derive(Default)]
pub struct ConstraintSamplerManager {
    allocators: Vec<Box<dyn ConstraintSamplerAllocator>>,
}

impl ConstraintSamplerManager {
    /// Create an empty manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty manager wrapped in a shared handle.
    pub fn shared() -> SharedManager {
        Arc::new(RwLock::new(Self::new()))
    }

    /// Append an allocator. Earlier registrations take precedence.
    pub fn register_sampler_allocator(&mut self, allocator: Box<dyn ConstraintSamplerAllocator>) {
        debug!(allocator = allocator.name(), "registering sampler allocator");
        self.allocators.push(allocator);
    }

    /// Select a sampler for the request.
    ///
    /// Allocators are consulted in registration order. An allocator that
    /// accepts the request but fails to allocate is skipped.
    pub fn select_sampler(&self, request: &SamplerRequest) -> Option<Box<dyn ConstraintSampler>> {
        for allocator in &self.allocators {
            if !allocator.can_service(request) {
                continue;
            }
            match allocator.alloc(request) {
                Ok(sampler) => return Some(sampler),
                Err(e) => {
                    warn!(
                        allocator = allocator.name(),
                        group = %request.group_name,
                        error = %e,
                        "allocator accepted request but failed to allocate"
                    );
                }
            }
        }
        None
    }

    /// Names of registered allocators, in registration order.
    pub fn allocator_names(&self) -> Vec<&str> {
        self.allocators.iter().map(|a| a.name()).collect()
    }

    /// Returns the number of registered allocators.
    pub fn len(&self) -> usize {
        self.allocators.len()
    }

    /// Returns true if no allocators are registered.
    pub fn is_empty(&self) -> bool {
        self.allocators.is_empty()
    }
}

impl std::fmt::Debug for ConstraintSamplerManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConstraintSamplerManager")
            .field("allocators", &self.allocator_names())
            .finish()
    }
}

impl SamplerRegistry for ConstraintSamplerManager {
    fn register(&mut self, allocator: Box<dyn ConstraintSamplerAllocator>) {
        self.register_sampler_allocator(allocator);
    }
}

impl SamplerRegistry for SharedManager {
    fn register(&mut self, allocator: Box<dyn ConstraintSamplerAllocator>) {
        self.write()
            .unwrap_or_else(PoisonError::into_inner)
            .register_sampler_allocator(allocator);
    }
}
