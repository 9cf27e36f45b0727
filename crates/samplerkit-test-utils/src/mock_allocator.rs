// SPDX-FileCopyrightText: 2026 samplerkit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock allocator for registry and loader tests.

use samplerkit_core::{ConstraintSampler, ConstraintSamplerAllocator, SamplerError, SamplerRequest};

/// An allocator that services every request and remembers its plugin name.
#[derive(Debug, Clone)]
pub struct MockAllocator {
    name: String,
}

impl MockAllocator {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

struct MockSampler {
    name: String,
    group: String,
}

impl ConstraintSampler for MockSampler {
    fn name(&self) -> &str {
        &self.name
    }

    fn group_name(&self) -> &str {
        &self.group
    }
}

impl ConstraintSamplerAllocator for MockAllocator {
    fn name(&self) -> &str {
        &self.name
    }

    fn can_service(&self, _request: &SamplerRequest) -> bool {
        true
    }

    fn alloc(&self, request: &SamplerRequest) -> Result<Box<dyn ConstraintSampler>, SamplerError> {
        Ok(Box::new(MockSampler {
            name: self.name.clone(),
            group: request.group_name.clone(),
        }))
    }
}
