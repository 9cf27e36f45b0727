// SPDX-FileCopyrightText: 2026 samplerkit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The allocator capability every sampler plugin implements.

use crate::error::SamplerError;
use crate::types::SamplerRequest;

/// A sampler produced by an allocator for one request.
pub trait ConstraintSampler: Send + Sync {
    /// Name of the sampler implementation.
    fn name(&self) -> &str;

    /// Planning group this sampler produces states for.
    fn group_name(&self) -> &str;
}

/// Allocates constraint samplers for the requests it knows how to service.
///
/// Plugins loaded by name from the `constraint_samplers` parameter implement
/// this trait.
pub trait ConstraintSamplerAllocator: Send + Sync + 'static {
    /// Plugin name of this allocator.
    fn name(&self) -> &str;

    /// Returns true if this allocator can build a sampler for the request.
    fn can_service(&self, request: &SamplerRequest) -> bool;

    /// Builds a sampler for the request.
    fn alloc(&self, request: &SamplerRequest) -> Result<Box<dyn ConstraintSampler>, SamplerError>;
}

impl std::fmt::Debug for dyn ConstraintSamplerAllocator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConstraintSamplerAllocator")
            .field("name", &self.name())
            .finish()
    }
}

impl std::fmt::Debug for dyn ConstraintSampler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConstraintSampler")
            .field("name", &self.name())
            .field("group_name", &self.group_name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed;

    impl ConstraintSampler for Fixed {
        fn name(&self) -> &str {
            "fixed"
        }

        fn group_name(&self) -> &str {
            "arm"
        }
    }

    impl ConstraintSamplerAllocator for Fixed {
        fn name(&self) -> &str {
            "fixed"
        }

        fn can_service(&self, _request: &SamplerRequest) -> bool {
            true
        }

        fn alloc(&self, _request: &SamplerRequest) -> Result<Box<dyn ConstraintSampler>, SamplerError> {
            Ok(Box::new(Fixed))
        }
    }

    #[test]
    fn boxed_trait_objects_are_debug() {
        let allocator: Box<dyn ConstraintSamplerAllocator> = Box::new(Fixed);
        assert_eq!(
            format!("{allocator:?}"),
            "ConstraintSamplerAllocator { name: \"fixed\" }"
        );

        let result: Result<Box<dyn ConstraintSamplerAllocator>, SamplerError> =
            Err(SamplerError::Internal("nope".into()));
        assert!(matches!(result.unwrap_err(), SamplerError::Internal(_)));

        let sampler = allocator.alloc(&SamplerRequest::new("arm")).unwrap();
        assert!(format!("{sampler:?}").contains("group_name: \"arm\""));
    }
}
