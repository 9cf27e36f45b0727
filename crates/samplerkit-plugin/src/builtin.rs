// SPDX-FileCopyrightText: 2026 samplerkit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Allocators compiled into samplerkit.
//!
//! Each allocator is linked to the class name of its catalog manifest via
//! [`factory_for`].

use std::sync::Arc;

use samplerkit_core::{
    ConstraintKind, ConstraintSampler, ConstraintSamplerAllocator, SamplerError, SamplerRequest,
};

use crate::registry::PluginFactory;

pub const JOINT_SAMPLER: &str = "joint_constraint_sampler";
pub const POSE_SAMPLER: &str = "pose_constraint_sampler";
pub const UNION_SAMPLER: &str = "union_constraint_sampler";

/// Sampler handed out by the built-in allocators.
#[derive(Debug, Clone)]
pub struct BuiltinSampler {
    name: &'static str,
    group: String,
}

impl ConstraintSampler for BuiltinSampler {
    fn name(&self) -> &str {
        self.name
    }

    fn group_name(&self) -> &str {
        &self.group
    }
}

fn sampler_for(
    name: &'static str,
    request: &SamplerRequest,
) -> Result<Box<dyn ConstraintSampler>, SamplerError> {
    if request.group_name.trim().is_empty() {
        return Err(SamplerError::Config(format!(
            "{name}: sampler request has no planning group"
        )));
    }
    Ok(Box::new(BuiltinSampler {
        name,
        group: request.group_name.clone(),
    }))
}

/// Services requests made only of joint constraints.
#[derive(Debug, Default)]
pub struct JointConstraintSamplerAllocator;

impl ConstraintSamplerAllocator for JointConstraintSamplerAllocator {
    fn name(&self) -> &str {
        JOINT_SAMPLER
    }

    fn can_service(&self, request: &SamplerRequest) -> bool {
        request.joint_constraints > 0 && request.total() == request.joint_constraints
    }

    fn alloc(&self, request: &SamplerRequest) -> Result<Box<dyn ConstraintSampler>, SamplerError> {
        sampler_for(JOINT_SAMPLER, request)
    }
}

/// Services position and orientation constraints (no visibility).
#[derive(Debug, Default)]
pub struct PoseConstraintSamplerAllocator;

impl ConstraintSamplerAllocator for PoseConstraintSamplerAllocator {
    fn name(&self) -> &str {
        POSE_SAMPLER
    }

    fn can_service(&self, request: &SamplerRequest) -> bool {
        let pose = request.count(ConstraintKind::Position) + request.count(ConstraintKind::Orientation);
        pose > 0 && request.count(ConstraintKind::Visibility) == 0
    }

    fn alloc(&self, request: &SamplerRequest) -> Result<Box<dyn ConstraintSampler>, SamplerError> {
        sampler_for(POSE_SAMPLER, request)
    }
}

/// Services any non-empty constraint set.
#[derive(Debug, Default)]
pub struct UnionConstraintSamplerAllocator;

impl ConstraintSamplerAllocator for UnionConstraintSamplerAllocator {
    fn name(&self) -> &str {
        UNION_SAMPLER
    }

    fn can_service(&self, request: &SamplerRequest) -> bool {
        !request.is_empty()
    }

    fn alloc(&self, request: &SamplerRequest) -> Result<Box<dyn ConstraintSampler>, SamplerError> {
        sampler_for(UNION_SAMPLER, request)
    }
}

fn create_joint() -> Result<Box<dyn ConstraintSamplerAllocator>, SamplerError> {
    Ok(Box::new(JointConstraintSamplerAllocator))
}

fn create_pose() -> Result<Box<dyn ConstraintSamplerAllocator>, SamplerError> {
    Ok(Box::new(PoseConstraintSamplerAllocator))
}

fn create_union() -> Result<Box<dyn ConstraintSamplerAllocator>, SamplerError> {
    Ok(Box::new(UnionConstraintSamplerAllocator))
}

/// Returns the factory linked for a built-in class name.
pub fn factory_for(name: &str) -> Option<Arc<dyn PluginFactory>> {
    let factory: Arc<dyn PluginFactory> = match name {
        JOINT_SAMPLER => Arc::new(create_joint),
        POSE_SAMPLER => Arc::new(create_pose),
        UNION_SAMPLER => Arc::new(create_union),
        _ => return None,
    };
    Some(factory)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn joint_only() -> SamplerRequest {
        SamplerRequest::new("arm").with(ConstraintKind::Joint, 3)
    }

    fn pose() -> SamplerRequest {
        SamplerRequest::new("arm")
            .with(ConstraintKind::Position, 1)
            .with(ConstraintKind::Orientation, 1)
    }

    #[test]
    fn joint_allocator_rejects_mixed_requests() {
        let allocator = JointConstraintSamplerAllocator;
        assert!(allocator.can_service(&joint_only()));
        assert!(!allocator.can_service(&joint_only().with(ConstraintKind::Position, 1)));
        assert!(!allocator.can_service(&SamplerRequest::new("arm")));
    }

    #[test]
    fn pose_allocator_rejects_visibility() {
        let allocator = PoseConstraintSamplerAllocator;
        assert!(allocator.can_service(&pose()));
        assert!(!allocator.can_service(&pose().with(ConstraintKind::Visibility, 1)));
        assert!(!allocator.can_service(&joint_only()));
    }

    #[test]
    fn union_allocator_services_anything_non_empty() {
        let allocator = UnionConstraintSamplerAllocator;
        assert!(allocator.can_service(&joint_only()));
        assert!(allocator.can_service(&pose().with(ConstraintKind::Visibility, 2)));
        assert!(!allocator.can_service(&SamplerRequest::new("arm")));
    }

    #[test]
    fn alloc_requires_group() {
        let allocator = UnionConstraintSamplerAllocator;
        let sampler = allocator.alloc(&joint_only()).unwrap();
        assert_eq!(sampler.name(), UNION_SAMPLER);
        assert_eq!(sampler.group_name(), "arm");

        let unnamed = SamplerRequest::new("").with(ConstraintKind::Joint, 1);
        assert!(allocator.alloc(&unnamed).is_err());
    }

    #[test]
    fn factories_build_matching_allocators() {
        for name in [JOINT_SAMPLER, POSE_SAMPLER, UNION_SAMPLER] {
            let factory = factory_for(name).unwrap();
            assert_eq!(factory.create().unwrap().name(), name);
        }
        assert!(factory_for("nope").is_none());
    }
}
