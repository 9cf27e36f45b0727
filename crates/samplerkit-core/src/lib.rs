// SPDX-FileCopyrightText: 2026 samplerkit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for samplerkit.
//!
//! This crate provides the error type, the allocator traits plugins
//! implement, the seams the loader is written against, and the
//! [`ConstraintSamplerManager`] that stores loaded allocators.

pub mod error;
pub mod manager;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::SamplerError;
pub use manager::{ConstraintSamplerManager, SharedManager};
pub use types::{
    CONSTRAINT_SAMPLERS_PARAM, ConstraintKind, SAMPLER_ALLOCATOR_BASE_CLASS,
    SAMPLER_PLUGIN_CATEGORY, SamplerRequest,
};

pub use traits::{
    ConstraintSampler, ConstraintSamplerAllocator, ParameterSource, ResolverProvider,
    SamplerRegistry, SamplerResolver,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sampler_error_messages() {
        let err = SamplerError::ResolverUnavailable {
            category: SAMPLER_PLUGIN_CATEGORY.into(),
            base_class: SAMPLER_ALLOCATOR_BASE_CLASS.into(),
            reason: "no manifests".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("samplerkit_core"));
        assert!(msg.contains("no manifests"));

        let err = SamplerError::creation("joint", "out of memory");
        assert_eq!(
            err.to_string(),
            "failed to create plugin 'joint': out of memory"
        );
    }

    #[test]
    fn constraint_kind_parses_snake_case() {
        use std::str::FromStr;
        use strum::IntoEnumIterator;

        for kind in ConstraintKind::iter() {
            let s = kind.to_string();
            assert_eq!(ConstraintKind::from_str(&s).unwrap(), kind);
        }
        assert_eq!(
            ConstraintKind::from_str("orientation").unwrap(),
            ConstraintKind::Orientation
        );
    }

    #[test]
    fn request_counts() {
        let request = SamplerRequest::new("arm")
            .with(ConstraintKind::Position, 1)
            .with(ConstraintKind::Orientation, 2);
        assert_eq!(request.total(), 3);
        assert_eq!(request.count(ConstraintKind::Joint), 0);
        assert!(!request.is_empty());
        assert!(SamplerRequest::new("arm").is_empty());
    }
}
