// SPDX-FileCopyrightText: 2026 samplerkit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types and well-known names shared across samplerkit crates.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Parameter key holding the space-separated list of allocator plugins.
pub const CONSTRAINT_SAMPLERS_PARAM: &str = "constraint_samplers";

/// Plugin category that exports the allocator interface.
pub const SAMPLER_PLUGIN_CATEGORY: &str = "samplerkit_core";

/// Base class name every allocator plugin must declare.
pub const SAMPLER_ALLOCATOR_BASE_CLASS: &str = "constraint_samplers::ConstraintSamplerAllocator";

/// Kinds of constraint a sampling request may carry.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ConstraintKind {
    Joint,
    Position,
    Orientation,
    Visibility,
}

/// A request for a constraint sampler.
///
/// Only the shape of the constraint set matters to allocators: which planning
/// group it targets and how many constraints of each kind it holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SamplerRequest {
    /// Planning group the sampler will produce states for.
    pub group_name: String,
    pub joint_constraints: usize,
    pub position_constraints: usize,
    pub orientation_constraints: usize,
    pub visibility_constraints: usize,
}

impl SamplerRequest {
    /// Create an empty request for the given planning group.
    pub fn new(group_name: impl Into<String>) -> Self {
        Self {
            group_name: group_name.into(),
            ..Self::default()
        }
    }

    /// Builder-style helper that sets the count for one constraint kind.
    pub fn with(mut self, kind: ConstraintKind, count: usize) -> Self {
        match kind {
            ConstraintKind::Joint => self.joint_constraints = count,
            ConstraintKind::Position => self.position_constraints = count,
            ConstraintKind::Orientation => self.orientation_constraints = count,
            ConstraintKind::Visibility => self.visibility_constraints = count,
        }
        self
    }

    /// Number of constraints of the given kind.
    pub fn count(&self, kind: ConstraintKind) -> usize {
        match kind {
            ConstraintKind::Joint => self.joint_constraints,
            ConstraintKind::Position => self.position_constraints,
            ConstraintKind::Orientation => self.orientation_constraints,
            ConstraintKind::Visibility => self.visibility_constraints,
        }
    }

    /// Total number of constraints across all kinds.
    pub fn total(&self) -> usize {
        self.joint_constraints
            + self.position_constraints
            + self.orientation_constraints
            + self.visibility_constraints
    }

    /// True when the request carries no constraints at all.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}
