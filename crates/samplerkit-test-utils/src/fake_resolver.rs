// SPDX-FileCopyrightText: 2026 samplerkit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fake resolver provider with call recording.
//!
//! Every resolver construction and every `create_instance` call is written to
//! a shared [`ResolverLog`], so tests can assert on call counts and order.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use samplerkit_core::{ConstraintSamplerAllocator, ResolverProvider, SamplerError, SamplerResolver};

use crate::mock_allocator::MockAllocator;

#[derive(Debug, Default)]
struct LogInner {
    scopes: Vec<(String, String)>,
    calls: Vec<String>,
}

/// Shared record of resolver activity.
#[derive(Debug, Clone, Default)]
pub struct ResolverLog {
    inner: Arc<Mutex<LogInner>>,
}

impl ResolverLog {
    fn lock(&self) -> MutexGuard<'_, LogInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Number of resolver construction attempts, including failed ones.
    pub fn constructions(&self) -> usize {
        self.lock().scopes.len()
    }

    /// The (category, base_class) pairs resolvers were requested for.
    pub fn scopes(&self) -> Vec<(String, String)> {
        self.lock().scopes.clone()
    }

    /// Plugin names passed to `create_instance`, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.lock().calls.clone()
    }
}

/// Provider handing out [`FakeResolver`]s.
#[derive(Debug, Clone, Default)]
pub struct FakeResolverProvider {
    log: ResolverLog,
    failing: HashSet<String>,
    fail_construction: bool,
}

impl FakeResolverProvider {
    /// A provider whose resolvers build a [`MockAllocator`] for any name.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `create_instance` fail for the given names.
    pub fn failing_on(mut self, names: &[&str]) -> Self {
        self.failing.extend(names.iter().map(|n| n.to_string()));
        self
    }

    /// Make resolver construction itself fail.
    pub fn failing_construction(mut self) -> Self {
        self.fail_construction = true;
        self
    }

    /// Handle to the activity log shared with all resolvers from this provider.
    pub fn log(&self) -> ResolverLog {
        self.log.clone()
    }
}

impl ResolverProvider for FakeResolverProvider {
    type Resolver = FakeResolver;

    fn resolver(&self, category: &str, base_class: &str) -> Result<FakeResolver, SamplerError> {
        self.log
            .lock()
            .scopes
            .push((category.to_string(), base_class.to_string()));

        if self.fail_construction {
            return Err(SamplerError::ResolverUnavailable {
                category: category.to_string(),
                base_class: base_class.to_string(),
                reason: "simulated missing plugin metadata".to_string(),
            });
        }

        Ok(FakeResolver {
            log: self.log.clone(),
            failing: self.failing.clone(),
        })
    }
}

/// Resolver that records calls and fails on configured names.
#[derive(Debug, Clone)]
pub struct FakeResolver {
    log: ResolverLog,
    failing: HashSet<String>,
}

impl SamplerResolver for FakeResolver {
    fn create_instance(
        &self,
        name: &str,
    ) -> Result<Box<dyn ConstraintSamplerAllocator>, SamplerError> {
        self.log.lock().calls.push(name.to_string());
        if self.failing.contains(name) {
            return Err(SamplerError::PluginNotFound {
                name: name.to_string(),
                declared: "<fake>".to_string(),
            });
        }
        Ok(Box::new(MockAllocator::new(name)))
    }
}
