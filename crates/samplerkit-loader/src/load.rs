// SPDX-FileCopyrightText: 2026 samplerkit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The loading pass: parameter → tokens → resolver → registry.
//!
//! Failures never leave this module as errors. A resolver that cannot be
//! built ends the pass; a plugin that cannot be built is skipped.

use samplerkit_core::{
    CONSTRAINT_SAMPLERS_PARAM, ParameterSource, ResolverProvider, SAMPLER_ALLOCATOR_BASE_CLASS,
    SAMPLER_PLUGIN_CATEGORY, SamplerRegistry, SamplerResolver,
};
use tracing::{debug, error, info};

use crate::tokenizer::split_plugin_names;

/// Load every allocator plugin named by the `constraint_samplers` parameter
/// into `registry`.
///
/// Does nothing when the parameter is absent. The resolver is only requested
/// from `provider` once the parameter is known to be present.
pub fn load_constraint_samplers<P, G, R>(params: &P, registry: &mut G, provider: &R)
where
    P: ParameterSource + ?Sized,
    G: SamplerRegistry + ?Sized,
    R: ResolverProvider + ?Sized,
{
    let Some(value) = params.get_parameter(CONSTRAINT_SAMPLERS_PARAM) else {
        debug!(
            parameter = CONSTRAINT_SAMPLERS_PARAM,
            "parameter not set, no constraint sampler plugins to load"
        );
        return;
    };

    let resolver = match provider.resolver(SAMPLER_PLUGIN_CATEGORY, SAMPLER_ALLOCATOR_BASE_CLASS) {
        Ok(resolver) => resolver,
        Err(e) => {
            error!(
                category = SAMPLER_PLUGIN_CATEGORY,
                base_class = SAMPLER_ALLOCATOR_BASE_CLASS,
                error = %e,
                "failed to create constraint sampler plugin loader: {e}"
            );
            return;
        }
    };

    for name in split_plugin_names(value) {
        match resolver.create_instance(name) {
            Ok(allocator) => {
                registry.register(allocator);
                info!(plugin = name, "loaded constraint sampling plugin {name}");
            }
            Err(e) => {
                error!(
                    plugin = name,
                    error = %e,
                    "failed to load constraint sampling plugin '{name}': {e}"
                );
            }
        }
    }
}
