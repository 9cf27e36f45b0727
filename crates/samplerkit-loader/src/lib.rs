// SPDX-FileCopyrightText: 2026 samplerkit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Loads constraint sampler allocator plugins into a sampler manager.
//!
//! The `constraint_samplers` parameter holds a space-separated list of plugin
//! names. Each name is resolved through a plugin class loader and the
//! resulting allocator is registered. Failures are reported through
//! `tracing` only; loading never returns an error.
//!
//! # Usage
//!
//! ```no_run
//! use std::collections::HashMap;
//! use samplerkit_loader::ConstraintSamplerManagerLoader;
//!
//! let mut params = HashMap::new();
//! params.insert(
//!     "constraint_samplers".to_string(),
//!     "joint_constraint_sampler union_constraint_sampler".to_string(),
//! );
//! let loader = ConstraintSamplerManagerLoader::new(&params, None);
//! println!("{:?}", loader.manager());
//! ```

pub mod load;
pub mod manager_loader;
pub mod tokenizer;

pub use load::load_constraint_samplers;
pub use manager_loader::ConstraintSamplerManagerLoader;
pub use tokenizer::split_plugin_names;
