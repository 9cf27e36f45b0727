// SPDX-FileCopyrightText: 2026 samplerkit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! samplerkit - load and inspect constraint sampler allocator plugins.
//!
//! This is the binary entry point.

mod load;
mod plugins;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use samplerkit_config::{ConfigError, SamplerKitConfig};

/// samplerkit - load and inspect constraint sampler allocator plugins.
#[derive(Parser, Debug)]
#[command(name = "samplerkit", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the standard locations.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the loading pass and print the registered allocators.
    Load {
        /// Space-separated plugin names, overriding `constraint_samplers`.
        #[arg(long)]
        samplers: Option<String>,
    },
    /// List known plugins, optionally filtered by a search query.
    Plugins {
        /// Case-insensitive match against name and description.
        query: Option<String>,
        /// Disable colored output.
        #[arg(long)]
        plain: bool,
    },
    /// Validate configuration and report problems.
    CheckConfig,
}

fn main() {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(errors) => {
            samplerkit_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    match cli.command {
        Commands::Load { samplers } => {
            init_tracing(&config.log.level);
            load::run_load(config, samplers);
        }
        Commands::Plugins { query, plain } => {
            init_tracing(&config.log.level);
            if plain {
                colored::control::set_override(false);
            }
            plugins::run_plugins(&config, query.as_deref().unwrap_or(""));
        }
        Commands::CheckConfig => {
            println!("{} configuration is valid", "ok:".green());
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<SamplerKitConfig, Vec<ConfigError>> {
    match path {
        Some(path) => samplerkit_config::load_and_validate_path(path),
        None => samplerkit_config::load_and_validate(),
    }
}

/// Install the stderr subscriber. `RUST_LOG` takes precedence over the
/// configured level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("samplerkit={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
