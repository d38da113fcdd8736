// SPDX-FileCopyrightText: 2026 Opendoor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Opendoor - USSD property management service.
//!
//! This is the binary entry point for the Open Door Property service.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use opendoor_config::{ConfigError, OpendoorConfig};

mod config;
mod serve;
mod shutdown;

/// Opendoor - USSD property management service.
#[derive(Parser, Debug)]
#[command(name = "opendoor", version, about, long_about = None)]
struct Cli {
    /// Path to a configuration file (defaults to the standard search path).
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the USSD gateway server.
    Serve,
    /// Print the effective configuration.
    Config,
}

fn load_config(path: Option<&Path>) -> Result<OpendoorConfig, Vec<ConfigError>> {
    match path {
        Some(path) => opendoor_config::load_and_validate_path(path),
        None => opendoor_config::load_and_validate(),
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(errors) => {
            opendoor_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Some(Commands::Serve) => serve::run_serve(config).await,
        Some(Commands::Config) => config::run_config(&config),
        None => {
            println!("opendoor: use --help for available commands");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
