// Copyright © 2024 Folioforge. All rights reserved.
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! # Folioforge CLI
//!
//! This is the main entry point for the Folioforge command-line interface.
//! It initializes the logger, resolves the site configuration and prints a
//! summary of it.

use anyhow::{bail, Context};
use clap::ArgMatches;
use folioforge::cli;
use log::info;

/// Initializes `env_logger`, honouring `RUST_LOG` over the `-v` count.
fn init_logger(verbose: u8) {
    let mut builder = env_logger::Builder::new();
    let _ = builder.filter_level(cli::log_level(verbose));
    let _ = builder.parse_default_env();
    builder.init();
}

/// Runs the selected subcommand.
///
/// # Errors
///
/// Returns an error if the theme document or the settings file cannot be
/// loaded, or if an override is invalid.
fn run(matches: &ArgMatches) -> Result<(), anyhow::Error> {
    match matches.subcommand() {
        Some(("resolve", sub_matches)) => {
            info!("Resolving site configuration...");
            let config = cli::resolve(sub_matches)
                .context("Failed to resolve site configuration")?;
            print!("{}", cli::render_summary(&config));
            Ok(())
        }
        Some((name, _)) => bail!("Unknown command: {name}"),
        None => bail!("No command provided. Use --help for more information."),
    }
}

/// The main entry point for the Folioforge CLI.
fn main() {
    let matches = cli::build().get_matches();
    init_logger(matches.get_count("verbose"));

    if let Err(err) = run(&matches) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
