// Copyright © 2024 Folioforge. All rights reserved.
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Command-line interface for Folioforge
//!
//! This module defines the argument structure of the `folioforge` binary and
//! the helpers it uses to resolve and display the site configuration.
//!
//! # Examples
//!
//! ```
//! use folioforge::cli;
//!
//! let matches = cli::build().get_matches_from(vec![
//!     "folioforge",
//!     "resolve",
//!     "--theme",
//!     "themes/dark.json",
//! ]);
//!
//! let resolve = matches.subcommand_matches("resolve").unwrap();
//! assert!(resolve.get_one::<std::path::PathBuf>("theme").is_some());
//! ```

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use log::{debug, LevelFilter};

use crate::core::config::{
    ResolverBuilder, SiteConfig, DEFAULT_SETTINGS_FILE, DEFAULT_THEME_PATH,
};
use crate::core::error::Result;
use crate::core::traits::{join_names, Named};

/// The current version of Folioforge, as defined in `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Builds and configures the Folioforge command-line interface.
pub fn build() -> Command {
    Command::new("folioforge")
        .author("Folioforge Contributors")
        .about("Resolves the build configuration of a static blog and portfolio site.")
        .version(VERSION)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Increase log verbosity (-v, -vv, -vvv)")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(
            Command::new("resolve")
                .about("Resolve the site configuration and print a summary")
                .arg(
                    Arg::new("theme")
                        .short('t')
                        .long("theme")
                        .help(format!(
                            "Theme document [default: {DEFAULT_THEME_PATH}]"
                        ))
                        .value_parser(value_parser!(PathBuf)),
                )
                .arg(
                    Arg::new("site")
                        .short('s')
                        .long("site")
                        .help("Absolute base URL of the site")
                        .value_parser(value_parser!(String)),
                )
                .arg(
                    Arg::new("settings")
                        .short('c')
                        .long("settings")
                        .help(format!(
                            "TOML settings file with `site` and `theme` keys \
                             [default: ./{DEFAULT_SETTINGS_FILE} if present]"
                        ))
                        .value_parser(value_parser!(PathBuf)),
                ),
        )
}

/// Maps the `-v` count to a log level. Without flags only warnings are shown.
pub fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Resolves the configuration from the arguments of the `resolve` subcommand.
///
/// Without `--settings`, `folioforge.toml` in the working directory is read
/// when it exists.
pub fn resolve(matches: &ArgMatches) -> Result<SiteConfig> {
    let mut builder = ResolverBuilder::new();

    match matches.get_one::<PathBuf>("settings") {
        Some(settings) => builder = builder.with_file(settings),
        None if Path::new(DEFAULT_SETTINGS_FILE).is_file() => {
            debug!("Using settings from ./{}", DEFAULT_SETTINGS_FILE);
            builder = builder.with_file(DEFAULT_SETTINGS_FILE);
        }
        None => {}
    }
    if let Some(theme) = matches.get_one::<PathBuf>("theme") {
        builder = builder.with_theme_path(theme);
    }
    if let Some(site) = matches.get_one::<String>("site") {
        builder = builder.with_site(site.as_str());
    }

    debug!("Resolving with {:?}", builder);
    builder.build()
}

/// Renders a human-readable summary of a resolved configuration.
pub fn render_summary(config: &SiteConfig) -> String {
    let markdown = &config.markdown;
    let mut out = String::new();

    let _ = writeln!(out, "site: {}", config.site);
    let _ = writeln!(out, "integrations: {}", join_names(&config.integrations));
    let _ = writeln!(
        out,
        "theme: {}",
        config.theme().name().unwrap_or("<unnamed>")
    );
    let _ = writeln!(
        out,
        "syntax highlight: {}",
        markdown.syntax_highlight_enabled
    );
    let _ = writeln!(
        out,
        "extend default plugins: {}",
        markdown.extend_default_plugins
    );
    let _ = writeln!(out, "post-processors:");
    for (index, processor) in markdown.post_processors.iter().enumerate() {
        let _ = writeln!(out, "  {}. {}", index + 1, processor.handle.name());
    }

    out
}
