// Copyright © 2024 Folioforge. All rights reserved.
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! # Folioforge Library
//!
//! Folioforge resolves the build configuration of a personal blog and
//! portfolio site: its base URL, the UI integrations it enables and the
//! markdown pipeline that post-processes rendered pages. The configuration
//! is assembled once at startup from fixed values and one theme document,
//! then handed to the site build as an immutable [`SiteConfig`].
//!
//! ```rust,no_run
//! use folioforge::SiteConfig;
//!
//! let config = SiteConfig::resolve().unwrap();
//! assert!(!config.markdown.syntax_highlight_enabled);
//! ```

#![doc = include_str!("../README.md")]
#![crate_name = "folioforge"]
#![crate_type = "lib"]

/// Module containing core utilities, such as configuration and error handling.
pub mod core;

/// Provides command-line interface utilities.
pub mod cli;

/// Minimal markup node model used by the highlighting callbacks.
pub mod hast;

/// Framework integrations forwarded to the build.
pub mod integrations;

/// Markdown post-processor configuration.
pub mod processors;

/// Highlighting theme loading.
pub mod theme;

pub use crate::core::config::{ResolverBuilder, SiteConfig};
pub use crate::core::error::{FolioError, Result};
