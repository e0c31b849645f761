//! # Error Handling for Folioforge
//!
//! This module defines the error type returned while resolving the site
//! configuration. The `thiserror` crate is used to keep the variants and
//! their messages next to each other.

use std::path::PathBuf;
use thiserror::Error;

/// A unified result type for the Folioforge library.
pub type Result<T> = std::result::Result<T, FolioError>;

/// The main error type for Folioforge.
#[derive(Error, Debug)]
pub enum FolioError {
    /// A static resource (the highlighting theme) is missing or cannot be parsed.
    ///
    /// This is fatal: the resolver never falls back to a default theme.
    #[error("Failed to load resource `{path:?}`: {message}.")]
    ResourceLoad {
        /// Description of what went wrong.
        message: String,
        /// Path of the resource that failed to load.
        path: PathBuf,
        /// Underlying read or parse error, if any.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Error related to configuration overrides or the settings file.
    #[error("Configuration error: {message}.")]
    Config {
        /// Detailed description of the configuration error.
        message: String,
        /// Optional path of the settings file that caused the error.
        path: Option<PathBuf>,
    },

    /// The post-processor sequence breaks an ordering constraint.
    #[error("Pipeline error: {0}")]
    Pipeline(String),
}

impl FolioError {
    /// Creates a `ResourceLoad` error for the resource at `path`.
    ///
    /// # Parameters
    /// - `message`: A description of the failure.
    /// - `path`: The resource that could not be loaded.
    /// - `source`: An optional source error providing additional context.
    pub fn resource_load<S: Into<String>>(
        message: S,
        path: PathBuf,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        FolioError::ResourceLoad {
            message: message.into(),
            path,
            source,
        }
    }

    /// Creates a `Config` error with a specific message.
    ///
    /// # Parameters
    /// - `message`: A description of the configuration error.
    /// - `path`: Optional path of the settings file causing the error.
    pub fn config_error<S: Into<String>>(
        message: S,
        path: Option<PathBuf>,
    ) -> Self {
        FolioError::Config {
            message: message.into(),
            path,
        }
    }

    /// Creates a `Pipeline` error with a custom message.
    pub fn pipeline_error<S: Into<String>>(message: S) -> Self {
        FolioError::Pipeline(message.into())
    }

    /// Returns `true` when the error came from a missing or malformed resource.
    pub fn is_resource_load(&self) -> bool {
        matches!(self, FolioError::ResourceLoad { .. })
    }
}
