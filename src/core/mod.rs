/// The `config` module resolves the site configuration
pub mod config;

/// The `error` module provides error handling
pub mod error;

/// The `traits` module provides common traits
pub mod traits;
