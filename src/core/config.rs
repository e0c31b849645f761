//! # Configuration Module
//!
//! Resolves the immutable [`SiteConfig`] consumed by the site build at
//! startup. Resolution reads exactly one resource, the highlighting theme,
//! and otherwise assembles fixed values: the site URL, the integration list
//! and the markdown pipeline.
//!
//! The theme path and the site URL can be overridden, either programmatically
//! or through an optional `folioforge.toml` settings file. Explicit builder
//! calls win over the settings file, which wins over the built-in defaults.
//! The markdown pipeline itself is not configurable.
//!
//! ## Example
//!
//! ```rust,no_run
//! use folioforge::core::config::ResolverBuilder;
//!
//! let config = ResolverBuilder::new()
//!     .with_file("folioforge.toml")
//!     .with_site("https://example.org/")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.site.as_str(), "https://example.org/");
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{debug, info, warn};
use serde::Deserialize;
use toml::Value as TomlValue;
use url::Url;

use crate::core::error::{FolioError, Result};
use crate::core::traits::{join_names, Validate};
use crate::integrations::{Integration, DEFAULT_INTEGRATIONS};
use crate::processors::MarkdownPipelineOptions;
use crate::theme::Theme;

/// Base URL of the published site.
pub const DEFAULT_SITE: &str = "https://rajumodi27.github.io/";

/// Theme document path, relative to the working directory.
pub const DEFAULT_THEME_PATH: &str = "dark-theme.json";

/// Conventional name of the optional settings file.
pub const DEFAULT_SETTINGS_FILE: &str = "folioforge.toml";

/// The resolved site build configuration.
///
/// Built once per process by [`SiteConfig::resolve`] or [`ResolverBuilder`]
/// and only read afterwards.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Absolute base URL, used for sitemap and canonical link generation.
    pub site: Url,
    /// Enabled integrations, in application order.
    pub integrations: Vec<Integration>,
    /// Markdown pipeline options.
    pub markdown: MarkdownPipelineOptions,
}

impl SiteConfig {
    /// Resolves the configuration from the built-in defaults.
    ///
    /// # Errors
    ///
    /// Fails with [`FolioError::ResourceLoad`] if the theme document at
    /// [`DEFAULT_THEME_PATH`] is missing or malformed.
    pub fn resolve() -> Result<Self> {
        ResolverBuilder::new().build()
    }

    /// Resolves the configuration and wraps it for sharing.
    pub fn resolve_arc() -> Result<Arc<Self>> {
        Self::resolve().map(Arc::new)
    }

    /// Returns the highlighting theme.
    pub fn theme(&self) -> &Theme {
        &self.markdown.shiki_config.theme
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        validate_site(&self.site, None)?;
        self.markdown.validate()
    }
}

/// Contents of the settings file.
#[derive(Debug, Default, Deserialize)]
struct Settings {
    site: Option<String>,
    theme: Option<PathBuf>,
    #[serde(flatten)]
    unknown: BTreeMap<String, TomlValue>,
}

/// Builds a [`SiteConfig`], applying optional overrides.
#[derive(Debug, Default)]
pub struct ResolverBuilder {
    settings_file: Option<PathBuf>,
    theme_path: Option<PathBuf>,
    site: Option<String>,
}

impl ResolverBuilder {
    /// Initialises a builder that resolves the defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads overrides from a TOML settings file.
    ///
    /// A relative `theme` path in the file is resolved against the file's
    /// directory.
    pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.settings_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Overrides the theme document path.
    pub fn with_theme_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.theme_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Overrides the site base URL.
    pub fn with_site<S: Into<String>>(mut self, site: S) -> Self {
        self.site = Some(site.into());
        self
    }

    /// Resolves the configuration.
    ///
    /// # Errors
    ///
    /// - [`FolioError::Config`] if the settings file cannot be read or parsed,
    ///   or the site URL is not an absolute `http(s)` URL.
    /// - [`FolioError::ResourceLoad`] if the theme document is missing or
    ///   malformed.
    pub fn build(self) -> Result<SiteConfig> {
        let settings = match &self.settings_file {
            Some(path) => load_settings(path)?,
            None => Settings::default(),
        };

        let (site, site_origin) = match (self.site, settings.site) {
            (Some(site), _) => (site, None),
            (None, Some(site)) => (site, self.settings_file.clone()),
            (None, None) => (DEFAULT_SITE.to_string(), None),
        };
        let site = parse_site(&site, site_origin)?;

        let theme_path = match (self.theme_path, settings.theme) {
            (Some(path), _) => path,
            (None, Some(path)) => relative_to_settings(
                path,
                self.settings_file.as_deref(),
            ),
            (None, None) => PathBuf::from(DEFAULT_THEME_PATH),
        };

        let theme = Theme::load(&theme_path)?;
        let config = SiteConfig {
            site,
            integrations: DEFAULT_INTEGRATIONS.to_vec(),
            markdown: MarkdownPipelineOptions::new(theme),
        };
        config.validate()?;

        info!(
            "Resolved site configuration for {} (integrations: {}; post-processors: {})",
            config.site,
            join_names(&config.integrations),
            join_names(&config.markdown.handles())
        );
        Ok(config)
    }
}

// Internal helper functions

fn load_settings(path: &Path) -> Result<Settings> {
    debug!("Reading settings from {}", path.display());

    let content = fs::read_to_string(path).map_err(|e| {
        FolioError::config_error(
            format!("Failed to read settings file: {}", e),
            Some(path.to_path_buf()),
        )
    })?;

    let settings: Settings = toml::from_str(&content).map_err(|e| {
        FolioError::config_error(
            format!("Failed to parse settings file: {}", e),
            Some(path.to_path_buf()),
        )
    })?;

    for key in settings.unknown.keys() {
        warn!(
            "Ignoring unknown settings key `{}` in {}",
            key,
            path.display()
        );
    }

    Ok(settings)
}

fn relative_to_settings(theme: PathBuf, settings_file: Option<&Path>) -> PathBuf {
    match settings_file.and_then(Path::parent) {
        Some(dir) if theme.is_relative() => dir.join(theme),
        _ => theme,
    }
}

fn parse_site(raw: &str, origin: Option<PathBuf>) -> Result<Url> {
    let url = Url::parse(raw).map_err(|e| {
        FolioError::config_error(
            format!("Invalid site URL '{}': {}", raw, e),
            origin.clone(),
        )
    })?;
    validate_site(&url, origin)?;
    Ok(url)
}

fn validate_site(url: &Url, origin: Option<PathBuf>) -> Result<()> {
    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(FolioError::config_error(
            format!("Site URL must be an absolute http(s) URL: {}", url),
            origin,
        ));
    }
    Ok(())
}
