//! # Framework Integrations
//!
//! Integrations are opaque capability tokens forwarded to the build
//! framework. Their order is kept as declared; the framework applies them in
//! sequence.

use crate::core::traits::Named;

/// A UI or build integration enabled for the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Integration {
    /// Utility-first CSS.
    Tailwind,
    /// React component islands.
    React,
    /// MDX content pages.
    Mdx,
    /// Sitemap generation from the site URL.
    Sitemap,
}

/// Integrations enabled for the site, in application order.
pub const DEFAULT_INTEGRATIONS: [Integration; 4] = [
    Integration::Tailwind,
    Integration::React,
    Integration::Mdx,
    Integration::Sitemap,
];

impl Named for Integration {
    fn name(&self) -> &'static str {
        match self {
            Integration::Tailwind => "@astrojs/tailwind",
            Integration::React => "@astrojs/react",
            Integration::Mdx => "@astrojs/mdx",
            Integration::Sitemap => "@astrojs/sitemap",
        }
    }
}
