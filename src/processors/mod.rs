//! # Markdown Post-Processors Module
//!
//! The markdown pipeline hands rendered markup to an ordered list of external
//! post-processors. This module describes that list: which processors run,
//! in which order, and with which options. The processors themselves live in
//! the build framework; Folioforge only configures them.
//!
//! ## Available Processors
//!
//! - [`ProcessorHandle::PrettyCode`]: code highlighting, configured by [`pretty_code`]
//! - [`ProcessorHandle::Slug`]: heading id assignment
//! - [`ProcessorHandle::AutolinkHeadings`]: heading anchors, configured by [`autolink`]
//!
//! ## Usage
//!
//! ```rust
//! use folioforge::processors::{MarkdownPipelineOptions, ProcessorHandle};
//! use folioforge::theme::Theme;
//!
//! let markdown = MarkdownPipelineOptions::new(Theme::from_value(serde_json::json!({})));
//! assert_eq!(
//!     markdown.handles(),
//!     [ProcessorHandle::PrettyCode, ProcessorHandle::Slug, ProcessorHandle::AutolinkHeadings]
//! );
//! ```

use std::collections::HashSet;

use crate::core::error::{FolioError, Result};
use crate::core::traits::{Named, Validate};
use crate::theme::Theme;

/// Options for the heading autolink processor.
pub mod autolink;
/// Options and visitor callbacks for the code highlighting processor.
pub mod pretty_code;

// Re-export commonly used types
pub use autolink::AutolinkOptions;
pub use pretty_code::PrettyCodeOptions;

/// An external rendered-markup post-processor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProcessorHandle {
    /// Annotates code blocks with highlighting markup.
    PrettyCode,
    /// Assigns slug ids to headings.
    Slug,
    /// Injects an anchor link into each heading that has an id.
    AutolinkHeadings,
}

impl Named for ProcessorHandle {
    fn name(&self) -> &'static str {
        match self {
            ProcessorHandle::PrettyCode => "rehype-pretty-code",
            ProcessorHandle::Slug => "rehype-slug",
            ProcessorHandle::AutolinkHeadings => "rehype-autolink-headings",
        }
    }
}

/// Options attached to a post-processor.
#[derive(Debug, Clone)]
pub enum ProcessorOptions {
    /// Code highlighting options.
    PrettyCode(PrettyCodeOptions),
    /// Heading anchor options.
    AutolinkHeadings(AutolinkOptions),
    /// The processor runs with its own defaults.
    None,
}

/// A post-processor together with its options.
#[derive(Debug, Clone)]
pub struct PostProcessor {
    /// Which processor runs.
    pub handle: ProcessorHandle,
    /// What it is configured with.
    pub options: ProcessorOptions,
}

impl PostProcessor {
    /// Creates a post-processor entry.
    pub fn new(handle: ProcessorHandle, options: ProcessorOptions) -> Self {
        Self { handle, options }
    }
}

/// Configuration of the fallback highlighter built into the framework.
#[derive(Debug, Clone)]
pub struct HighlighterConfig {
    /// Same theme document as the pretty-code processor.
    pub theme: Theme,
}

/// Markdown pipeline options.
#[derive(Debug, Clone)]
pub struct MarkdownPipelineOptions {
    /// Whether the framework's built-in highlighter runs. Always `false`:
    /// highlighting is delegated to the pretty-code processor.
    pub syntax_highlight_enabled: bool,
    /// Whether the framework's default plugins stay enabled. Always `true`.
    pub extend_default_plugins: bool,
    /// Post-processors, in application order.
    pub post_processors: Vec<PostProcessor>,
    /// Fallback highlighter configuration.
    pub shiki_config: HighlighterConfig,
}

impl MarkdownPipelineOptions {
    /// Assembles the pipeline around `theme`.
    ///
    /// The processors always run as pretty-code, slug, autolink. The
    /// autolink step looks up the id written by the slug step.
    pub fn new(theme: Theme) -> Self {
        let post_processors = vec![
            PostProcessor::new(
                ProcessorHandle::PrettyCode,
                ProcessorOptions::PrettyCode(PrettyCodeOptions::new(
                    theme.clone(),
                )),
            ),
            PostProcessor::new(ProcessorHandle::Slug, ProcessorOptions::None),
            PostProcessor::new(
                ProcessorHandle::AutolinkHeadings,
                ProcessorOptions::AutolinkHeadings(AutolinkOptions::default()),
            ),
        ];

        Self {
            syntax_highlight_enabled: false,
            extend_default_plugins: true,
            post_processors,
            shiki_config: HighlighterConfig { theme },
        }
    }

    /// Returns the processor handles in application order.
    pub fn handles(&self) -> Vec<ProcessorHandle> {
        self.post_processors.iter().map(|p| p.handle).collect()
    }

    /// Returns the pretty-code options, if that processor is configured.
    pub fn pretty_code_options(&self) -> Option<&PrettyCodeOptions> {
        self.post_processors.iter().find_map(|p| match &p.options {
            ProcessorOptions::PrettyCode(options) => Some(options),
            _ => None,
        })
    }

    /// Returns the autolink options, if that processor is configured.
    pub fn autolink_options(&self) -> Option<&AutolinkOptions> {
        self.post_processors.iter().find_map(|p| match &p.options {
            ProcessorOptions::AutolinkHeadings(options) => Some(options),
            _ => None,
        })
    }

    fn position(&self, handle: ProcessorHandle) -> Option<usize> {
        self.post_processors.iter().position(|p| p.handle == handle)
    }
}

impl Validate for MarkdownPipelineOptions {
    /// Checks that every processor appears once and that slug ids are
    /// assigned before headings are autolinked.
    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for processor in &self.post_processors {
            if !seen.insert(processor.handle) {
                return Err(FolioError::pipeline_error(format!(
                    "processor `{}` is configured more than once",
                    processor.handle.name()
                )));
            }
        }

        if let Some(autolink) = self.position(ProcessorHandle::AutolinkHeadings)
        {
            match self.position(ProcessorHandle::Slug) {
                Some(slug) if slug < autolink => {}
                _ => {
                    return Err(FolioError::pipeline_error(format!(
                        "`{}` must run after `{}`",
                        ProcessorHandle::AutolinkHeadings.name(),
                        ProcessorHandle::Slug.name()
                    )));
                }
            }
        }

        Ok(())
    }
}
