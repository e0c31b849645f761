//! Options for the heading autolink post-processor.

use crate::hast::Properties;

/// Class put on every injected heading anchor.
pub const ANCHOR_CLASS: &str = "anchor";

/// Options for the autolink post-processor.
///
/// The processor reads the heading id assigned by the slug step, so it must
/// run after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutolinkOptions {
    /// Properties copied onto each injected anchor element.
    pub properties: Properties,
}

impl Default for AutolinkOptions {
    fn default() -> Self {
        Self {
            properties: Properties::with_classes([ANCHOR_CLASS]),
        }
    }
}
