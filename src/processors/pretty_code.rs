//! # Pretty-Code Options
//!
//! Options handed to the code-highlighting post-processor: the theme, two
//! visitor callbacks that tag highlighted lines and character ranges with a
//! marker class, and a token override map that is intentionally left empty.
//!
//! ## Example
//!
//! ```rust
//! use folioforge::hast::{Element, Properties};
//! use folioforge::processors::pretty_code::on_visit_highlighted_chars;
//!
//! let mut node = Element::new("mark")
//!     .with_properties(Properties::with_classes(["foo"]));
//! on_visit_highlighted_chars(Some(&mut node));
//! assert_eq!(
//!     node.class_name().unwrap(),
//!     ["foo".to_string(), "highlighted-chars".to_string()]
//! );
//! ```

use std::collections::BTreeMap;

use crate::hast::{Element, Properties};
use crate::theme::Theme;

/// Marker class appended to highlighted source lines.
pub const HIGHLIGHT_LINE_CLASS: &str = "highlight-line";

/// Marker class appended to highlighted character ranges.
pub const HIGHLIGHTED_CHARS_CLASS: &str = "highlighted-chars";

/// A node visitor invoked by the highlighter. The node may be absent.
pub type VisitCallback = fn(Option<&mut Element>);

/// Tags a highlighted line with [`HIGHLIGHT_LINE_CLASS`].
///
/// Does nothing unless the node, its property record and its class list all
/// exist.
pub fn on_visit_highlighted_line(node: Option<&mut Element>) {
    if let Some(classes) = node
        .and_then(|n| n.properties.as_mut())
        .and_then(|p| p.class_name.as_mut())
    {
        classes.push(HIGHLIGHT_LINE_CLASS.to_string());
    }
}

/// Tags a highlighted character range with [`HIGHLIGHTED_CHARS_CLASS`].
///
/// Appends to an existing class list, otherwise starts a new one holding only
/// the marker. Repeated calls append again; nothing is deduplicated.
pub fn on_visit_highlighted_chars(node: Option<&mut Element>) {
    let Some(node) = node else {
        return;
    };
    let properties = node.properties.get_or_insert_with(Properties::default);
    match properties.class_name.as_mut() {
        Some(classes) => classes.push(HIGHLIGHTED_CHARS_CLASS.to_string()),
        None => {
            properties.class_name =
                Some(vec![HIGHLIGHTED_CHARS_CLASS.to_string()]);
        }
    }
}

/// Options for the code-highlighting post-processor.
#[derive(Debug, Clone)]
pub struct PrettyCodeOptions {
    /// Theme shared with the fallback highlighter.
    pub theme: Theme,
    /// Called for every highlighted line.
    pub on_visit_highlighted_line: VisitCallback,
    /// Called for every highlighted character range.
    pub on_visit_highlighted_chars: VisitCallback,
    /// Token-level colour overrides. Always empty.
    pub tokens_map: BTreeMap<String, String>,
}

impl PrettyCodeOptions {
    /// Builds the options around `theme` with the marker-class visitors.
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            on_visit_highlighted_line,
            on_visit_highlighted_chars,
            tokens_map: BTreeMap::new(),
        }
    }

    /// Invokes the highlighted-line visitor.
    pub fn visit_highlighted_line(&self, node: Option<&mut Element>) {
        (self.on_visit_highlighted_line)(node);
    }

    /// Invokes the highlighted-chars visitor.
    pub fn visit_highlighted_chars(&self, node: Option<&mut Element>) {
        (self.on_visit_highlighted_chars)(node);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn classes(node: &Element) -> Vec<String> {
        node.class_name().map(<[String]>::to_vec).unwrap_or_default()
    }

    #[test]
    fn test_highlighted_line_appends_to_empty_list() {
        let mut node = Element::new("span")
            .with_properties(Properties::with_classes(Vec::<String>::new()));
        on_visit_highlighted_line(Some(&mut node));
        assert_eq!(classes(&node), ["highlight-line"]);
    }

    #[test]
    fn test_highlighted_line_without_properties_is_noop() {
        let mut node = Element::new("span");
        let before = node.clone();
        on_visit_highlighted_line(Some(&mut node));
        assert_eq!(node, before);
    }

    #[test]
    fn test_highlighted_line_without_class_list_is_noop() {
        let mut node = Element::new("span").with_properties(Properties::default());
        on_visit_highlighted_line(Some(&mut node));
        assert!(node.class_name().is_none());
    }

    #[test]
    fn test_highlighted_line_absent_node() {
        on_visit_highlighted_line(None);
        on_visit_highlighted_chars(None);
    }

    #[test]
    fn test_highlighted_chars_appends_to_existing_list() {
        let mut node =
            Element::new("mark").with_properties(Properties::with_classes(["foo"]));
        on_visit_highlighted_chars(Some(&mut node));
        assert_eq!(classes(&node), ["foo", "highlighted-chars"]);
    }

    #[test]
    fn test_highlighted_chars_initialises_missing_list() {
        let mut node = Element::new("mark").with_properties(Properties::default());
        on_visit_highlighted_chars(Some(&mut node));
        assert_eq!(classes(&node), ["highlighted-chars"]);

        let mut bare = Element::new("mark");
        on_visit_highlighted_chars(Some(&mut bare));
        assert_eq!(classes(&bare), ["highlighted-chars"]);
    }

    #[test]
    fn test_highlighted_chars_is_not_idempotent() {
        let mut node =
            Element::new("mark").with_properties(Properties::with_classes(["foo"]));
        on_visit_highlighted_chars(Some(&mut node));
        on_visit_highlighted_chars(Some(&mut node));
        assert_eq!(
            classes(&node),
            ["foo", "highlighted-chars", "highlighted-chars"]
        );
    }

    #[test]
    fn test_options_dispatch_through_callbacks() {
        let options = PrettyCodeOptions::new(Theme::from_value(json!({})));
        assert!(options.tokens_map.is_empty());

        let mut line = Element::new("span")
            .with_properties(Properties::with_classes(["line"]));
        options.visit_highlighted_line(Some(&mut line));
        assert_eq!(classes(&line), ["line", "highlight-line"]);

        let mut chars = Element::new("mark");
        options.visit_highlighted_chars(Some(&mut chars));
        assert_eq!(classes(&chars), ["highlighted-chars"]);
    }
}
