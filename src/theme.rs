// Copyright © 2024 Folioforge. All rights reserved.
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! # Highlighting Theme
//!
//! The theme is a token-colour document owned by the external syntax
//! highlighter. Folioforge never looks inside it: the document is parsed as
//! JSON, checked to be an object, and then shared by reference between the
//! pretty-code processor and the fallback highlighter.

use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use log::debug;
use serde_json::Value as JsonValue;

use crate::core::error::{FolioError, Result};

/// An immutable, cheaply clonable theme document.
///
/// Clones share the same underlying document.
#[derive(Clone, PartialEq)]
pub struct Theme {
    document: Arc<JsonValue>,
}

impl Theme {
    /// Loads a theme document from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::ResourceLoad`] if the file cannot be read, is not
    /// valid JSON, or is not a JSON object.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading theme document from {}", path.display());

        let raw = fs::read_to_string(path).map_err(|e| {
            FolioError::resource_load(
                "theme document could not be read",
                path.to_path_buf(),
                Some(Box::new(e)),
            )
        })?;

        let document: JsonValue = serde_json::from_str(&raw).map_err(|e| {
            FolioError::resource_load(
                "theme document is not valid JSON",
                path.to_path_buf(),
                Some(Box::new(e)),
            )
        })?;

        if !document.is_object() {
            return Err(FolioError::resource_load(
                "theme document must be a JSON object",
                path.to_path_buf(),
                None,
            ));
        }

        Ok(Self::from_value(document))
    }

    /// Wraps an already parsed document.
    pub fn from_value(document: JsonValue) -> Self {
        Self {
            document: Arc::new(document),
        }
    }

    /// Returns the raw document.
    pub fn as_value(&self) -> &JsonValue {
        &self.document
    }

    /// Returns the theme's `name` field, if the document has one.
    pub fn name(&self) -> Option<&str> {
        self.document.get("name").and_then(JsonValue::as_str)
    }

    /// Returns `true` if both handles point at the same loaded document.
    pub fn shares_document_with(&self, other: &Theme) -> bool {
        Arc::ptr_eq(&self.document, &other.document)
    }
}

impl fmt::Debug for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Theme")
            .field("name", &self.name().unwrap_or("<unnamed>"))
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_load_valid_theme() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("dark-theme.json");
        fs::write(&path, r##"{"name":"dark","colors":{"editor.background":"#0d1117"}}"##)
            .unwrap();

        let theme = Theme::load(&path).unwrap();
        assert_eq!(theme.name(), Some("dark"));
        assert_eq!(
            theme.as_value()["colors"]["editor.background"],
            json!("#0d1117")
        );
    }

    #[test]
    fn test_missing_theme_is_resource_load_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = Theme::load(temp_dir.path().join("absent.json")).unwrap_err();
        assert!(err.is_resource_load());
    }

    #[test]
    fn test_malformed_theme_is_resource_load_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        fs::write(&path, "{ \"name\": ").unwrap();
        assert!(Theme::load(&path).unwrap_err().is_resource_load());

        fs::write(&path, "[1, 2, 3]").unwrap();
        assert!(Theme::load(&path).unwrap_err().is_resource_load());
    }

    #[test]
    fn test_clones_share_document() {
        let theme = Theme::from_value(json!({}));
        let other = Theme::from_value(json!({}));
        assert!(theme.shares_document_with(&theme.clone()));
        assert!(!theme.shares_document_with(&other));
        assert_eq!(theme, other);
    }

    #[test]
    fn test_debug_does_not_dump_document() {
        let theme = Theme::from_value(json!({"tokenColors": [1, 2, 3]}));
        let rendered = format!("{theme:?}");
        assert!(rendered.contains("<unnamed>"));
        assert!(!rendered.contains("tokenColors"));
    }
}
