//! # Markup Node Model
//!
//! A minimal view of a rendered-markup element, as handed to the highlighting
//! callbacks by the external code highlighter. Only the parts the callbacks
//! touch are modelled: the tag name and an optional property record holding
//! an optional class list.

use serde::Deserialize;

/// Property record of an element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Properties {
    /// Class list of the element; `None` when the attribute is absent.
    #[serde(rename = "className", default)]
    pub class_name: Option<Vec<String>>,
}

impl Properties {
    /// Creates a property record with the given classes.
    pub fn with_classes<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            class_name: Some(classes.into_iter().map(Into::into).collect()),
        }
    }
}

/// An element node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Element {
    /// Tag name, e.g. `"span"`.
    #[serde(rename = "tagName")]
    pub tag_name: String,
    /// Property record; `None` when the node carries no properties at all.
    #[serde(default)]
    pub properties: Option<Properties>,
}

impl Element {
    /// Creates an element with no properties.
    pub fn new<S: Into<String>>(tag_name: S) -> Self {
        Self {
            tag_name: tag_name.into(),
            properties: None,
        }
    }

    /// Sets the property record.
    pub fn with_properties(mut self, properties: Properties) -> Self {
        self.properties = Some(properties);
        self
    }

    /// Returns the class list, if both the property record and the list exist.
    pub fn class_name(&self) -> Option<&[String]> {
        self.properties
            .as_ref()
            .and_then(|p| p.class_name.as_deref())
    }
}
