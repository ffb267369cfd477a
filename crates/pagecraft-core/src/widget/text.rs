//! Text widget payload.

use crate::path::record_node;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Style properties of a text block. Every value is a CSS-like string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyling {
    pub font_size: String,
    pub color: String,
    pub font_weight: String,
    pub text_align: String,
    pub margin: String,
    pub padding: String,
}

impl Default for TextStyling {
    fn default() -> Self {
        Self {
            font_size: "16px".to_string(),
            color: "#000000".to_string(),
            font_weight: "normal".to_string(),
            text_align: "left".to_string(),
            margin: "8px".to_string(),
            padding: "8px".to_string(),
        }
    }
}

record_node!(TextStyling {
    font_size: "fontSize",
    color: "color",
    font_weight: "fontWeight",
    text_align: "textAlign",
    margin: "margin",
    padding: "padding",
});

/// A paragraph of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextProps {
    /// The text content.
    pub text: String,
    pub styling: Arc<TextStyling>,
}

impl Default for TextProps {
    fn default() -> Self {
        Self {
            text: "New text component".to_string(),
            styling: Arc::default(),
        }
    }
}

record_node!(TextProps {
    text: "text",
    styling: "styling",
});
