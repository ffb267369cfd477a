//! Button widget payload.

use crate::path::record_node;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Style properties of a button.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonStyling {
    pub background_color: String,
    pub color: String,
    pub border_radius: String,
    pub padding: String,
    pub font_size: String,
    pub font_weight: String,
    /// Full CSS border shorthand, e.g. `1px solid #000` or `none`.
    pub border: String,
}

impl Default for ButtonStyling {
    fn default() -> Self {
        Self {
            background_color: "#3b82f6".to_string(),
            color: "#ffffff".to_string(),
            border_radius: "8px".to_string(),
            padding: "12px".to_string(),
            font_size: "16px".to_string(),
            font_weight: "600".to_string(),
            border: "none".to_string(),
        }
    }
}

record_node!(ButtonStyling {
    background_color: "backgroundColor",
    color: "color",
    border_radius: "borderRadius",
    padding: "padding",
    font_size: "fontSize",
    font_weight: "fontWeight",
    border: "border",
});

/// A clickable button with a text label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ButtonProps {
    /// Button label.
    pub text: String,
    pub styling: Arc<ButtonStyling>,
}

impl Default for ButtonProps {
    fn default() -> Self {
        Self {
            text: "Click me".to_string(),
            styling: Arc::default(),
        }
    }
}

record_node!(ButtonProps {
    text: "text",
    styling: "styling",
});
