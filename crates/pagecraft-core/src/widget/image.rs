//! Image widget payload.

use crate::path::record_node;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Style properties of an image frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageStyling {
    pub width: String,
    /// May be a keyword such as `auto`.
    pub height: String,
    pub border_radius: String,
    /// CSS `object-fit` keyword.
    pub object_fit: String,
}

impl Default for ImageStyling {
    fn default() -> Self {
        Self {
            width: "400px".to_string(),
            height: "auto".to_string(),
            border_radius: "8px".to_string(),
            object_fit: "cover".to_string(),
        }
    }
}

record_node!(ImageStyling {
    width: "width",
    height: "height",
    border_radius: "borderRadius",
    object_fit: "objectFit",
});

/// An image referenced by URL. Loading the asset is up to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageProps {
    /// Image source URL.
    pub src: String,
    /// Alternative text.
    pub alt: String,
    pub styling: Arc<ImageStyling>,
}

impl Default for ImageProps {
    fn default() -> Self {
        Self {
            src: "https://via.placeholder.com/400".to_string(),
            alt: "Placeholder image".to_string(),
            styling: Arc::default(),
        }
    }
}

record_node!(ImageProps {
    src: "src",
    alt: "alt",
    styling: "styling",
});
