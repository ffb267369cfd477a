//! Renderer trait abstraction.

use pagecraft_core::Document;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Output error: {0}")]
    Output(#[from] std::fmt::Error),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Default text shown when the document has no widgets.
pub const EMPTY_PLACEHOLDER: &str =
    "No components yet. Add components from the sidebar to get started.";

/// Context for rendering one document snapshot.
pub struct RenderContext<'a> {
    /// The document to render. Never mutated.
    pub document: &'a Document,
    /// Text shown for an empty document.
    pub placeholder: String,
    /// Outline the selected widget.
    pub highlight_selection: bool,
    /// Outline color for the selected widget.
    pub selection_color: String,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context.
    pub fn new(document: &'a Document) -> Self {
        Self {
            document,
            placeholder: EMPTY_PLACEHOLDER.to_string(),
            highlight_selection: false,
            selection_color: "#3b82f6".to_string(), // Blue
        }
    }

    /// Set the empty-document placeholder text.
    pub fn with_placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = text.into();
        self
    }

    /// Enable or disable the selection outline.
    pub fn with_selection_highlight(mut self, enabled: bool) -> Self {
        self.highlight_selection = enabled;
        self
    }

    /// Set the selection outline color.
    pub fn with_selection_color(mut self, color: impl Into<String>) -> Self {
        self.selection_color = color.into();
        self
    }
}

/// Trait for preview backends.
pub trait Renderer {
    /// Render one document snapshot.
    fn build_scene(&mut self, ctx: &RenderContext) -> RenderResult<()>;
}
