//! PageCraft Render Library
//!
//! Preview pipeline for PageCraft documents. Widgets are lowered to a small
//! presentational tree, which a [`Renderer`] then turns into output. The
//! default implementation writes HTML.

mod html;
mod renderer;
pub mod tree;

pub use html::{escape_html, render_to_string, render_widget_to_string, HtmlRenderer};
pub use renderer::{RenderContext, RenderResult, Renderer, RendererError, EMPTY_PLACEHOLDER};
pub use tree::{document_node, widget_node, Element, RenderNode};
