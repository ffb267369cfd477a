//! HTML output for the preview tree.

use crate::renderer::{RenderContext, RenderResult, Renderer};
use crate::tree::{document_node, widget_node, Element, RenderNode};
use pagecraft_core::Widget;
use std::fmt::Write;

/// Escape text for use in HTML content and quoted attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Renders documents to an HTML fragment.
#[derive(Debug, Default)]
pub struct HtmlRenderer {
    output: String,
}

impl HtmlRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// HTML produced by the last [`Renderer::build_scene`] call.
    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn into_output(self) -> String {
        self.output
    }

    fn write_node(&mut self, node: &RenderNode) -> RenderResult<()> {
        match node {
            RenderNode::Text(text) => self.output.push_str(&escape_html(text)),
            RenderNode::Element(element) => self.write_element(element)?,
        }
        Ok(())
    }

    fn write_element(&mut self, element: &Element) -> RenderResult<()> {
        write!(self.output, "<{}", element.tag)?;
        for (name, value) in &element.attributes {
            write!(self.output, " {}=\"{}\"", name, escape_html(value))?;
        }
        if !element.style.is_empty() {
            let css = element
                .style
                .iter()
                .map(|(property, value)| format!("{property}: {value}"))
                .collect::<Vec<_>>()
                .join("; ");
            write!(self.output, " style=\"{}\"", escape_html(&css))?;
        }
        self.output.push('>');

        if element.is_void() {
            if !element.children.is_empty() {
                log::warn!("Dropping children of void element <{}>", element.tag);
            }
            return Ok(());
        }
        for child in &element.children {
            self.write_node(child)?;
        }
        write!(self.output, "</{}>", element.tag)?;
        Ok(())
    }
}

impl Renderer for HtmlRenderer {
    fn build_scene(&mut self, ctx: &RenderContext) -> RenderResult<()> {
        self.output.clear();
        let root = document_node(ctx);
        self.write_element(&root)?;
        log::debug!(
            "Rendered {} widgets to {} bytes of HTML",
            ctx.document.len(),
            self.output.len()
        );
        Ok(())
    }
}

/// Render a document snapshot to an HTML string.
pub fn render_to_string(ctx: &RenderContext) -> RenderResult<String> {
    let mut renderer = HtmlRenderer::new();
    renderer.build_scene(ctx)?;
    Ok(renderer.into_output())
}

/// Render a single widget, alignment wrapper included.
pub fn render_widget_to_string(widget: &Widget) -> RenderResult<String> {
    let mut renderer = HtmlRenderer::new();
    renderer.write_element(&widget_node(widget))?;
    Ok(renderer.into_output())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagecraft_core::{Document, Editor, FieldEdit, FieldInput, Widget, WidgetType};

    #[test]
    fn test_escape() {
        assert_eq!(escape_html("a < b & \"c\""), "a &lt; b &amp; &quot;c&quot;");
        assert_eq!(escape_html("it's"), "it&#39;s");
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_empty_document() {
        let document = Document::new();
        let html = render_to_string(&RenderContext::new(&document)).unwrap();
        assert_eq!(
            html,
            "<div class=\"pagecraft-preview\"><p class=\"pagecraft-placeholder\">\
             No components yet. Add components from the sidebar to get started.</p></div>"
        );
    }

    #[test]
    fn test_button_html() {
        let mut document = Document::new();
        document
            .insert(Widget::create_default(WidgetType::Button, "button-1"))
            .unwrap();
        let html = render_to_string(&RenderContext::new(&document)).unwrap();
        assert!(html.contains("data-widget-id=\"button-1\""));
        assert!(html.contains("justify-content: center"));
        assert!(html.contains("background-color: #3b82f6; color: #ffffff"));
        assert!(html.contains(">Click me</button>"));
    }

    #[test]
    fn test_single_widget() {
        let widget = Widget::create_default(WidgetType::Text, "text-1");
        let html = render_widget_to_string(&widget).unwrap();
        assert!(html.starts_with("<div data-widget-id=\"text-1\" data-widget-type=\"text\""));
        assert!(html.contains("<p style=\"font-size: 16px; color: #000000;"));
        assert!(html.ends_with("New text component</p></div></div>"));
    }

    #[test]
    fn test_image_is_void() {
        let mut document = Document::new();
        document
            .insert(Widget::create_default(WidgetType::Image, "img"))
            .unwrap();
        let html = render_to_string(&RenderContext::new(&document)).unwrap();
        assert!(html.contains("<img src=\"https://via.placeholder.com/400\" alt=\"Placeholder image\""));
        assert!(!html.contains("</img>"));
        assert!(html.contains("object-fit: cover"));
    }

    #[test]
    fn test_edited_text_is_escaped() {
        let mut document = Document::new();
        let id = document.add(WidgetType::Text);
        let edit = FieldEdit::new("text", FieldInput::Text("<b>Tom & Jerry</b>".into()));
        document.apply_edit(&Editor::builtin().unwrap(), &id, &edit).unwrap();

        let mut renderer = HtmlRenderer::new();
        renderer.build_scene(&RenderContext::new(&document)).unwrap();
        assert!(renderer.output().contains("&lt;b&gt;Tom &amp; Jerry&lt;/b&gt;"));
        assert!(!renderer.output().contains("<b>"));
    }

    #[test]
    fn test_renderer_reuse_clears_output() {
        let mut document = Document::new();
        let mut renderer = HtmlRenderer::new();
        document.add(WidgetType::Text);
        renderer.build_scene(&RenderContext::new(&document)).unwrap();
        let first = renderer.output().to_string();
        renderer.build_scene(&RenderContext::new(&document)).unwrap();
        assert_eq!(renderer.output(), first);
    }
}
