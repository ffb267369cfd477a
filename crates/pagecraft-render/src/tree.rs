//! Presentational tree built from widget snapshots.

use crate::renderer::RenderContext;
use pagecraft_core::{Alignment, Widget};

/// A node of the preview tree.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderNode {
    Element(Element),
    Text(String),
}

/// An element with attributes, inline style declarations and children.
///
/// Attribute and style order is insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: &'static str,
    pub attributes: Vec<(&'static str, String)>,
    pub style: Vec<(&'static str, String)>,
    pub children: Vec<RenderNode>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attributes: Vec::new(),
            style: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attributes.push((name, value.into()));
        self
    }

    /// Add a CSS declaration. `property` is the kebab-case CSS name.
    pub fn style(mut self, property: &'static str, value: impl Into<String>) -> Self {
        self.style.push((property, value.into()));
        self
    }

    pub fn child(mut self, node: impl Into<RenderNode>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Value of an inline style declaration.
    pub fn style_value(&self, property: &str) -> Option<&str> {
        self.style
            .iter()
            .find(|(name, _)| *name == property)
            .map(|(_, value)| value.as_str())
    }

    /// Value of an attribute.
    pub fn attr_value(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, value)| value.as_str())
    }

    /// Elements can hold no children (`<img>`).
    pub fn is_void(&self) -> bool {
        matches!(self.tag, "img" | "br" | "hr" | "input")
    }
}

impl From<Element> for RenderNode {
    fn from(element: Element) -> Self {
        RenderNode::Element(element)
    }
}

impl From<String> for RenderNode {
    fn from(text: String) -> Self {
        RenderNode::Text(text)
    }
}

impl From<&str> for RenderNode {
    fn from(text: &str) -> Self {
        RenderNode::Text(text.to_string())
    }
}

fn justify_content(alignment: Alignment) -> &'static str {
    match alignment {
        Alignment::Left => "flex-start",
        Alignment::Center => "center",
        Alignment::Right => "flex-end",
    }
}

/// Element for the widget itself, without the alignment wrapper.
fn content_node(widget: &Widget) -> Element {
    match widget {
        Widget::Text(w) => {
            let s = &w.props.styling;
            Element::new("p")
                .style("font-size", &s.font_size)
                .style("color", &s.color)
                .style("font-weight", &s.font_weight)
                .style("text-align", &s.text_align)
                .style("margin", &s.margin)
                .style("padding", &s.padding)
                .child(w.props.text.as_str())
        }
        Widget::Button(w) => {
            let s = &w.props.styling;
            Element::new("button")
                .style("background-color", &s.background_color)
                .style("color", &s.color)
                .style("border-radius", &s.border_radius)
                .style("padding", &s.padding)
                .style("font-size", &s.font_size)
                .style("font-weight", &s.font_weight)
                .style("border", &s.border)
                .style("cursor", "pointer")
                .child(w.props.text.as_str())
        }
        Widget::Image(w) => {
            let s = &w.props.styling;
            let img = Element::new("img")
                .attr("src", &w.props.src)
                .attr("alt", &w.props.alt)
                .style("width", "100%")
                .style("height", "100%")
                .style("object-fit", &s.object_fit);
            Element::new("div")
                .style("width", &s.width)
                .style("height", &s.height)
                .style("border-radius", &s.border_radius)
                .style("overflow", "hidden")
                .style("position", "relative")
                .child(img)
        }
    }
}

/// Lower one widget to its preview tree.
pub fn widget_node(widget: &Widget) -> Element {
    Element::new("div")
        .attr("data-widget-id", widget.id().as_str())
        .attr("data-widget-type", widget.widget_type().as_str())
        .style("display", "flex")
        .style("width", "100%")
        .style("justify-content", justify_content(widget.container().alignment))
        .style("padding", "8px 0")
        .child(Element::new("div").child(content_node(widget)))
}

/// Lower a whole document, or its placeholder when empty.
pub fn document_node(ctx: &RenderContext) -> Element {
    let root = Element::new("div").attr("class", "pagecraft-preview");
    let widgets = ctx.document.widgets();
    if widgets.is_empty() {
        return root.child(
            Element::new("p")
                .attr("class", "pagecraft-placeholder")
                .child(ctx.placeholder.as_str()),
        );
    }

    let selected = ctx.document.selected_id().filter(|_| ctx.highlight_selection);
    widgets.iter().fold(root, |root, widget| {
        let mut node = widget_node(widget);
        if selected == Some(widget.id()) {
            node = node.style("outline", format!("2px solid {}", ctx.selection_color));
        }
        root.child(node)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagecraft_core::{Document, FieldPath, WidgetType};

    fn element(node: &RenderNode) -> &Element {
        match node {
            RenderNode::Element(e) => e,
            RenderNode::Text(t) => panic!("expected element, got text {t:?}"),
        }
    }

    fn content(wrapper: &Element) -> &Element {
        element(&element(&wrapper.children[0]).children[0])
    }

    #[test]
    fn test_alignment_wrapper() {
        let widget = Widget::create_default(WidgetType::Button, "button-1");
        let node = widget_node(&widget);
        assert_eq!(node.style_value("justify-content"), Some("center"));
        assert_eq!(node.attr_value("data-widget-id"), Some("button-1"));

        let left = widget
            .write(&FieldPath::parse("container.alignment").unwrap(), "left")
            .unwrap();
        assert_eq!(widget_node(&left).style_value("justify-content"), Some("flex-start"));
        let right = widget
            .write(&FieldPath::parse("container.alignment").unwrap(), "right")
            .unwrap();
        assert_eq!(widget_node(&right).style_value("justify-content"), Some("flex-end"));
    }

    #[test]
    fn test_text_node() {
        let widget = Widget::create_default(WidgetType::Text, "t");
        let node = widget_node(&widget);
        let p = content(&node);
        assert_eq!(p.tag, "p");
        assert_eq!(p.style_value("font-size"), Some("16px"));
        assert_eq!(p.style_value("text-align"), Some("left"));
        assert_eq!(p.children, vec![RenderNode::Text("New text component".into())]);
    }

    #[test]
    fn test_button_node() {
        let widget = Widget::create_default(WidgetType::Button, "b");
        let node = widget_node(&widget);
        let button = content(&node);
        assert_eq!(button.tag, "button");
        assert_eq!(button.style_value("background-color"), Some("#3b82f6"));
        assert_eq!(button.style_value("border"), Some("none"));
        assert_eq!(button.style_value("cursor"), Some("pointer"));
    }

    #[test]
    fn test_image_node() {
        let widget = Widget::create_default(WidgetType::Image, "i");
        let node = widget_node(&widget);
        let frame = content(&node);
        assert_eq!(frame.tag, "div");
        assert_eq!(frame.style_value("overflow"), Some("hidden"));
        assert_eq!(frame.style_value("height"), Some("auto"));

        let img = element(&frame.children[0]);
        assert_eq!(img.tag, "img");
        assert!(img.is_void());
        assert_eq!(img.attr_value("alt"), Some("Placeholder image"));
        assert_eq!(img.style_value("object-fit"), Some("cover"));
    }

    #[test]
    fn test_empty_document_placeholder() {
        let document = Document::new();
        let ctx = RenderContext::new(&document).with_placeholder("Nothing here");
        let root = document_node(&ctx);
        assert_eq!(root.children.len(), 1);
        let p = element(&root.children[0]);
        assert_eq!(p.children, vec![RenderNode::Text("Nothing here".into())]);
    }

    #[test]
    fn test_selection_highlight() {
        let mut document = Document::new();
        let first = document.add(WidgetType::Text);
        document.add(WidgetType::Image);
        document.select(&first).unwrap();

        let plain = document_node(&RenderContext::new(&document));
        assert!(element(&plain.children[0]).style_value("outline").is_none());

        let ctx = RenderContext::new(&document).with_selection_highlight(true);
        let root = document_node(&ctx);
        assert_eq!(root.children.len(), 2);
        assert_eq!(
            element(&root.children[0]).style_value("outline"),
            Some("2px solid #3b82f6")
        );
        assert!(element(&root.children[1]).style_value("outline").is_none());
    }
}
