//! Widget definitions for the page builder.

mod button;
mod image;
mod text;

pub use button::{ButtonProps, ButtonStyling};
pub use image::{ImageProps, ImageStyling};
pub use text::{TextProps, TextStyling};

use crate::path::{record_node, FieldPath, Node, PathError};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

/// Widget model errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("Unknown widget type: {0}")]
    UnknownWidgetType(String),
    #[error("Unknown alignment: {0}")]
    UnknownAlignment(String),
}

/// Opaque widget identifier, unique within a document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WidgetId(String);

impl WidgetId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh identifier of the form `<type>-<uuid>`.
    pub fn generate(kind: WidgetType) -> Self {
        Self(format!("{}-{}", kind.as_str(), Uuid::new_v4()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WidgetId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for WidgetId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// The closed set of widget variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetType {
    Text,
    Button,
    Image,
}

impl WidgetType {
    /// Tag used in serialized widgets and generated ids.
    pub fn as_str(&self) -> &'static str {
        match self {
            WidgetType::Text => "text",
            WidgetType::Button => "button",
            WidgetType::Image => "image",
        }
    }

    /// Get display name for UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            WidgetType::Text => "Text",
            WidgetType::Button => "Button",
            WidgetType::Image => "Image",
        }
    }

    /// Get all widget types.
    pub fn all() -> &'static [WidgetType] {
        &[WidgetType::Text, WidgetType::Button, WidgetType::Image]
    }
}

impl FromStr for WidgetType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(WidgetType::Text),
            "button" => Ok(WidgetType::Button),
            "image" => Ok(WidgetType::Image),
            other => Err(ModelError::UnknownWidgetType(other.to_string())),
        }
    }
}

impl fmt::Display for WidgetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Horizontal placement of a widget inside its container row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    #[default]
    Center,
    Right,
}

impl Alignment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        }
    }

    /// Get display name for UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            Alignment::Left => "Left",
            Alignment::Center => "Center",
            Alignment::Right => "Right",
        }
    }

    /// Get all alignments.
    pub fn all() -> &'static [Alignment] {
        &[Alignment::Left, Alignment::Center, Alignment::Right]
    }
}

impl FromStr for Alignment {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Alignment::Left),
            "center" => Ok(Alignment::Center),
            "right" => Ok(Alignment::Right),
            other => Err(ModelError::UnknownAlignment(other.to_string())),
        }
    }
}

impl Node for Alignment {
    fn read_at(&self, path: &FieldPath, depth: usize) -> Option<Cow<'_, str>> {
        (depth == path.len()).then(|| Cow::Borrowed(self.as_str()))
    }

    fn write_at(&self, path: &FieldPath, depth: usize, value: &str) -> Result<Self, PathError> {
        if depth != path.len() {
            return Err(PathError::through_leaf(path, depth));
        }
        value.parse().map_err(|_| PathError::InvalidValue {
            path: path.to_string(),
            value: value.to_string(),
        })
    }

    fn collect_leaves(&self, prefix: &FieldPath, out: &mut Vec<FieldPath>) {
        out.push(prefix.clone());
    }
}

/// Layout settings shared by every widget variant.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Container {
    pub alignment: Alignment,
}

record_node!(Container { alignment: "alignment" });

/// Fields common to every variant, with the variant payload in `props`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetBody<P> {
    pub(crate) id: WidgetId,
    pub container: Arc<Container>,
    pub props: Arc<P>,
}

impl<P: Default> WidgetBody<P> {
    fn with_defaults(id: WidgetId) -> Self {
        Self {
            id,
            container: Arc::new(Container::default()),
            props: Arc::new(P::default()),
        }
    }
}

impl<P> WidgetBody<P> {
    pub fn id(&self) -> &WidgetId {
        &self.id
    }

    /// Check whether both bodies are the same snapshot (shared records).
    pub fn ptr_eq(&self, other: &Self) -> bool {
        self.id == other.id
            && Arc::ptr_eq(&self.container, &other.container)
            && Arc::ptr_eq(&self.props, &other.props)
    }
}

impl<P: Node> Node for WidgetBody<P> {
    fn read_at(&self, path: &FieldPath, depth: usize) -> Option<Cow<'_, str>> {
        match path.segment(depth)? {
            "id" => (depth + 1 == path.len()).then(|| Cow::Borrowed(self.id.as_str())),
            "container" => self.container.read_at(path, depth + 1),
            "props" => self.props.read_at(path, depth + 1),
            _ => None,
        }
    }

    fn write_at(&self, path: &FieldPath, depth: usize, value: &str) -> Result<Self, PathError> {
        match path.segment(depth) {
            Some("id") => Err(PathError::ReadOnly(path.to_string())),
            Some("container") => Ok(Self {
                id: self.id.clone(),
                container: self.container.write_at(path, depth + 1, value)?,
                props: Arc::clone(&self.props),
            }),
            Some("props") => Ok(Self {
                id: self.id.clone(),
                container: Arc::clone(&self.container),
                props: self.props.write_at(path, depth + 1, value)?,
            }),
            Some(_) => Err(PathError::unknown(path, depth)),
            None => Err(PathError::NotALeaf(path.to_string())),
        }
    }

    fn collect_leaves(&self, prefix: &FieldPath, out: &mut Vec<FieldPath>) {
        self.container.collect_leaves(&prefix.child("container"), out);
        self.props.collect_leaves(&prefix.child("props"), out);
    }
}

pub type TextWidget = WidgetBody<TextProps>;
pub type ButtonWidget = WidgetBody<ButtonProps>;
pub type ImageWidget = WidgetBody<ImageProps>;

/// A placeable element of the page. Cloning is cheap: records are shared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Widget {
    Text(TextWidget),
    Button(ButtonWidget),
    Image(ImageWidget),
}

impl Widget {
    /// Create a fully defaulted widget of the given type.
    pub fn create_default(kind: WidgetType, id: impl Into<WidgetId>) -> Self {
        let id = id.into();
        match kind {
            WidgetType::Text => Widget::Text(WidgetBody::with_defaults(id)),
            WidgetType::Button => Widget::Button(WidgetBody::with_defaults(id)),
            WidgetType::Image => Widget::Image(WidgetBody::with_defaults(id)),
        }
    }

    /// Create a default widget from a type tag such as `"button"`.
    pub fn create_default_tagged(tag: &str, id: impl Into<WidgetId>) -> Result<Self, ModelError> {
        Ok(Self::create_default(tag.parse()?, id))
    }

    pub fn id(&self) -> &WidgetId {
        match self {
            Widget::Text(w) => w.id(),
            Widget::Button(w) => w.id(),
            Widget::Image(w) => w.id(),
        }
    }

    pub fn widget_type(&self) -> WidgetType {
        match self {
            Widget::Text(_) => WidgetType::Text,
            Widget::Button(_) => WidgetType::Button,
            Widget::Image(_) => WidgetType::Image,
        }
    }

    pub fn container(&self) -> &Container {
        match self {
            Widget::Text(w) => &w.container,
            Widget::Button(w) => &w.container,
            Widget::Image(w) => &w.container,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Widget::Text(_))
    }

    pub fn is_button(&self) -> bool {
        matches!(self, Widget::Button(_))
    }

    pub fn is_image(&self) -> bool {
        matches!(self, Widget::Image(_))
    }

    pub fn as_text(&self) -> Option<&TextWidget> {
        match self {
            Widget::Text(w) => Some(w),
            _ => None,
        }
    }

    pub fn as_button(&self) -> Option<&ButtonWidget> {
        match self {
            Widget::Button(w) => Some(w),
            _ => None,
        }
    }

    pub fn as_image(&self) -> Option<&ImageWidget> {
        match self {
            Widget::Image(w) => Some(w),
            _ => None,
        }
    }

    /// Check whether `other` is the very same snapshot, compared by reference.
    ///
    /// Hosts use this to skip re-rendering when an edit produced no change.
    pub fn ptr_eq(&self, other: &Widget) -> bool {
        match (self, other) {
            (Widget::Text(a), Widget::Text(b)) => a.ptr_eq(b),
            (Widget::Button(a), Widget::Button(b)) => a.ptr_eq(b),
            (Widget::Image(a), Widget::Image(b)) => a.ptr_eq(b),
            _ => false,
        }
    }

    /// Read the leaf at `path`. Also answers `id` and `type`.
    pub fn read(&self, path: &FieldPath) -> Option<Cow<'_, str>> {
        if path.len() == 1 && path.segment(0) == Some("type") {
            return Some(Cow::Borrowed(self.widget_type().as_str()));
        }
        match self {
            Widget::Text(w) => w.read_at(path, 0),
            Widget::Button(w) => w.read_at(path, 0),
            Widget::Image(w) => w.read_at(path, 0),
        }
    }

    /// Return a new widget with the leaf at `path` replaced by `value`.
    ///
    /// The variant and id are preserved. A path that does not exist on this
    /// variant is a schema/model mismatch and is rejected.
    pub fn write(&self, path: &FieldPath, value: &str) -> Result<Widget, PathError> {
        if path.segment(0) == Some("type") {
            return Err(PathError::ReadOnly(path.to_string()));
        }
        let result = match self {
            Widget::Text(w) => w.write_at(path, 0, value).map(Widget::Text),
            Widget::Button(w) => w.write_at(path, 0, value).map(Widget::Button),
            Widget::Image(w) => w.write_at(path, 0, value).map(Widget::Image),
        };
        if let Err(e) = &result {
            log::error!("Rejected write to {} widget {}: {}", self.widget_type(), self.id(), e);
        }
        result
    }

    /// Paths of every editable leaf, in declaration order.
    pub fn leaf_paths(&self) -> Vec<FieldPath> {
        let mut out = Vec::new();
        let root = FieldPath::root();
        match self {
            Widget::Text(w) => w.collect_leaves(&root, &mut out),
            Widget::Button(w) => w.collect_leaves(&root, &mut out),
            Widget::Image(w) => w.collect_leaves(&root, &mut out),
        }
        out
    }

    /// Short label for list views.
    pub fn summary(&self) -> String {
        match self {
            Widget::Text(w) => {
                let text = &w.props.text;
                let head: String = text.chars().take(30).collect();
                let ellipsis = if text.chars().count() > 30 { "..." } else { "" };
                format!("Text: {head}{ellipsis}")
            }
            Widget::Button(w) => format!("Button: {}", w.props.text),
            Widget::Image(w) => {
                let alt = if w.props.alt.is_empty() {
                    "No alt text"
                } else {
                    w.props.alt.as_str()
                };
                format!("Image: {alt}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(s: &str) -> FieldPath {
        FieldPath::parse(s).unwrap()
    }

    #[test]
    fn test_create_default() {
        for &kind in WidgetType::all() {
            let widget = Widget::create_default(kind, "w-1");
            assert_eq!(widget.widget_type(), kind);
            assert_eq!(widget.id().as_str(), "w-1");
            assert_eq!(widget.container().alignment, Alignment::Center);
        }
    }

    #[test]
    fn test_discriminators() {
        let text = Widget::create_default(WidgetType::Text, "a");
        let button = Widget::create_default(WidgetType::Button, "b");
        let image = Widget::create_default(WidgetType::Image, "c");

        assert!(text.is_text() && !text.is_button() && !text.is_image());
        assert!(button.is_button() && button.as_button().is_some());
        assert!(image.is_image() && image.as_text().is_none());
    }

    #[test]
    fn test_unknown_tag_rejected() {
        assert_eq!(
            Widget::create_default_tagged("video", "v-1"),
            Err(ModelError::UnknownWidgetType("video".to_string()))
        );
        assert!(Widget::create_default_tagged("image", "i-1").unwrap().is_image());
    }

    #[test]
    fn test_generated_id_prefix() {
        let id = WidgetId::generate(WidgetType::Button);
        assert!(id.as_str().starts_with("button-"));
        assert_ne!(id, WidgetId::generate(WidgetType::Button));
    }

    #[test]
    fn test_read_id_and_type() {
        let widget = Widget::create_default(WidgetType::Image, "img-1");
        assert_eq!(widget.read(&path("id")).as_deref(), Some("img-1"));
        assert_eq!(widget.read(&path("type")).as_deref(), Some("image"));
        assert_eq!(widget.read(&path("props.styling.objectFit")).as_deref(), Some("cover"));
        assert_eq!(widget.read(&path("props.styling.fontSize")), None);
    }

    #[test]
    fn test_write_structural_sharing() {
        let w1 = Widget::create_default(WidgetType::Text, "text-1");
        let w2 = w1.write(&path("props.styling.color"), "#fff").unwrap();

        assert!(!w1.ptr_eq(&w2));
        assert_eq!(w1.read(&path("props.styling.color")).as_deref(), Some("#000000"));
        assert_eq!(w2.read(&path("props.styling.color")).as_deref(), Some("#fff"));

        let (a, b) = (w1.as_text().unwrap(), w2.as_text().unwrap());
        assert!(Arc::ptr_eq(&a.container, &b.container));
        assert!(!Arc::ptr_eq(&a.props, &b.props));
        assert!(!Arc::ptr_eq(&a.props.styling, &b.props.styling));
    }

    #[test]
    fn test_write_rejects_foreign_paths() {
        let button = Widget::create_default(WidgetType::Button, "b-1");
        assert!(matches!(
            button.write(&path("props.styling.objectFit"), "cover"),
            Err(PathError::UnknownSegment { .. })
        ));
        assert_eq!(
            button.write(&path("id"), "b-2"),
            Err(PathError::ReadOnly("id".to_string()))
        );
        assert_eq!(
            button.write(&path("type"), "image"),
            Err(PathError::ReadOnly("type".to_string()))
        );
        assert!(matches!(
            button.write(&path("container.alignment"), "middle"),
            Err(PathError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_leaf_paths_exclude_identity() {
        let widget = Widget::create_default(WidgetType::Button, "b-1");
        let leaves: Vec<String> = widget.leaf_paths().iter().map(ToString::to_string).collect();
        assert_eq!(leaves[0], "container.alignment");
        assert!(leaves.contains(&"props.styling.border".to_string()));
        assert!(!leaves.iter().any(|p| p == "id" || p == "type"));
    }

    #[test]
    fn test_summary() {
        let text = Widget::create_default(WidgetType::Text, "t");
        assert_eq!(text.summary(), "Text: New text component");

        let long = text
            .write(&path("props.text"), "abcdefghijklmnopqrstuvwxyz0123456789")
            .unwrap();
        assert_eq!(long.summary(), "Text: abcdefghijklmnopqrstuvwxyz0123...");

        let image = Widget::create_default(WidgetType::Image, "i");
        let no_alt = image.write(&path("props.alt"), "").unwrap();
        assert_eq!(no_alt.summary(), "Image: No alt text");
    }

    #[test]
    fn test_serde_tagged_union() {
        let widget = Widget::create_default(WidgetType::Button, "button-1");
        let json = serde_json::to_value(&widget).unwrap();

        assert_eq!(json["type"], "button");
        assert_eq!(json["id"], "button-1");
        assert_eq!(json["container"]["alignment"], "center");
        assert_eq!(json["props"]["styling"]["backgroundColor"], "#3b82f6");

        let back: Widget = serde_json::from_value(json).unwrap();
        assert_eq!(back, widget);
    }
}
