//! Document host: the ordered widget list and the selection pointer.

use crate::editor::{Editor, EditorError, FieldEdit};
use crate::widget::{Widget, WidgetId, WidgetType};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Document errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DocumentError {
    #[error("Widget id {0} is already in the document")]
    DuplicateId(WidgetId),
    #[error("No widget with id {0}")]
    NotFound(WidgetId),
    #[error("Widget {id} cannot change type from {from} to {to}")]
    TypeChanged {
        id: WidgetId,
        from: WidgetType,
        to: WidgetType,
    },
    #[error(transparent)]
    Editor(#[from] EditorError),
}

/// An ordered list of widgets plus an optional selection.
///
/// Widget ids are unique, and the selection always names a widget in the list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "DocumentRepr")]
pub struct Document {
    widgets: Vec<Widget>,
    selected_id: Option<WidgetId>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DocumentRepr {
    #[serde(default)]
    widgets: Vec<Widget>,
    #[serde(default)]
    selected_id: Option<WidgetId>,
}

impl TryFrom<DocumentRepr> for Document {
    type Error = DocumentError;

    fn try_from(repr: DocumentRepr) -> Result<Self, Self::Error> {
        let mut document = Document::new();
        for widget in repr.widgets {
            document.insert(widget)?;
        }
        if let Some(id) = repr.selected_id {
            document.select(&id)?;
        }
        Ok(document)
    }
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a default widget of `kind` with a freshly generated id.
    pub fn add(&mut self, kind: WidgetType) -> WidgetId {
        let id = WidgetId::generate(kind);
        log::debug!("Adding {kind} widget {id}");
        self.widgets.push(Widget::create_default(kind, id.clone()));
        id
    }

    /// Append a prebuilt widget.
    pub fn insert(&mut self, widget: Widget) -> Result<(), DocumentError> {
        if self.position(widget.id()).is_some() {
            log::warn!("Refusing duplicate widget id {}", widget.id());
            return Err(DocumentError::DuplicateId(widget.id().clone()));
        }
        self.widgets.push(widget);
        Ok(())
    }

    /// Widgets in display order.
    pub fn widgets(&self) -> &[Widget] {
        &self.widgets
    }

    pub fn get(&self, id: &WidgetId) -> Option<&Widget> {
        self.widgets.iter().find(|w| w.id() == id)
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    fn position(&self, id: &WidgetId) -> Option<usize> {
        self.widgets.iter().position(|w| w.id() == id)
    }

    /// Substitute the widget with the same id, keeping its position.
    ///
    /// Returns `false` when `widget` is the snapshot already stored.
    pub fn replace(&mut self, widget: Widget) -> Result<bool, DocumentError> {
        let index = self.position(widget.id()).ok_or_else(|| {
            log::warn!("Cannot replace unknown widget {}", widget.id());
            DocumentError::NotFound(widget.id().clone())
        })?;
        let slot = &mut self.widgets[index];
        if slot.widget_type() != widget.widget_type() {
            log::warn!("Refusing to change the type of widget {}", widget.id());
            return Err(DocumentError::TypeChanged {
                id: widget.id().clone(),
                from: slot.widget_type(),
                to: widget.widget_type(),
            });
        }
        if slot.ptr_eq(&widget) {
            return Ok(false);
        }
        *slot = widget;
        Ok(true)
    }

    /// Remove a widget, clearing the selection if it pointed at it.
    pub fn remove(&mut self, id: &WidgetId) -> Option<Widget> {
        let index = self.position(id)?;
        if self.selected_id.as_ref() == Some(id) {
            self.selected_id = None;
        }
        log::debug!("Removing widget {id}");
        Some(self.widgets.remove(index))
    }

    pub fn select(&mut self, id: &WidgetId) -> Result<(), DocumentError> {
        if self.position(id).is_none() {
            log::warn!("Cannot select unknown widget {id}");
            return Err(DocumentError::NotFound(id.clone()));
        }
        self.selected_id = Some(id.clone());
        Ok(())
    }

    pub fn deselect(&mut self) {
        self.selected_id = None;
    }

    pub fn selected_id(&self) -> Option<&WidgetId> {
        self.selected_id.as_ref()
    }

    pub fn selected(&self) -> Option<&Widget> {
        self.selected_id.as_ref().and_then(|id| self.get(id))
    }

    /// Run one editor edit against a widget and store the result.
    ///
    /// Returns whether the stored widget changed.
    pub fn apply_edit(
        &mut self,
        editor: &Editor<'_>,
        id: &WidgetId,
        edit: &FieldEdit,
    ) -> Result<bool, DocumentError> {
        let widget = self
            .get(id)
            .ok_or_else(|| DocumentError::NotFound(id.clone()))?;
        let updated = editor.apply(widget, edit)?;
        self.replace(updated)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::FieldInput;
    use crate::path::FieldPath;

    fn sample() -> (Document, Vec<WidgetId>) {
        let mut doc = Document::new();
        let ids = vec![
            doc.add(WidgetType::Text),
            doc.add(WidgetType::Button),
            doc.add(WidgetType::Image),
        ];
        (doc, ids)
    }

    #[test]
    fn test_add_generates_unique_ids() {
        let (doc, ids) = sample();
        assert_eq!(doc.len(), 3);
        assert!(ids[0].as_str().starts_with("text-"));
        assert!(ids[1].as_str().starts_with("button-"));
        assert_ne!(ids[0], ids[1]);
        let order: Vec<WidgetType> = doc.widgets().iter().map(Widget::widget_type).collect();
        assert_eq!(order, [WidgetType::Text, WidgetType::Button, WidgetType::Image]);
    }

    #[test]
    fn test_remove_selected_clears_selection() {
        let (mut doc, ids) = sample();
        doc.select(&ids[1]).unwrap();
        assert_eq!(doc.selected().map(Widget::widget_type), Some(WidgetType::Button));

        let removed = doc.remove(&ids[1]).unwrap();
        assert_eq!(removed.id(), &ids[1]);
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.selected_id(), None);
    }

    #[test]
    fn test_remove_other_keeps_selection() {
        let (mut doc, ids) = sample();
        doc.select(&ids[0]).unwrap();
        doc.remove(&ids[2]).unwrap();
        assert_eq!(doc.selected_id(), Some(&ids[0]));
        assert!(doc.remove(&ids[2]).is_none());
    }

    #[test]
    fn test_select_unknown() {
        let (mut doc, _) = sample();
        let missing = WidgetId::new("text-missing");
        assert_eq!(doc.select(&missing), Err(DocumentError::NotFound(missing)));
        assert_eq!(doc.selected_id(), None);
    }

    #[test]
    fn test_insert_duplicate() {
        let mut doc = Document::new();
        doc.insert(Widget::create_default(WidgetType::Text, "w-1")).unwrap();
        let err = doc
            .insert(Widget::create_default(WidgetType::Image, "w-1"))
            .unwrap_err();
        assert_eq!(err, DocumentError::DuplicateId(WidgetId::new("w-1")));
        assert_eq!(doc.len(), 1);
    }

    #[test]
    fn test_replace_by_identity() {
        let mut doc = Document::new();
        doc.insert(Widget::create_default(WidgetType::Text, "a")).unwrap();
        doc.insert(Widget::create_default(WidgetType::Text, "b")).unwrap();

        let original = doc.get(&WidgetId::new("b")).unwrap().clone();
        assert!(!doc.replace(original.clone()).unwrap());

        let edited = original
            .write(&FieldPath::parse("props.text").unwrap(), "Hello")
            .unwrap();
        assert!(doc.replace(edited).unwrap());
        assert_eq!(doc.widgets()[1].summary(), "Text: Hello");
        assert_eq!(doc.widgets()[0].summary(), "Text: New text component");
    }

    #[test]
    fn test_replace_rejects_type_change() {
        let mut doc = Document::new();
        doc.insert(Widget::create_default(WidgetType::Text, "a")).unwrap();
        let err = doc
            .replace(Widget::create_default(WidgetType::Button, "a"))
            .unwrap_err();
        assert!(matches!(err, DocumentError::TypeChanged { .. }));
        assert!(doc.widgets()[0].is_text());
    }

    #[test]
    fn test_apply_edit() {
        let (mut doc, ids) = sample();
        let editor = Editor::builtin().unwrap();

        let edit = FieldEdit::new("fontSize", FieldInput::Magnitude("24".into()));
        assert!(doc.apply_edit(&editor, &ids[0], &edit).unwrap());
        assert!(!doc.apply_edit(&editor, &ids[0], &edit).unwrap());
        let text = doc.get(&ids[0]).unwrap().as_text().unwrap();
        assert_eq!(text.props.styling.font_size, "24px");

        let err = doc.apply_edit(&editor, &ids[2], &edit).unwrap_err();
        assert!(matches!(err, DocumentError::Editor(EditorError::UnknownField { .. })));
    }

    #[test]
    fn test_json_round_trip() {
        let (mut doc, ids) = sample();
        doc.select(&ids[2]).unwrap();
        let json = doc.to_json().unwrap();
        assert!(json.contains("selectedId"));

        let restored = Document::from_json(&json).unwrap();
        assert_eq!(restored.widgets(), doc.widgets());
        assert_eq!(restored.selected_id(), Some(&ids[2]));
    }

    #[test]
    fn test_json_rejects_dangling_selection() {
        let json = r#"{ "widgets": [], "selectedId": "text-1" }"#;
        assert!(Document::from_json(json).is_err());
        assert!(Document::from_json("{}").unwrap().is_empty());
    }
}
