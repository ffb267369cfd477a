//! Generic property panel. One loop over the field views replaces the
//! per-widget editor forms.

use egui::Ui;
use pagecraft_core::{Editor, FieldEdit, FieldInput, FieldValue, FieldView, InputKind, Widget};

use crate::inputs::{color_input, select_input, style_input, text_area, text_input, StyleEdit};
use crate::layout::{panel_frame, section_label, separator};
use crate::sizing;

/// Draw one control per field and return the edit made this frame, if any.
pub fn field_panel(ui: &mut Ui, views: &[FieldView<'_>]) -> Option<FieldEdit> {
    let mut edit = None;
    for view in views {
        let schema = view.schema;
        let input = match (&schema.kind, &view.value) {
            (InputKind::Text { multiline: true }, FieldValue::Text(text)) => {
                text_area(ui, schema.label, text).map(FieldInput::Text)
            }
            (InputKind::Text { .. }, FieldValue::Text(text)) => {
                text_input(ui, schema.label, text).map(FieldInput::Text)
            }
            (InputKind::Number { units, .. }, FieldValue::Style(value)) => {
                style_input(ui, schema.label, schema.name, value, units).map(|e| match e {
                    StyleEdit::Magnitude(raw) => FieldInput::Magnitude(raw),
                    StyleEdit::Unit(unit) => FieldInput::Unit(unit),
                })
            }
            (InputKind::Number { .. }, FieldValue::Text(raw)) => {
                text_input(ui, schema.label, raw).map(FieldInput::Magnitude)
            }
            (InputKind::Color, FieldValue::Color(color)) => {
                color_input(ui, schema.label, color).map(FieldInput::Color)
            }
            (InputKind::Enum { options }, FieldValue::Choice(choice)) => {
                select_input(ui, schema.label, schema.name, choice, options).map(FieldInput::Choice)
            }
            (kind, value) => {
                log::error!("Field {} ({}) has no control for {:?}", schema.name, kind.name(), value);
                None
            }
        };
        if let Some(input) = input {
            edit = Some(FieldEdit::new(schema.name, input));
        }
        ui.add_space(sizing::FIELD_GAP);
    }
    edit
}

/// Property editor for one widget. Returns the updated widget after an edit.
///
/// Ids inside the panel are scoped by widget id, so focus buffers never leak
/// between widgets.
pub fn widget_editor(ui: &mut Ui, editor: &Editor<'_>, widget: &Widget) -> Option<Widget> {
    ui.push_id(widget.id().as_str(), |ui| {
        panel_frame()
            .show(ui, |ui| {
                section_label(ui, &format!("Edit {}", widget.widget_type().display_name()));
                separator(ui);

                let views = editor.view(widget);
                let edit = field_panel(ui, &views)?;
                match editor.apply(widget, &edit) {
                    Ok(updated) if updated.ptr_eq(widget) => None,
                    Ok(updated) => Some(updated),
                    Err(e) => {
                        log::error!("Failed to apply {} edit: {e}", edit.field);
                        None
                    }
                }
            })
            .inner
    })
    .inner
}
