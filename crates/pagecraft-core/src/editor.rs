//! Generic, schema-driven property editor.
//!
//! The editor holds no state of its own. [`Editor::view`] turns a widget into
//! one [`FieldView`] per schema entry, and [`Editor::apply`] turns a widget plus
//! one [`FieldEdit`] into a complete replacement widget.

use crate::path::{FieldPath, PathError};
use crate::schema::{FieldSchema, InputKind, SchemaError, SchemaRegistry};
use crate::style::{self, StyleValue};
use crate::widget::{Widget, WidgetType};
use thiserror::Error;

/// Editor errors. Rejected edits leave the widget untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditorError {
    #[error("{kind} widgets have no field named {field}")]
    UnknownField { kind: WidgetType, field: String },
    #[error("{kind} widgets have no field stored at {path}")]
    UnknownPath { kind: WidgetType, path: String },
    #[error("Cannot apply a {input} edit to {kind} field {field}")]
    InputMismatch {
        kind: WidgetType,
        field: &'static str,
        input: &'static str,
    },
    #[error("{unit:?} is not a valid unit for {kind} field {field}")]
    InvalidUnit {
        kind: WidgetType,
        field: &'static str,
        unit: String,
    },
    #[error("{value:?} is not an option of {kind} field {field}")]
    InvalidChoice {
        kind: WidgetType,
        field: &'static str,
        value: String,
    },
    #[error(transparent)]
    Path(#[from] PathError),
}

/// Current value of a field, decoded for display.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Style(StyleValue),
    Color(String),
    Choice(String),
}

/// One field of the editor panel: its schema entry and its current value.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldView<'a> {
    pub schema: &'a FieldSchema,
    pub value: FieldValue,
}

/// Raw input coming from a field's control.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldInput {
    /// New content of a text box.
    Text(String),
    /// New content of a magnitude box; the unit is kept.
    Magnitude(String),
    /// New unit from the unit selector; the magnitude is kept.
    Unit(String),
    Color(String),
    /// New selection in a dropdown.
    Choice(String),
}

impl FieldInput {
    fn name(&self) -> &'static str {
        match self {
            FieldInput::Text(_) => "text",
            FieldInput::Magnitude(_) => "magnitude",
            FieldInput::Unit(_) => "unit",
            FieldInput::Color(_) => "color",
            FieldInput::Choice(_) => "choice",
        }
    }
}

/// A user edit to one named field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldEdit {
    pub field: String,
    pub input: FieldInput,
}

impl FieldEdit {
    pub fn new(field: impl Into<String>, input: FieldInput) -> Self {
        Self {
            field: field.into(),
            input,
        }
    }
}

/// Stateless editor bound to a schema registry.
#[derive(Debug, Clone, Copy)]
pub struct Editor<'r> {
    registry: &'r SchemaRegistry,
}

impl Editor<'static> {
    /// Editor over the built-in schemas.
    pub fn builtin() -> Result<Self, SchemaError> {
        SchemaRegistry::builtin().map(Self::new)
    }
}

impl<'r> Editor<'r> {
    pub fn new(registry: &'r SchemaRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &'r SchemaRegistry {
        self.registry
    }

    /// Ordered schema for the widget's type.
    pub fn schema(&self, widget: &Widget) -> &'r [FieldSchema] {
        self.registry.schema_for(widget.widget_type())
    }

    /// Current value of every field, in schema order.
    pub fn view(&self, widget: &Widget) -> Vec<FieldView<'r>> {
        self.schema(widget)
            .iter()
            .map(|entry| FieldView {
                schema: entry,
                value: field_value(widget, entry),
            })
            .collect()
    }

    /// Apply one edit, returning the whole updated widget.
    ///
    /// An edit that leaves the stored value unchanged returns the same
    /// snapshot (see [`Widget::ptr_eq`]).
    pub fn apply(&self, widget: &Widget, edit: &FieldEdit) -> Result<Widget, EditorError> {
        let kind = widget.widget_type();
        let entry = self
            .registry
            .entry(kind, &edit.field)
            .ok_or_else(|| EditorError::UnknownField {
                kind,
                field: edit.field.clone(),
            })?;
        self.apply_to_entry(widget, entry, &edit.input)
    }

    /// Apply a raw value to the field stored at `path`.
    ///
    /// Numeric fields with units treat `raw` as the new magnitude; every other
    /// kind stores it verbatim.
    pub fn on_field_change(
        &self,
        widget: &Widget,
        path: &FieldPath,
        raw: &str,
    ) -> Result<Widget, EditorError> {
        let kind = widget.widget_type();
        let entry = self
            .registry
            .entry_by_path(kind, path)
            .ok_or_else(|| EditorError::UnknownPath {
                kind,
                path: path.to_string(),
            })?;
        let input = match entry.kind {
            InputKind::Text { .. } => FieldInput::Text(raw.to_string()),
            InputKind::Number { .. } => FieldInput::Magnitude(raw.to_string()),
            InputKind::Color => FieldInput::Color(raw.to_string()),
            InputKind::Enum { .. } => FieldInput::Choice(raw.to_string()),
        };
        self.apply_to_entry(widget, entry, &input)
    }

    fn apply_to_entry(
        &self,
        widget: &Widget,
        entry: &FieldSchema,
        input: &FieldInput,
    ) -> Result<Widget, EditorError> {
        let current = widget.read(&entry.path).unwrap_or(entry.default.into());
        let stored = stored_value(widget.widget_type(), entry, &current, input)?;
        if stored == current {
            return Ok(widget.clone());
        }
        let updated = widget.write(&entry.path, &stored)?;
        log::debug!("{} {}: {} = {:?}", widget.widget_type(), widget.id(), entry.path, stored);
        Ok(updated)
    }
}

fn field_value(widget: &Widget, entry: &FieldSchema) -> FieldValue {
    let stored = widget.read(&entry.path).unwrap_or(entry.default.into());
    match &entry.kind {
        InputKind::Text { .. } => FieldValue::Text(stored.into_owned()),
        InputKind::Number { units, fallback } if !units.is_empty() => {
            FieldValue::Style(style::decode(&stored, units, *fallback))
        }
        InputKind::Number { .. } => FieldValue::Text(stored.into_owned()),
        InputKind::Color => FieldValue::Color(stored.into_owned()),
        InputKind::Enum { .. } => FieldValue::Choice(stored.into_owned()),
    }
}

/// Compute the string to store for `input`, given the currently stored value.
fn stored_value(
    kind: WidgetType,
    entry: &FieldSchema,
    current: &str,
    input: &FieldInput,
) -> Result<String, EditorError> {
    let stored = match (&entry.kind, input) {
        (InputKind::Number { units, fallback }, FieldInput::Magnitude(raw)) => {
            if units.is_empty() {
                raw.clone()
            } else {
                let unit = style::decode(current, units, *fallback).unit;
                style::encode(style::parse_magnitude(raw, *fallback), &unit)
            }
        }
        (InputKind::Number { units, fallback }, FieldInput::Unit(unit)) if !units.is_empty() => {
            if !style::is_valid_unit(unit) {
                log::debug!("Rejecting unit {unit:?} for {kind}.{}", entry.name);
                return Err(EditorError::InvalidUnit {
                    kind,
                    field: entry.name,
                    unit: unit.clone(),
                });
            }
            let magnitude = style::decode(current, units, *fallback).magnitude;
            style::encode(magnitude, unit)
        }
        (InputKind::Enum { options }, FieldInput::Choice(raw)) => {
            if !options.iter().any(|o| o.value == *raw) {
                log::debug!("Rejecting option {raw:?} for {kind}.{}", entry.name);
                return Err(EditorError::InvalidChoice {
                    kind,
                    field: entry.name,
                    value: raw.clone(),
                });
            }
            raw.clone()
        }
        (InputKind::Text { .. }, FieldInput::Text(raw))
        | (InputKind::Color, FieldInput::Color(raw)) => raw.clone(),
        (_, input) => {
            log::error!(
                "{} edit sent to {} field {}.{}",
                input.name(),
                entry.kind.name(),
                kind,
                entry.name
            );
            return Err(EditorError::InputMismatch {
                kind,
                field: entry.name,
                input: input.name(),
            });
        }
    };
    Ok(stored)
}
