//! Field schemas: which fields each widget type exposes to the editor.
//!
//! The tables below are static. [`SchemaRegistry::new`] turns them into owned
//! entries, applies configured unit overrides, and checks every entry against a
//! default instance of its variant so that a path wired to the wrong variant
//! is rejected before any editor runs.

use crate::config::EditorConfig;
use crate::path::{FieldPath, PathError};
use crate::style::{is_valid_unit, split_numeric, UnitSet};
use crate::widget::{Widget, WidgetType};
use std::collections::HashSet;
use std::sync::OnceLock;
use thiserror::Error;

/// Schema construction errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchemaError {
    #[error("Invalid path for {kind}.{field}: {source}")]
    InvalidPath {
        kind: WidgetType,
        field: &'static str,
        source: PathError,
    },
    #[error("{kind}.{field} points at {path}, which is not a leaf of a {kind} widget")]
    NotALeaf {
        kind: WidgetType,
        field: &'static str,
        path: String,
    },
    #[error("{kind}.{field} declares default {declared:?} but new widgets hold {actual:?}")]
    DefaultMismatch {
        kind: WidgetType,
        field: &'static str,
        declared: &'static str,
        actual: String,
    },
    #[error("{kind} field {path} is covered by more than one schema entry")]
    DuplicatePath { kind: WidgetType, path: String },
    #[error("{kind} field {path} is not covered by any schema entry")]
    Uncovered { kind: WidgetType, path: String },
    #[error("Unit override for unknown field {kind}.{field}")]
    UnknownField { kind: WidgetType, field: String },
    #[error("Unit override for {kind}.{field}, which is not numeric")]
    NotNumeric { kind: WidgetType, field: String },
    #[error("Unit override for {kind}.{field} is empty")]
    EmptyUnits { kind: WidgetType, field: String },
    #[error("Unit override for {kind}.{field} has invalid unit {unit:?}")]
    InvalidUnit {
        kind: WidgetType,
        field: String,
        unit: String,
    },
}

/// A selectable value of an enum field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumOption {
    pub value: String,
    pub label: String,
}

/// How a field is edited.
#[derive(Debug, Clone, PartialEq)]
pub enum InputKind {
    /// Free text, optionally multi-line.
    Text { multiline: bool },
    /// A magnitude with a unit. An empty unit set means the raw string is
    /// edited as-is.
    Number { units: UnitSet, fallback: f64 },
    /// A color string such as `#3b82f6`.
    Color,
    /// One of a fixed list of values.
    Enum { options: Vec<EnumOption> },
}

impl InputKind {
    /// Short name used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            InputKind::Text { .. } => "text",
            InputKind::Number { .. } => "number",
            InputKind::Color => "color",
            InputKind::Enum { .. } => "enum",
        }
    }
}

/// Descriptor binding one widget field to its storage path and input kind.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSchema {
    /// Field name, unique within a widget type (e.g. `fontSize`).
    pub name: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    pub path: FieldPath,
    pub kind: InputKind,
    /// Value a freshly created widget holds.
    pub default: &'static str,
}

impl FieldSchema {
    /// Allowed units, when the field goes through the style value codec.
    pub fn units(&self) -> Option<&UnitSet> {
        match &self.kind {
            InputKind::Number { units, .. } if !units.is_empty() => Some(units),
            _ => None,
        }
    }

    /// Magnitude to use when the stored value has none.
    pub fn fallback_magnitude(&self) -> Option<f64> {
        match &self.kind {
            InputKind::Number { fallback, .. } => Some(*fallback),
            _ => None,
        }
    }
}

enum KindSpec {
    Text,
    TextArea,
    Number(&'static [&'static str]),
    Color,
    Enum(&'static [(&'static str, &'static str)]),
}

struct FieldSpec {
    name: &'static str,
    label: &'static str,
    path: &'static str,
    default: &'static str,
    kind: KindSpec,
}

const LENGTH_UNITS: &[&str] = &["px", "rem", "em"];
const RADIUS_UNITS: &[&str] = &["px", "rem", "em", "%"];
const SIZE_UNITS: &[&str] = &["px", "%", "rem", "em"];

const ALIGNMENT_OPTIONS: &[(&str, &str)] = &[("left", "Left"), ("center", "Center"), ("right", "Right")];

const FONT_WEIGHT_OPTIONS: &[(&str, &str)] = &[
    ("normal", "Normal"),
    ("bold", "Bold"),
    ("300", "Light (300)"),
    ("400", "Regular (400)"),
    ("500", "Medium (500)"),
    ("600", "Semi-bold (600)"),
    ("700", "Bold (700)"),
    ("800", "Extra-bold (800)"),
];

const OBJECT_FIT_OPTIONS: &[(&str, &str)] = &[
    ("cover", "Cover"),
    ("contain", "Contain"),
    ("fill", "Fill"),
    ("none", "None"),
    ("scale-down", "Scale down"),
];

const ALIGNMENT_FIELD: FieldSpec = FieldSpec {
    name: "alignment",
    label: "Alignment",
    path: "container.alignment",
    default: "center",
    kind: KindSpec::Enum(ALIGNMENT_OPTIONS),
};

const TEXT_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "text",
        label: "Text",
        path: "props.text",
        default: "New text component",
        kind: KindSpec::TextArea,
    },
    ALIGNMENT_FIELD,
    FieldSpec {
        name: "fontSize",
        label: "Font size",
        path: "props.styling.fontSize",
        default: "16px",
        kind: KindSpec::Number(LENGTH_UNITS),
    },
    FieldSpec {
        name: "color",
        label: "Text color",
        path: "props.styling.color",
        default: "#000000",
        kind: KindSpec::Color,
    },
    FieldSpec {
        name: "fontWeight",
        label: "Font weight",
        path: "props.styling.fontWeight",
        default: "normal",
        kind: KindSpec::Enum(FONT_WEIGHT_OPTIONS),
    },
    FieldSpec {
        name: "textAlign",
        label: "Text align",
        path: "props.styling.textAlign",
        default: "left",
        kind: KindSpec::Enum(ALIGNMENT_OPTIONS),
    },
    FieldSpec {
        name: "margin",
        label: "Margin",
        path: "props.styling.margin",
        default: "8px",
        kind: KindSpec::Number(LENGTH_UNITS),
    },
    FieldSpec {
        name: "padding",
        label: "Padding",
        path: "props.styling.padding",
        default: "8px",
        kind: KindSpec::Number(LENGTH_UNITS),
    },
];

const BUTTON_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "text",
        label: "Button text",
        path: "props.text",
        default: "Click me",
        kind: KindSpec::Text,
    },
    ALIGNMENT_FIELD,
    FieldSpec {
        name: "backgroundColor",
        label: "Background color",
        path: "props.styling.backgroundColor",
        default: "#3b82f6",
        kind: KindSpec::Color,
    },
    FieldSpec {
        name: "color",
        label: "Text color",
        path: "props.styling.color",
        default: "#ffffff",
        kind: KindSpec::Color,
    },
    FieldSpec {
        name: "borderRadius",
        label: "Border radius",
        path: "props.styling.borderRadius",
        default: "8px",
        kind: KindSpec::Number(RADIUS_UNITS),
    },
    FieldSpec {
        name: "padding",
        label: "Padding",
        path: "props.styling.padding",
        default: "12px",
        kind: KindSpec::Number(LENGTH_UNITS),
    },
    FieldSpec {
        name: "fontSize",
        label: "Font size",
        path: "props.styling.fontSize",
        default: "16px",
        kind: KindSpec::Number(LENGTH_UNITS),
    },
    FieldSpec {
        name: "fontWeight",
        label: "Font weight",
        path: "props.styling.fontWeight",
        default: "600",
        kind: KindSpec::Enum(FONT_WEIGHT_OPTIONS),
    },
    FieldSpec {
        name: "border",
        label: "Border",
        path: "props.styling.border",
        default: "none",
        kind: KindSpec::Text,
    },
];

const IMAGE_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "src",
        label: "Image URL",
        path: "props.src",
        default: "https://via.placeholder.com/400",
        kind: KindSpec::Text,
    },
    FieldSpec {
        name: "alt",
        label: "Alt text",
        path: "props.alt",
        default: "Placeholder image",
        kind: KindSpec::Text,
    },
    ALIGNMENT_FIELD,
    FieldSpec {
        name: "width",
        label: "Width",
        path: "props.styling.width",
        default: "400px",
        kind: KindSpec::Number(SIZE_UNITS),
    },
    FieldSpec {
        name: "height",
        label: "Height",
        path: "props.styling.height",
        default: "auto",
        kind: KindSpec::Number(SIZE_UNITS),
    },
    FieldSpec {
        name: "borderRadius",
        label: "Border radius",
        path: "props.styling.borderRadius",
        default: "8px",
        kind: KindSpec::Number(RADIUS_UNITS),
    },
    FieldSpec {
        name: "objectFit",
        label: "Object fit",
        path: "props.styling.objectFit",
        default: "cover",
        kind: KindSpec::Enum(OBJECT_FIT_OPTIONS),
    },
];

fn field_specs(kind: WidgetType) -> &'static [FieldSpec] {
    match kind {
        WidgetType::Text => TEXT_FIELDS,
        WidgetType::Button => BUTTON_FIELDS,
        WidgetType::Image => IMAGE_FIELDS,
    }
}

/// Validated field schemas for every widget type.
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    text: Vec<FieldSchema>,
    button: Vec<FieldSchema>,
    image: Vec<FieldSchema>,
}

impl SchemaRegistry {
    /// Build and validate the schemas for `config`.
    pub fn new(config: &EditorConfig) -> Result<Self, SchemaError> {
        Ok(Self {
            text: build_schema(WidgetType::Text, config)?,
            button: build_schema(WidgetType::Button, config)?,
            image: build_schema(WidgetType::Image, config)?,
        })
    }

    /// Registry for the default configuration, built on first use.
    pub fn builtin() -> Result<&'static SchemaRegistry, SchemaError> {
        static BUILTIN: OnceLock<Result<SchemaRegistry, SchemaError>> = OnceLock::new();
        BUILTIN
            .get_or_init(|| SchemaRegistry::new(&EditorConfig::default()))
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Ordered field list for a widget type. The order is the editor's
    /// display order.
    pub fn schema_for(&self, kind: WidgetType) -> &[FieldSchema] {
        match kind {
            WidgetType::Text => &self.text,
            WidgetType::Button => &self.button,
            WidgetType::Image => &self.image,
        }
    }

    /// Look up an entry by field name.
    pub fn entry(&self, kind: WidgetType, name: &str) -> Option<&FieldSchema> {
        self.schema_for(kind).iter().find(|e| e.name == name)
    }

    /// Look up an entry by storage path.
    pub fn entry_by_path(&self, kind: WidgetType, path: &FieldPath) -> Option<&FieldSchema> {
        self.schema_for(kind).iter().find(|e| &e.path == path)
    }
}

fn build_schema(kind: WidgetType, config: &EditorConfig) -> Result<Vec<FieldSchema>, SchemaError> {
    let specs = field_specs(kind);

    if let Some(overrides) = config.units.get(&kind) {
        for (field, units) in overrides {
            let spec = specs
                .iter()
                .find(|s| s.name == field.as_str())
                .ok_or_else(|| SchemaError::UnknownField {
                    kind,
                    field: field.clone(),
                })?;
            if !matches!(spec.kind, KindSpec::Number(_)) {
                return Err(SchemaError::NotNumeric {
                    kind,
                    field: field.clone(),
                });
            }
            if units.is_empty() {
                return Err(SchemaError::EmptyUnits {
                    kind,
                    field: field.clone(),
                });
            }
            if let Some(unit) = units.iter().find(|u| !is_valid_unit(u)) {
                return Err(SchemaError::InvalidUnit {
                    kind,
                    field: field.clone(),
                    unit: unit.clone(),
                });
            }
        }
    }

    let entries = specs
        .iter()
        .map(|spec| {
            let path = FieldPath::parse(spec.path).map_err(|source| SchemaError::InvalidPath {
                kind,
                field: spec.name,
                source,
            })?;
            let input = match spec.kind {
                KindSpec::Text => InputKind::Text { multiline: false },
                KindSpec::TextArea => InputKind::Text { multiline: true },
                KindSpec::Color => InputKind::Color,
                KindSpec::Number(units) => {
                    let units = match config.units_for(kind, spec.name) {
                        Some(custom) => UnitSet::new(custom.iter().cloned()),
                        None => UnitSet::from(units),
                    };
                    let fallback = split_numeric(spec.default)
                        .map(|(magnitude, _)| magnitude)
                        .unwrap_or(config.fallback_magnitude);
                    InputKind::Number { units, fallback }
                }
                KindSpec::Enum(options) => InputKind::Enum {
                    options: options
                        .iter()
                        .map(|&(value, label)| EnumOption {
                            value: value.to_string(),
                            label: label.to_string(),
                        })
                        .collect(),
                },
            };
            Ok(FieldSchema {
                name: spec.name,
                label: spec.label,
                path,
                kind: input,
                default: spec.default,
            })
        })
        .collect::<Result<Vec<_>, SchemaError>>()?;

    validate(kind, &entries).inspect_err(|e| log::error!("Invalid {kind} field schema: {e}"))?;
    log::debug!("Registered {} fields for {} widgets", entries.len(), kind);
    Ok(entries)
}

/// Check entries against a default instance: each entry must name a writable
/// leaf holding its declared default, and each leaf must be covered exactly once.
fn validate(kind: WidgetType, entries: &[FieldSchema]) -> Result<(), SchemaError> {
    let sample = Widget::create_default(kind, "schema-sample");
    let leaves = sample.leaf_paths();

    let mut seen = HashSet::new();
    for entry in entries {
        if !leaves.contains(&entry.path) {
            return Err(SchemaError::NotALeaf {
                kind,
                field: entry.name,
                path: entry.path.to_string(),
            });
        }
        if !seen.insert(&entry.path) {
            return Err(SchemaError::DuplicatePath {
                kind,
                path: entry.path.to_string(),
            });
        }
        let actual = sample.read(&entry.path).unwrap_or_default();
        if actual != entry.default {
            return Err(SchemaError::DefaultMismatch {
                kind,
                field: entry.name,
                declared: entry.default,
                actual: actual.into_owned(),
            });
        }
        sample
            .write(&entry.path, entry.default)
            .map_err(|source| SchemaError::InvalidPath {
                kind,
                field: entry.name,
                source,
            })?;
    }

    if let Some(uncovered) = leaves.iter().find(|leaf| !seen.contains(leaf)) {
        return Err(SchemaError::Uncovered {
            kind,
            path: uncovered.to_string(),
        });
    }
    Ok(())
}
