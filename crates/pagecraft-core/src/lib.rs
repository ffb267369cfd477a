//! PageCraft Core Library
//!
//! Widget model, field schemas and the generic property editor for the
//! PageCraft page builder. Nothing here depends on a UI toolkit.

pub mod config;
pub mod document;
pub mod editor;
pub mod path;
pub mod schema;
pub mod style;
pub mod widget;

pub use config::EditorConfig;
pub use document::{Document, DocumentError};
pub use editor::{Editor, EditorError, FieldEdit, FieldInput, FieldValue, FieldView};
pub use path::{FieldPath, Node, PathError};
pub use schema::{EnumOption, FieldSchema, InputKind, SchemaError, SchemaRegistry};
pub use style::{StyleValue, UnitSet};
pub use widget::{Alignment, Container, ModelError, Widget, WidgetId, WidgetType};
