//! Editor configuration.

use crate::widget::WidgetType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Process-wide settings that shape the field schemas.
///
/// Loaded once, turned into a [`crate::schema::SchemaRegistry`], and never
/// consulted again afterwards.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorConfig {
    /// Magnitude used for numeric fields whose default value has none
    /// (for example an image height of `auto`).
    pub fallback_magnitude: f64,
    /// Allowed-unit overrides, keyed by widget type and field name.
    pub units: BTreeMap<WidgetType, BTreeMap<String, Vec<String>>>,
}

impl EditorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the allowed units of one numeric field.
    pub fn with_units<I, S>(mut self, kind: WidgetType, field: &str, units: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.units
            .entry(kind)
            .or_default()
            .insert(field.to_string(), units.into_iter().map(Into::into).collect());
        self
    }

    /// Set the fallback magnitude.
    pub fn with_fallback_magnitude(mut self, magnitude: f64) -> Self {
        self.fallback_magnitude = magnitude;
        self
    }

    /// Unit override for a field, if any.
    pub fn units_for(&self, kind: WidgetType, field: &str) -> Option<&[String]> {
        self.units
            .get(&kind)
            .and_then(|fields| fields.get(field))
            .map(Vec::as_slice)
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize a configuration from JSON. Missing keys take defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
