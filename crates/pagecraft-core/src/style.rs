//! Style value codec: `"16px"` <-> `{ magnitude: 16, unit: "px" }`.
//!
//! Decoding never fails. Stored strings without a numeric prefix fall back to
//! a caller-supplied magnitude, a missing unit becomes the first allowed unit,
//! and units outside the allowed set are echoed back verbatim.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered set of unit strings offered for a numeric field.
///
/// Order matters: the first unit is the default when a stored value has none.
/// Every unit should pass [`is_valid_unit`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnitSet(Vec<String>);

impl UnitSet {
    /// Build a unit set, dropping duplicates while keeping first occurrences.
    pub fn new<I, S>(units: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out: Vec<String> = Vec::new();
        for unit in units {
            let unit = unit.into();
            if !out.contains(&unit) {
                out.push(unit);
            }
        }
        Self(out)
    }

    /// The default unit.
    pub fn first(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    pub fn contains(&self, unit: &str) -> bool {
        self.0.iter().any(|u| u == unit)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&[&str]> for UnitSet {
    fn from(units: &[&str]) -> Self {
        Self::new(units.iter().copied())
    }
}

/// A decoded style value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleValue {
    pub magnitude: f64,
    pub unit: String,
}

impl StyleValue {
    pub fn new(magnitude: f64, unit: impl Into<String>) -> Self {
        Self {
            magnitude,
            unit: unit.into(),
        }
    }

    /// Stored form of this value.
    pub fn encode(&self) -> String {
        encode(self.magnitude, &self.unit)
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", format_magnitude(self.magnitude), self.unit)
    }
}

/// Length in bytes of the leading numeric run of `s`, if there is one.
///
/// Grammar: `[+-]? digits ('.' digits?)?` or `[+-]? '.' digits`. Exponents are
/// not recognised, so `16em` splits as `16` + `em`.
fn numeric_run_len(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_digits = digits_from(end);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits_from(end + 1);
        if frac_digits > 0 || int_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    (int_digits + frac_digits > 0).then_some(end)
}

/// Split `stored` into its leading magnitude and the remaining text.
///
/// Returns `None` when there is no numeric prefix or it does not fit in a
/// finite `f64`.
pub fn split_numeric(stored: &str) -> Option<(f64, &str)> {
    let len = numeric_run_len(stored)?;
    let magnitude: f64 = stored[..len].parse().ok()?;
    magnitude
        .is_finite()
        .then(|| (magnitude, &stored[len..]))
}

/// Decode a stored style string against the field's allowed units.
pub fn decode(stored: &str, units: &UnitSet, fallback: f64) -> StyleValue {
    let default_unit = units.first().unwrap_or_default();
    match split_numeric(stored) {
        Some((magnitude, "")) => StyleValue::new(magnitude, default_unit),
        Some((magnitude, unit)) => {
            if !units.contains(unit) {
                log::debug!("Keeping unit {unit:?} outside the allowed set");
            }
            StyleValue::new(magnitude, unit)
        }
        None => {
            log::debug!("No magnitude in {stored:?}, using fallback {fallback}");
            StyleValue::new(fallback, default_unit)
        }
    }
}

/// Whether `unit` survives an encode/decode cycle intact.
///
/// An empty unit decodes as the default unit, and a unit starting with a digit
/// or `.` is read back as part of the magnitude.
pub fn is_valid_unit(unit: &str) -> bool {
    unit.chars()
        .next()
        .is_some_and(|c| !c.is_ascii_digit() && c != '.')
}

/// Encode a magnitude and unit with no separator: `(16, "px")` -> `"16px"`.
pub fn encode(magnitude: f64, unit: &str) -> String {
    format!("{}{}", format_magnitude(magnitude), unit)
}

/// Shortest decimal form that parses back to the same `f64` (`16.0` -> `"16"`).
pub fn format_magnitude(magnitude: f64) -> String {
    magnitude.to_string()
}

/// Parse a magnitude typed by the user, ignoring surrounding whitespace and
/// anything after the numeric prefix. Unparseable input yields `fallback`.
pub fn parse_magnitude(raw: &str, fallback: f64) -> f64 {
    match split_numeric(raw.trim()) {
        Some((magnitude, _)) => magnitude,
        None => {
            log::debug!("Magnitude input {raw:?} is not numeric, using fallback {fallback}");
            fallback
        }
    }
}
