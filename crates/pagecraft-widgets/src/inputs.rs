//! Form inputs. Each one draws a labelled control and returns the new raw
//! value when the user changed it this frame.

use egui::{Color32, ComboBox, TextEdit, Ui};
use pagecraft_core::style::{format_magnitude, StyleValue, UnitSet};
use pagecraft_core::EnumOption;

use crate::colors::{colors_match, parse_hex_color, to_hex, ColorSwatch, QUICK_COLORS};
use crate::layout::field_label;
use crate::sizing;

/// Change reported by [`style_input`].
#[derive(Debug, Clone, PartialEq)]
pub enum StyleEdit {
    Magnitude(String),
    Unit(String),
}

/// Single-line text input.
pub fn text_input(ui: &mut Ui, label: &str, value: &str) -> Option<String> {
    field_label(ui, label);
    let mut text = value.to_string();
    let response = ui.add(TextEdit::singleline(&mut text).desired_width(f32::INFINITY));
    response.changed().then_some(text)
}

/// Multiline text input.
pub fn text_area(ui: &mut Ui, label: &str, value: &str) -> Option<String> {
    field_label(ui, label);
    let mut text = value.to_string();
    let response = ui.add(
        TextEdit::multiline(&mut text)
            .desired_width(f32::INFINITY)
            .desired_rows(3),
    );
    response.changed().then_some(text)
}

/// Numeric text box plus unit selector.
///
/// While the text box has focus its content is kept in a per-field buffer, so
/// partial input such as `1.` or `-` is not reformatted under the cursor.
pub fn style_input(
    ui: &mut Ui,
    label: &str,
    id_salt: &str,
    value: &StyleValue,
    units: &UnitSet,
) -> Option<StyleEdit> {
    field_label(ui, label);
    let buffer_id = ui.make_persistent_id((id_salt, "magnitude"));
    let mut edit = None;

    ui.horizontal(|ui| {
        let mut text = ui
            .data(|d| d.get_temp::<String>(buffer_id))
            .unwrap_or_else(|| format_magnitude(value.magnitude));
        let width = (ui.available_width() - sizing::SELECT_WIDTH - 8.0).max(40.0);
        let response = ui.add(TextEdit::singleline(&mut text).desired_width(width));
        if response.changed() {
            edit = Some(StyleEdit::Magnitude(text.clone()));
        }
        if response.has_focus() {
            ui.data_mut(|d| d.insert_temp(buffer_id, text));
        } else {
            ui.data_mut(|d| d.remove::<String>(buffer_id));
        }

        let mut unit = value.unit.clone();
        ComboBox::from_id_salt((id_salt, "unit"))
            .selected_text(unit.as_str())
            .width(sizing::SELECT_WIDTH)
            .show_ui(ui, |ui| {
                for option in units.iter() {
                    ui.selectable_value(&mut unit, option.to_string(), option);
                }
                if !units.contains(&value.unit) {
                    ui.selectable_value(&mut unit, value.unit.clone(), value.unit.as_str());
                }
            });
        if unit != value.unit {
            edit = Some(StyleEdit::Unit(unit));
        }
    });
    edit
}

/// Color picker, hex text box and quick-pick swatches.
pub fn color_input(ui: &mut Ui, label: &str, value: &str) -> Option<String> {
    field_label(ui, label);
    let parsed = parse_hex_color(value);
    let mut changed = None;

    ui.horizontal(|ui| {
        let mut color = parsed.unwrap_or(Color32::GRAY);
        if ui.color_edit_button_srgba(&mut color).changed() {
            changed = Some(to_hex(color));
        }
        let mut text = value.to_string();
        if ui
            .add(TextEdit::singleline(&mut text).desired_width(f32::INFINITY))
            .changed()
        {
            changed = Some(text);
        }
    });

    ui.horizontal_wrapped(|ui| {
        for (name, hex) in QUICK_COLORS {
            let Some(swatch) = parse_hex_color(hex) else {
                continue;
            };
            let selected = parsed.is_some_and(|c| colors_match(c, swatch));
            let (clicked, _) = ColorSwatch::new(swatch, name).selected(selected).show(ui);
            if clicked {
                changed = Some((*hex).to_string());
            }
        }
    });
    changed
}

/// Dropdown over a fixed option list.
pub fn select_input(
    ui: &mut Ui,
    label: &str,
    id_salt: &str,
    value: &str,
    options: &[EnumOption],
) -> Option<String> {
    field_label(ui, label);
    let selected_text = options
        .iter()
        .find(|o| o.value == value)
        .map_or(value, |o| o.label.as_str());
    let mut selected = value.to_string();
    ComboBox::from_id_salt((id_salt, "select"))
        .selected_text(selected_text)
        .width(ui.available_width())
        .show_ui(ui, |ui| {
            for option in options {
                ui.selectable_value(&mut selected, option.value.clone(), option.label.as_str());
            }
        });
    (selected != value).then_some(selected)
}
