//! egui form inputs for the PageCraft property editor.
//!
//! - **Inputs**: text, multiline text, style value with unit selector, color, dropdown
//! - **Colors**: hex parsing, swatches, a quick palette
//! - **Layout**: field labels, separators, the panel frame
//! - **Panel**: a generic editor panel driven by the field schemas

pub mod colors;
pub mod inputs;
pub mod layout;
pub mod panel;

pub use colors::{colors_match, parse_hex_color, to_hex, ColorSwatch, QUICK_COLORS};
pub use inputs::{color_input, select_input, style_input, text_area, text_input, StyleEdit};
pub use layout::{field_label, panel_frame, section_label, separator};
pub use panel::{field_panel, widget_editor};

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Color swatch size
    pub const SWATCH: f32 = 18.0;
    /// Width of the unit and dropdown selectors
    pub const SELECT_WIDTH: f32 = 72.0;
    /// Gap between a field label and its control
    pub const LABEL_GAP: f32 = 2.0;
    /// Gap between fields
    pub const FIELD_GAP: f32 = 10.0;
    /// Standard corner radius
    pub const CORNER_RADIUS: u8 = 4;
    /// Panel corner radius
    pub const PANEL_RADIUS: u8 = 8;
}

/// Standard colors used across widgets.
pub mod theme {
    use egui::Color32;

    /// Text color (dark gray)
    pub const TEXT: Color32 = Color32::from_rgb(55, 65, 81);
    /// Muted text color
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(107, 114, 128);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(209, 213, 219);
    /// Focus ring / selection color (blue)
    pub const ACCENT: Color32 = Color32::from_rgb(59, 130, 246);
    /// Panel background
    pub const PANEL_BG: Color32 = Color32::from_rgb(249, 250, 251);
}
