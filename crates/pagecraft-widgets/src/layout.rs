//! Layout helpers: labels, separators, frames.

use egui::{vec2, CornerRadius, Frame, Margin, Sense, Stroke, Ui};

use crate::{sizing, theme};

/// One-pixel rule across the available width, with a field gap above and below.
pub fn separator(ui: &mut Ui) {
    ui.add_space(sizing::FIELD_GAP);
    let (rect, _) = ui.allocate_exact_size(vec2(ui.available_width(), 1.0), Sense::hover());
    ui.painter().rect_filled(rect, CornerRadius::ZERO, theme::BORDER);
    ui.add_space(sizing::FIELD_GAP);
}

/// Draw a section label (small, muted, uppercase).
pub fn section_label(ui: &mut Ui, text: &str) {
    ui.label(
        egui::RichText::new(text.to_uppercase())
            .size(10.0)
            .color(theme::TEXT_MUTED),
    );
}

/// Label shown above a form control.
pub fn field_label(ui: &mut Ui, text: &str) {
    ui.label(egui::RichText::new(text).size(12.0).strong().color(theme::TEXT));
    ui.add_space(sizing::LABEL_GAP);
}

/// Frame for the property editor panel.
pub fn panel_frame() -> Frame {
    Frame::new()
        .fill(theme::PANEL_BG)
        .corner_radius(CornerRadius::same(sizing::PANEL_RADIUS))
        .stroke(Stroke::new(1.0, theme::BORDER))
        .inner_margin(Margin::same(12))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separator_takes_vertical_space() {
        let ctx = egui::Context::default();
        let mut advance = 0.0;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                let before = ui.cursor().top();
                separator(ui);
                advance = ui.cursor().top() - before;
            });
        });
        assert!(advance >= 2.0 * sizing::FIELD_GAP + 1.0, "{advance}");
    }
}
