//! # UI Components
//!
//! Reusable form widgets for the tip calculator screen.
//!
//! ## Key Functions:
//! - `numeric_text_field()` - Single-line text entry restricted to numbers
//! - `toggle_switch()` - Animated on/off switch for the round-up flag
//! - `result_row()` - Label + right-aligned currency value line
//!
//! ## Purpose:
//! Desktop has no numeric soft keyboard, so the number fields instead filter
//! freshly typed text down to the characters a number can contain.
//! `numeric_text_field` applies that filter after every edit.

use eframe::egui;
use shared::format_currency;

use crate::ui::components::styling::colors;

/// Single-line text field that only keeps numeric input.
///
/// `allow_decimal` permits one '.' (bill amounts); without it only digits
/// survive (people counts). The icon renders as a static leading label.
pub fn numeric_text_field(
    ui: &mut egui::Ui,
    icon: &str,
    hint: &str,
    value: &mut String,
    allow_decimal: bool,
) -> egui::Response {
    let response = ui
        .horizontal(|ui| {
            ui.label(
                egui::RichText::new(icon)
                    .font(egui::FontId::new(16.0, egui::FontFamily::Proportional)),
            );
            ui.add(
                egui::TextEdit::singleline(value)
                    .hint_text(hint)
                    .desired_width(180.0)
                    .font(egui::FontId::new(16.0, egui::FontFamily::Proportional)),
            )
        })
        .inner;

    if response.changed() {
        filter_numeric_text(value, allow_decimal);
    }

    response
}

/// Strip everything a number cannot contain from freshly edited text
fn filter_numeric_text(value: &mut String, allow_decimal: bool) {
    let mut seen_decimal_point = false;
    value.retain(|c| {
        if c.is_ascii_digit() {
            true
        } else if allow_decimal && c == '.' && !seen_decimal_point {
            seen_decimal_point = true;
            true
        } else {
            false
        }
    });
}

/// Animated on/off toggle switch, click to flip
pub fn toggle_switch(ui: &mut egui::Ui, on: &mut bool) -> egui::Response {
    let desired_size = ui.spacing().interact_size.y * egui::vec2(2.0, 1.0);
    let (rect, mut response) = ui.allocate_exact_size(desired_size, egui::Sense::click());
    if response.clicked() {
        *on = !*on;
        response.mark_changed();
    }

    if ui.is_rect_visible(rect) {
        let how_on = ui.ctx().animate_bool(response.id, *on);
        let visuals = ui.style().interact_selectable(&response, *on);
        let rect = rect.expand(visuals.expansion);
        let radius = 0.5 * rect.height();

        let track_color = if *on { colors::TOGGLE_ON } else { visuals.bg_fill };
        ui.painter()
            .rect(rect, radius, track_color, visuals.bg_stroke);

        // Knob slides between the track ends as the animation progresses
        let knob_x = egui::lerp((rect.left() + radius)..=(rect.right() - radius), how_on);
        let center = egui::pos2(knob_x, rect.center().y);
        ui.painter()
            .circle(center, 0.75 * radius, egui::Color32::WHITE, visuals.fg_stroke);
    }

    response
}

/// One output line: label on the left, currency amount on the right
pub fn result_row(ui: &mut egui::Ui, label: &str, amount: f64) {
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(label)
                .font(egui::FontId::new(18.0, egui::FontFamily::Proportional))
                .color(colors::ACCENT_TEXT),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                egui::RichText::new(format_currency(amount))
                    .font(egui::FontId::new(22.0, egui::FontFamily::Proportional))
                    .strong()
                    .color(colors::ACCENT_TEXT),
            );
        });
    });
}
