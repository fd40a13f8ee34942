//! # Styling Module
//!
//! This module contains the styling function and color constants for the
//! tip calculator app.
//!
//! ## Key Functions:
//! - `setup_tip_time_style()` - Configure global egui styling
//!
//! ## Color Palette:
//! The colors module holds the Tip Time palette: a light blue surface with
//! dark blue headings and result text.

use eframe::egui;

/// Setup the Tip Time look for the entire application
pub fn setup_tip_time_style(ctx: &egui::Context) {
    ctx.set_style({
        let mut style = (*ctx.style()).clone();

        // Light theme base so widgets read well on the pale surface
        style.visuals = egui::Visuals::light();

        // Light blue surface behind the whole form
        style.visuals.window_fill = colors::SURFACE;
        style.visuals.panel_fill = colors::SURFACE;
        style.visuals.button_frame = true;

        // Text edits use extreme_bg_color in egui 0.28; keep fields visibly
        // lighter than the surface
        style.visuals.extreme_bg_color = colors::FIELD_BACKGROUND;
        style.visuals.override_text_color = Some(colors::BODY_TEXT);

        // Larger text for a form meant to be glanced at across a table
        style.text_styles.insert(
            egui::TextStyle::Heading,
            egui::FontId::new(24.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::new(16.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            egui::FontId::new(16.0, egui::FontFamily::Proportional),
        );

        // Rounded corners and padding
        style.spacing.button_padding = egui::vec2(12.0, 8.0);
        style.spacing.item_spacing = egui::vec2(8.0, 8.0);
        style.visuals.widgets.inactive.rounding = egui::Rounding::same(8.0);
        style.visuals.widgets.active.rounding = egui::Rounding::same(8.0);
        style.visuals.widgets.hovered.rounding = egui::Rounding::same(8.0);

        style
    });
}

/// Color constants for the Tip Time theme
pub mod colors {
    use eframe::egui::Color32;

    /// Window surface (light blue, 0xFFBBDEFB)
    pub const SURFACE: Color32 = Color32::from_rgb(187, 222, 251);

    /// Headings and result amounts (dark blue, 0xFF0D47A1)
    pub const ACCENT_TEXT: Color32 = Color32::from_rgb(13, 71, 161);

    /// Regular label text
    pub const BODY_TEXT: Color32 = Color32::from_rgb(40, 40, 60);

    /// Text field backgrounds
    pub const FIELD_BACKGROUND: Color32 = Color32::from_rgb(248, 248, 248);

    /// Toggle switch track when on
    pub const TOGGLE_ON: Color32 = Color32::from_rgb(13, 71, 161);
}
