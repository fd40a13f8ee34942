use eframe::egui;

use crate::ui::app_state::TipTimeApp;
use crate::ui::*;

use shared::{TipBreakdown, TipPercent};

impl eframe::App for TipTimeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            // Single scrollable column: heading, inputs, results
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(24.0);

                self.render_heading(ui);
                ui.add_space(12.0);

                self.render_bill_field(ui);
                ui.add_space(12.0);

                self.render_tip_percent_group(ui);
                ui.add_space(12.0);

                self.render_people_field(ui);
                ui.add_space(12.0);

                self.render_round_up_row(ui);
                ui.add_space(20.0);

                // Recompute the derived amounts from the current snapshot;
                // immediate mode means this runs on every input change
                let breakdown = self.form.breakdown();
                self.render_results(ui, &breakdown);

                ui.add_space(40.0);
            });
        });
    }
}

impl TipTimeApp {
    /// Render the screen heading
    fn render_heading(&self, ui: &mut egui::Ui) {
        ui.label(
            egui::RichText::new("Calculate Tip")
                .font(egui::FontId::new(24.0, egui::FontFamily::Proportional))
                .strong()
                .color(colors::ACCENT_TEXT),
        );
    }

    /// Render the bill amount entry field
    fn render_bill_field(&mut self, ui: &mut egui::Ui) {
        ui.label("Bill Amount");
        numeric_text_field(ui, "💵 $", "0.00", &mut self.form.amount_input, true);
    }

    /// Render the exclusive tip percentage choice (10 / 15 / 20 / 25)
    fn render_tip_percent_group(&mut self, ui: &mut egui::Ui) {
        ui.label("Tip Percentage");
        for percent in TipPercent::ALL {
            ui.radio_value(
                &mut self.form.selected_tip_percent,
                percent,
                percent.label(),
            );
        }
    }

    /// Render the number-of-people entry field
    fn render_people_field(&mut self, ui: &mut egui::Ui) {
        ui.label("Number of People");
        numeric_text_field(ui, "👤", "1", &mut self.form.people_input, false);
    }

    /// Render the round-up row with a right-aligned toggle switch
    fn render_round_up_row(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Round up tip?");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                toggle_switch(ui, &mut self.form.round_up);
            });
        });
    }

    /// Render the three derived amounts as formatted currency lines
    fn render_results(&self, ui: &mut egui::Ui, breakdown: &TipBreakdown) {
        result_row(ui, "Tip amount", breakdown.tip);
        result_row(ui, "Total", breakdown.total);
        result_row(ui, "Per person", breakdown.per_person);
    }
}
