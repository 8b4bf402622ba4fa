//! Upload, preview, result and disclaimer sections of the main window.

use super::UiApp;
use eframe::egui;
use screening_core::message::{DISCLAIMER_TEXT, DISCLAIMER_TITLE};
use screening_core::{Classification, result_message};

const NEGATIVE_FILL: egui::Color32 = egui::Color32::from_rgb(230, 246, 234);
const NEGATIVE_TEXT: egui::Color32 = egui::Color32::from_rgb(22, 101, 52);
const POSITIVE_FILL: egui::Color32 = egui::Color32::from_rgb(253, 234, 234);
const POSITIVE_TEXT: egui::Color32 = egui::Color32::from_rgb(153, 27, 27);
const WARNING_FILL: egui::Color32 = egui::Color32::from_rgb(255, 245, 220);
const WARNING_TEXT: egui::Color32 = egui::Color32::from_rgb(146, 64, 14);

impl UiApp {
    pub(super) fn render_upload_section(&mut self, ui: &mut egui::Ui) {
        ui.heading("Upload Mammogram");
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            if ui.button("Choose Image").clicked() {
                let ctx = ui.ctx().clone();
                self.choose_file(&ctx);
            }
            ui.weak("PNG, JPG, GIF up to 10MB");
        });
        if let Some(file) = self.session.selected_file() {
            ui.label(format!("{} ({} bytes)", file.name, file.size));
            if file.exceeds_advisory_limit() {
                ui.colored_label(WARNING_TEXT, "This file is larger than the suggested 10MB.");
            }
        }
    }

    /// Shown once a preview is available.
    pub(super) fn render_preview_section(&mut self, ui: &mut egui::Ui) {
        let Some(texture) = &self.preview_texture else {
            return;
        };
        ui.heading("Image Analysis");
        ui.add_space(4.0);
        let sized = egui::load::SizedTexture::from_handle(texture);
        ui.add(
            egui::Image::new(sized)
                .max_width(ui.available_width())
                .maintain_aspect_ratio(true),
        );
        ui.add_space(8.0);

        if self.session.is_analyzing() {
            ui.horizontal(|ui| {
                ui.add_enabled(false, egui::Button::new("Analyzing Image..."));
                ui.spinner();
            });
        } else if ui
            .add_enabled(self.session.can_analyze(), egui::Button::new("Start Analysis"))
            .clicked()
        {
            self.start_analysis();
        }
        ui.add_space(12.0);
    }

    pub(super) fn render_result_section(&self, ui: &mut egui::Ui) {
        let Some(outcome) = self.session.outcome() else {
            return;
        };
        let msg = result_message(outcome);
        let (fill, text) = match outcome.classification {
            Classification::Negative => (NEGATIVE_FILL, NEGATIVE_TEXT),
            Classification::Positive => (POSITIVE_FILL, POSITIVE_TEXT),
        };
        egui::Frame::group(ui.style()).fill(fill).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new(msg.title).strong().size(18.0).color(text));
            ui.add_space(4.0);
            ui.colored_label(text, msg.message);
            ui.add_space(8.0);
            let confidence = self.session.confidence();
            ui.horizontal(|ui| {
                ui.colored_label(text, "Analysis Confidence:");
                ui.add(
                    egui::ProgressBar::new(f32::from(confidence) / 100.0)
                        .desired_width(240.0)
                        .fill(text),
                );
                ui.colored_label(text, format!("{confidence}%"));
            });
        });
    }
}

pub(super) fn render_disclaimer(ui: &mut egui::Ui) {
    egui::Frame::group(ui.style())
        .fill(WARNING_FILL)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                egui::RichText::new(DISCLAIMER_TITLE)
                    .strong()
                    .color(WARNING_TEXT),
            );
            ui.colored_label(WARNING_TEXT, DISCLAIMER_TEXT);
        });
}
