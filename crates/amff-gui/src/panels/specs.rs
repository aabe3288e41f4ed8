use amff_core::page::SPECS_HEADING;
use amff_core::TECHNICAL_SPECS;
use eframe::egui;

use super::components::card_grid;
use crate::theme;

pub fn spec_grid(ui: &mut egui::Ui) {
    theme::section_heading(ui, SPECS_HEADING);

    card_grid(ui, &TECHNICAL_SPECS, 2, |ui, _index, spec| {
        theme::card_frame(None).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new(spec.label).small().color(theme::ACCENT));
            ui.label(egui::RichText::new(spec.value).color(theme::TEXT));
        });
    });
}
