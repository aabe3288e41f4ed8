use amff_core::page::{CONTACT_EMAIL, FOOTER_COPYRIGHT, SUBTITLE, TAGLINE, TITLE};
use eframe::egui;

use crate::theme;

pub fn header(ui: &mut egui::Ui) {
    ui.add_space(20.0);
    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new(TITLE)
                .size(36.0)
                .strong()
                .color(theme::ACCENT),
        );
        ui.add_space(6.0);
        ui.label(egui::RichText::new(TAGLINE).size(18.0).color(theme::TEXT));
        ui.label(egui::RichText::new(SUBTITLE).italics().color(theme::TEXT_DIM));
    });
    ui.add_space(20.0);
}

pub fn footer(ui: &mut egui::Ui) {
    ui.add_space(40.0);
    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new(FOOTER_COPYRIGHT).color(theme::TEXT_DIM));
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("Contact:").color(theme::TEXT_DIM));
            ui.hyperlink_to(CONTACT_EMAIL, format!("mailto:{}", CONTACT_EMAIL));
        });
    });
    ui.add_space(40.0);
}
