use amff_core::page::TRAINING_HEADING;
use amff_core::{Dashboard, Notifier, EPOCHS};
use eframe::egui;

use super::components::card_grid;
use crate::theme;

pub fn epoch_grid<N: Notifier>(ui: &mut egui::Ui, dashboard: &Dashboard<N>) {
    theme::section_heading(ui, TRAINING_HEADING);

    card_grid(ui, &EPOCHS, 4, |ui, _index, record| {
        let response = theme::card_frame(None)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new(format!("Epoch {}", record.epoch))
                            .small()
                            .color(theme::TEXT_DIM),
                    );
                    ui.label(
                        egui::RichText::new(record.accuracy)
                            .size(26.0)
                            .strong()
                            .color(theme::ACCENT),
                    );
                    ui.label(
                        egui::RichText::new(format!("Loss: {}", record.loss)).color(theme::TEXT),
                    );
                    ui.label(
                        egui::RichText::new(record.status)
                            .strong()
                            .color(theme::tier_color(record.tier)),
                    );
                });
            })
            .response
            .interact(egui::Sense::click())
            .on_hover_cursor(egui::CursorIcon::PointingHand);

        if response.clicked() {
            dashboard.notify_epoch_selected(record.epoch);
        }
    });
}
