use std::time::Duration;

use amff_core::{Dashboard, Notifier, PulseTarget, DEFECT_TYPES};
use eframe::egui;

use super::components::card_grid;
use crate::theme;

pub fn defect_grid<N: Notifier>(ui: &mut egui::Ui, dashboard: &mut Dashboard<N>, now: Duration) {
    ui.add_space(24.0);

    card_grid(ui, &DEFECT_TYPES, 3, |ui, index, defect| {
        let target = PulseTarget::DefectCard(index);
        let response = theme::card_frame(dashboard.pulse_progress(target, now))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    ui.label(egui::RichText::new(defect.icon).size(30.0));
                    ui.label(egui::RichText::new(defect.name).heading().color(theme::TEXT));
                    ui.label(egui::RichText::new(defect.description).color(theme::TEXT_DIM));
                    ui.label(
                        egui::RichText::new(format!("AMFF-CNN: {}", defect.accuracy))
                            .strong()
                            .color(theme::ACCENT),
                    );
                });
            })
            .response
            .interact(egui::Sense::click())
            .on_hover_cursor(egui::CursorIcon::PointingHand);

        if response.clicked() {
            dashboard.decorate_pulse(target, now);
        }
    });
}
