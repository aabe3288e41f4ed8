use std::time::Duration;

use amff_core::{Dashboard, Notifier, PulseTarget, STAT_CARDS};
use eframe::egui;

use super::components::card_grid;
use crate::theme;

pub fn stats_grid<N: Notifier>(ui: &mut egui::Ui, dashboard: &mut Dashboard<N>, now: Duration) {
    card_grid(ui, &STAT_CARDS, 3, |ui, index, card| {
        let target = PulseTarget::StatCard(index);
        let response = theme::card_frame(dashboard.pulse_progress(target, now))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new(card.value)
                            .size(32.0)
                            .strong()
                            .color(theme::ACCENT),
                    );
                    ui.label(egui::RichText::new(card.label).strong().color(theme::TEXT));
                    ui.label(egui::RichText::new(card.sublabel).small().color(theme::TEXT_DIM));
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
