use amff_core::{Dashboard, DetailSection, Notifier};
use eframe::egui;

use super::components::chart_row;
use crate::theme;

/// Detail buttons (acknowledged with a notification) and the section's charts.
pub fn detail_section<N: Notifier>(
    ui: &mut egui::Ui,
    dashboard: &Dashboard<N>,
    section: &DetailSection,
) {
    ui.add_space(24.0);
    ui.label(egui::RichText::new(section.heading).heading().color(theme::TEXT));
    ui.add_space(10.0);

    ui.horizontal_wrapped(|ui| {
        for button in section.buttons {
            if ui.button(egui::RichText::new(button.label).size(15.0)).clicked() {
                dashboard.notify_detail(button.kind, button.category);
            }
        }
    });
    ui.add_space(16.0);

    chart_row(ui, &section.charts);
}
