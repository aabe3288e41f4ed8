use amff_core::page::{COMPARISON_CHARTS, COMPARISON_HEADING};
use amff_core::{Dashboard, Notifier};
use eframe::egui;

use super::components::chart_row;
use crate::theme;

/// Comparison tab buttons followed by the comparison charts.
pub fn comparison_section<N: Notifier>(ui: &mut egui::Ui, dashboard: &mut Dashboard<N>) {
    ui.add_space(24.0);
    ui.label(egui::RichText::new(COMPARISON_HEADING).heading().color(theme::TEXT));
    ui.add_space(10.0);

    // Active marking comes from the view state, never from the widgets.
    let indicators = dashboard.state().tab_indicators();
    ui.horizontal_wrapped(|ui| {
        for indicator in indicators {
            let label = egui::RichText::new(indicator.tab.label()).size(15.0);
            if ui.selectable_label(indicator.active, label).clicked() {
                dashboard.select_comparison_tab(indicator.tab);
            }
        }
    });
    ui.add_space(16.0);

    chart_row(ui, &COMPARISON_CHARTS);
}
