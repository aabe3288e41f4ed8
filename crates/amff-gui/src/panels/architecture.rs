use amff_core::page::ARCHITECTURE_HEADING;
use amff_core::{Dashboard, Notifier, ARCH_BLOCKS};
use eframe::egui;

use crate::theme;

pub fn architecture_diagram<N: Notifier>(ui: &mut egui::Ui, dashboard: &mut Dashboard<N>) {
    theme::section_heading(ui, ARCHITECTURE_HEADING);

    let mut clicked = None;
    ui.columns(ARCH_BLOCKS.len(), |columns| {
        for (column, block) in columns.iter_mut().zip(ARCH_BLOCKS.iter()) {
            let response = theme::card_frame(None)
                .show(column, |ui| {
                    ui.set_width(ui.available_width());
                    ui.vertical_centered(|ui| {
                        ui.label(egui::RichText::new(block.title).strong().color(theme::TEXT));
                        ui.label(egui::RichText::new(block.caption).small().color(theme::TEXT_DIM));
                    });
                })
                .response
                .interact(egui::Sense::click())
                .on_hover_cursor(egui::CursorIcon::PointingHand);

            if response.clicked() {
                clicked = Some(block.id);
            }
        }
    });

    if let Some(id) = clicked {
        dashboard.show_architecture_info(id);
    }

    ui.add_space(12.0);
    theme::card_frame(None).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new(dashboard.state().arch_info()).color(theme::TEXT));
        });
    });
}
