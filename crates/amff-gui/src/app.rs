use std::time::Duration;

use amff_core::{
    generate_particles, Dashboard, DashboardConfig, Particle, QueueNotifier, DETAIL_SECTIONS,
};
use eframe::egui;

use crate::panels::{
    architecture::architecture_diagram,
    comparison::comparison_section,
    defects::defect_grid,
    details::detail_section,
    header::{footer, header},
    notification::notification_modal,
    particles::paint_particles,
    specs::spec_grid,
    stats::stats_grid,
    training::epoch_grid,
};
use crate::theme;

const CONTENT_MAX_WIDTH: f32 = 1200.0;
/// Repaint cadence for the particle drift.
const FRAME_INTERVAL: Duration = Duration::from_millis(33);

pub struct AmffDashboardApp {
    dashboard: Dashboard<QueueNotifier>,
    notifications: QueueNotifier,
    particles: Vec<Particle>,
}

impl AmffDashboardApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: DashboardConfig) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());

        let notifications = QueueNotifier::new();
        let mut dashboard = Dashboard::with_config(&config, notifications.clone());
        dashboard.pulse_stat_cards(Duration::from_secs_f64(cc.egui_ctx.input(|i| i.time)));
        let particles = generate_particles(&config.particles, &mut rand::thread_rng());

        tracing::info!(
            "Dashboard ready ({} particles, {}ms pulse)",
            particles.len(),
            config.pulse.duration_ms
        );

        Self {
            dashboard,
            notifications,
            particles,
        }
    }

    fn render_page(&mut self, ui: &mut egui::Ui, now: Duration) {
        header(ui);
        stats_grid(ui, &mut self.dashboard, now);
        epoch_grid(ui, &self.dashboard);
        comparison_section(ui, &mut self.dashboard);
        spec_grid(ui);
        architecture_diagram(ui, &mut self.dashboard);
        defect_grid(ui, &mut self.dashboard, now);
        for section in &DETAIL_SECTIONS {
            detail_section(ui, &self.dashboard, section);
        }
        footer(ui);
    }
}

impl eframe::App for AmffDashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Duration::from_secs_f64(ctx.input(|i| i.time));
        self.dashboard.tick(now);

        let modal_open = notification_modal(ctx, &self.notifications);

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(theme::BACKGROUND))
            .show(ctx, |ui| {
                paint_particles(ui, ui.max_rect(), &self.particles, now);

                ui.add_enabled_ui(!modal_open, |ui| {
                    egui::ScrollArea::vertical()
                        .auto_shrink([false, false])
                        .show(ui, |ui| {
                            let margin = ((ui.available_width() - CONTENT_MAX_WIDTH) * 0.5).max(20.0);
                            egui::Frame::none()
                                .inner_margin(egui::Margin::symmetric(margin, 0.0))
                                .show(ui, |ui| self.render_page(ui, now));
                        });
                });
            });

        ctx.request_repaint_after(FRAME_INTERVAL);
    }
}
