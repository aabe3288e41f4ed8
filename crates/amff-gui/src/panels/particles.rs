use std::f32::consts::TAU;
use std::time::Duration;

use amff_core::Particle;
use eframe::egui::{self, pos2, Color32};

/// Seconds per float cycle.
const FLOAT_PERIOD_SECS: f32 = 6.0;
/// Vertical drift in points.
const FLOAT_AMPLITUDE: f32 = 12.0;

/// Paint the decorative particles across `rect`, behind anything added later.
pub fn paint_particles(ui: &egui::Ui, rect: egui::Rect, particles: &[Particle], now: Duration) {
    let painter = ui.painter();
    let t = now.as_secs_f32();
    let color = Color32::from_white_alpha(70);

    for particle in particles {
        let phase = ((t + particle.delay_secs) / FLOAT_PERIOD_SECS * TAU).sin();
        let center = pos2(
            rect.left() + rect.width() * particle.left_vw / 100.0,
            rect.top() + rect.height() * particle.top_vh / 100.0 + phase * FLOAT_AMPLITUDE,
        );
        painter.circle_filled(center, particle.size_px * 0.5, color);
    }
}
