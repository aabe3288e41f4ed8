//! Colors and card styling for the dark dashboard theme.

use amff_core::{Rgba, StatusTier};
use eframe::egui::{self, Color32};

pub const BACKGROUND: Color32 = Color32::from_rgb(12, 20, 48);
pub const CARD_FILL: Color32 = Color32::from_rgba_premultiplied(22, 22, 28, 28);
pub const CARD_STROKE: Color32 = Color32::from_rgba_premultiplied(50, 50, 50, 50);
pub const ACCENT: Color32 = Color32::from_rgb(0, 242, 254);
pub const GOLD: Color32 = Color32::from_rgb(255, 215, 0);
pub const TEXT: Color32 = Color32::WHITE;
pub const TEXT_DIM: Color32 = Color32::from_rgb(190, 200, 220);

pub fn color(c: Rgba) -> Color32 {
    Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.alpha_u8())
}

pub fn tier_color(tier: StatusTier) -> Color32 {
    match tier {
        StatusTier::Poor => Color32::from_rgb(255, 107, 107),
        StatusTier::Fair => Color32::from_rgb(255, 165, 0),
        StatusTier::Good => Color32::from_rgb(78, 205, 196),
        StatusTier::Excellent => Color32::from_rgb(80, 250, 123),
    }
}

/// Card frame; `pulse` is the pulse progress in `0.0..1.0` when the card is pulsing.
pub fn card_frame(pulse: Option<f32>) -> egui::Frame {
    let stroke = match pulse {
        // Two beats over the pulse window.
        Some(t) => {
            let glow = (t * std::f32::consts::TAU * 2.0).sin().abs();
            egui::Stroke::new(1.0 + 2.0 * glow, ACCENT.gamma_multiply(0.4 + 0.6 * glow))
        }
        None => egui::Stroke::new(1.0, CARD_STROKE),
    };

    egui::Frame::none()
        .fill(CARD_FILL)
        .stroke(stroke)
        .rounding(12.0)
        .inner_margin(egui::Margin::same(14.0))
}

pub fn section_heading(ui: &mut egui::Ui, text: &str) {
    ui.add_space(24.0);
    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new(text).heading().strong().color(GOLD));
    });
    ui.add_space(12.0);
}
