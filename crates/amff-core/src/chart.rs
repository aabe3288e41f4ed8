//! Chart geometry in a unit square.
//!
//! Coordinates are fractions of the plot area with the origin at the bottom-left
//! corner and `y` pointing up. Renderers scale them into their own surface and
//! flip `y` when their surface grows downward.

use std::f32::consts::{FRAC_PI_2, TAU};

use serde::Serialize;

use crate::metrics::ChartSpec;

/// Share of a category slot covered by its bar.
const BAR_FRACTION: f32 = 0.72;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BarRect {
    pub label: &'static str,
    pub value: f64,
    pub x0: f32,
    pub x1: f32,
    pub top: f32,
}

impl BarRect {
    pub fn center_x(&self) -> f32 {
        (self.x0 + self.x1) * 0.5
    }
}

fn fraction(value: f64, max: f64) -> f32 {
    if max <= 0.0 {
        return 0.0;
    }
    (value / max).clamp(0.0, 1.0) as f32
}

pub fn bar_layout(spec: &ChartSpec) -> Vec<BarRect> {
    let n = spec.series.len();
    if n == 0 {
        return Vec::new();
    }
    let max = spec.axis_max();
    let slot = 1.0 / n as f32;
    let half = slot * BAR_FRACTION * 0.5;

    spec.series
        .points
        .iter()
        .enumerate()
        .map(|(i, (label, value))| {
            let center = slot * (i as f32 + 0.5);
            BarRect {
                label: *label,
                value: *value,
                x0: center - half,
                x1: center + half,
                top: fraction(*value, max),
            }
        })
        .collect()
}

/// Point positions of a line chart; the first and last points sit on the edges.
pub fn line_layout(spec: &ChartSpec) -> Vec<[f32; 2]> {
    let n = spec.series.len();
    let max = spec.axis_max();
    spec.series
        .values()
        .enumerate()
        .map(|(i, value)| {
            let x = if n > 1 { i as f32 / (n - 1) as f32 } else { 0.5 };
            [x, fraction(value, max)]
        })
        .collect()
}

/// Angle of radar spoke `index` out of `count`, starting straight up and
/// running clockwise.
pub fn radar_angle(index: usize, count: usize) -> f32 {
    FRAC_PI_2 - TAU * index as f32 / count.max(1) as f32
}

/// Point on spoke `index` at `radius` (fraction of the full radius).
pub fn radar_point(index: usize, count: usize, radius: f32) -> [f32; 2] {
    let angle = radar_angle(index, count);
    [0.5 + 0.5 * radius * angle.cos(), 0.5 + 0.5 * radius * angle.sin()]
}

/// Polygon vertices of the radar dataset, one per spoke.
pub fn radar_layout(spec: &ChartSpec) -> Vec<[f32; 2]> {
    let n = spec.series.len();
    let max = spec.axis_max();
    spec.series
        .values()
        .enumerate()
        .map(|(i, value)| radar_point(i, n, fraction(value, max)))
        .collect()
}

/// Ring radii (fractions) for the radial ticks, excluding the center.
pub fn radar_rings(spec: &ChartSpec) -> Vec<f32> {
    let max = spec.axis_max();
    let step = spec.tick_step.filter(|s| *s > 0.0).unwrap_or(max / 5.0);
    let count = (max / step).round() as usize;
    (1..=count).map(|i| fraction(step * i as f64, max)).collect()
}

/// Evenly spaced value-axis ticks from zero to the axis top, inclusive.
pub fn value_ticks(spec: &ChartSpec, divisions: usize) -> Vec<(f64, f32)> {
    let max = spec.axis_max();
    let divisions = divisions.max(1);
    (0..=divisions)
        .map(|i| {
            let value = max * i as f64 / divisions as f64;
            (value, fraction(value, max))
        })
        .collect()
}

/// Axis label for a tick value: whole numbers without decimals, otherwise
/// trimmed to at most two decimals.
pub fn tick_label(value: f64) -> String {
    if value.fract().abs() < 1e-9 {
        return format!("{:.0}", value);
    }
    let text = format!("{:.2}", value);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{
        ACCURACY_CHART, INFERENCE_CHART, LOSS_CHART, PARAMETER_CHART, RADAR_CHART, TRAINING_CHART,
    };

    fn in_unit(p: [f32; 2]) -> bool {
        (-1e-6..=1.0 + 1e-6).contains(&p[0]) && (-1e-6..=1.0 + 1e-6).contains(&p[1])
    }

    #[test]
    fn test_bar_heights_follow_axis_max() {
        let bars = bar_layout(&ACCURACY_CHART);
        assert_eq!(bars.len(), 2);
        assert!((bars[0].top - 0.9965).abs() < 1e-4);
        assert!((bars[1].top - 0.9375).abs() < 1e-4);

        let params = bar_layout(&PARAMETER_CHART);
        assert!((params[0].top - 0.7).abs() < 1e-4);
        assert!((params[1].top - 0.5).abs() < 1e-4);
    }

    #[test]
    fn test_bars_do_not_overlap() {
        let bars = bar_layout(&INFERENCE_CHART);
        assert_eq!(bars.len(), 6);
        for pair in bars.windows(2) {
            assert!(pair[0].x1 < pair[1].x0);
        }
        assert!(bars.first().unwrap().x0 > 0.0);
        assert!(bars.last().unwrap().x1 < 1.0);
    }

    #[test]
    fn test_line_spans_plot() {
        let points = line_layout(&LOSS_CHART);
        assert_eq!(points.len(), 5);
        assert_eq!(points[0], [0.0, 1.0]);
        assert_eq!(points[4][0], 1.0);
        assert!((points[4][1] - 0.2).abs() < 1e-6);
        assert!(line_layout(&TRAINING_CHART).into_iter().all(in_unit));
    }

    #[test]
    fn test_radar_first_spoke_points_up() {
        let points = radar_layout(&RADAR_CHART);
        assert_eq!(points.len(), 5);
        assert!((points[0][0] - 0.5).abs() < 1e-5);
        assert!(points[0][1] > 0.99);
        assert!(points.iter().copied().all(in_unit));
        // MSE and MAPE collapse toward the center.
        assert!((points[3][0] - 0.5).abs() < 1e-3);
    }

    #[test]
    fn test_radar_rings_use_step() {
        let rings = radar_rings(&RADAR_CHART);
        let expected = [0.2, 0.4, 0.6, 0.8, 1.0];
        assert_eq!(rings.len(), expected.len());
        for (ring, want) in rings.iter().zip(expected) {
            assert!((ring - want).abs() < 1e-6);
        }
    }

    #[test]
    fn test_tick_label() {
        assert_eq!(tick_label(100.0), "100");
        assert_eq!(tick_label(0.0), "0");
        assert_eq!(tick_label(0.2), "0.2");
        assert_eq!(tick_label(0.25), "0.25");
        assert_eq!(tick_label(1.5), "1.5");
    }

    #[test]
    fn test_value_ticks() {
        let ticks = value_ticks(&ACCURACY_CHART, 5);
        assert_eq!(ticks.len(), 6);
        assert_eq!(ticks[0], (0.0, 0.0));
        assert_eq!(ticks[5], (100.0, 1.0));
    }
}
