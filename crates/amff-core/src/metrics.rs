//! Chart data handed to the chart renderers. Every series is a literal.

use serde::Serialize;

use crate::color::Rgba;

const CYAN: Rgba = Rgba::hex(0x00f2fe);
const SKY: Rgba = Rgba::hex(0x4facfe);
const SKY_FILL: Rgba = Rgba::new(79, 172, 254, 0.2);

/// A named, ordered list of labelled values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricSeries {
    pub name: &'static str,
    pub points: &'static [(&'static str, f64)],
}

impl MetricSeries {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.points.iter().map(|(label, _)| *label)
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|(_, value)| *value)
    }

    pub fn max_value(&self) -> f64 {
        self.values().fold(0.0, f64::max)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Line,
    Radar,
}

/// One color for the whole dataset, or one per data point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Palette {
    Single(Rgba),
    PerPoint(&'static [Rgba]),
}

impl Palette {
    pub fn color_at(&self, index: usize) -> Rgba {
        match self {
            Palette::Single(c) => *c,
            Palette::PerPoint(colors) if colors.is_empty() => Rgba::WHITE,
            Palette::PerPoint(colors) => colors[index % colors.len()],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartSpec {
    pub id: &'static str,
    pub title: &'static str,
    pub kind: ChartKind,
    pub series: MetricSeries,
    /// Fixed top of the value axis; the axis always starts at zero.
    pub y_max: Option<f64>,
    /// Radial tick spacing for radar charts.
    pub tick_step: Option<f64>,
    pub fill: Palette,
    pub stroke: Palette,
    pub border_width: f32,
    /// Shade the area under a line.
    pub filled: bool,
}

impl ChartSpec {
    /// Top of the value axis.
    pub fn axis_max(&self) -> f64 {
        if let Some(max) = self.y_max {
            return max;
        }
        let max = self.series.max_value();
        match self.tick_step {
            Some(step) if step > 0.0 => (max / step).ceil().max(1.0) * step,
            _ if max > 0.0 => max,
            _ => 1.0,
        }
    }
}

pub const ACCURACY_SERIES: MetricSeries = MetricSeries {
    name: "Accuracy (%)",
    points: &[("AMFF-CNN", 99.65), ("Base CNN", 93.75)],
};

pub const RADAR_SERIES: MetricSeries = MetricSeries {
    name: "AMFF-CNN Metrics",
    points: &[
        ("Precision", 99.5),
        ("Recall", 99.4),
        ("F1 Score", 99.45),
        ("MSE", 0.02),
        ("MAPE", 0.01),
    ],
};

pub const PARAMETER_SERIES: MetricSeries = MetricSeries {
    name: "Parameters (Millions)",
    points: &[("AMFF-CNN", 2.1), ("Base CNN", 1.5)],
};

pub const LOSS_SERIES: MetricSeries = MetricSeries {
    name: "AMFF-CNN Loss",
    points: &[
        ("Epoch 1", 0.5),
        ("Epoch 2", 0.4),
        ("Epoch 3", 0.3),
        ("Epoch 4", 0.2),
        ("Epoch 5", 0.1),
    ],
};

pub const TRAINING_SERIES: MetricSeries = MetricSeries {
    name: "Training Accuracy",
    points: &[
        ("Epoch 1", 0.75),
        ("Epoch 2", 0.85),
        ("Epoch 3", 0.90),
        ("Epoch 4", 0.95),
        ("Epoch 5", 0.99),
    ],
};

pub const VALIDATION_SERIES: MetricSeries = MetricSeries {
    name: "Validation Accuracy",
    points: &[
        ("Epoch 1", 0.70),
        ("Epoch 2", 0.80),
        ("Epoch 3", 0.85),
        ("Epoch 4", 0.90),
        ("Epoch 5", 0.95),
    ],
};

pub const INFERENCE_SERIES: MetricSeries = MetricSeries {
    name: "Inference Accuracy (%)",
    points: &[
        ("Crazing", 99.8),
        ("Inclusion", 99.4),
        ("Patches", 99.6),
        ("Pitted Surface", 99.2),
        ("Rolled-in Scale", 99.7),
        ("Scratches", 99.9),
    ],
};

const PAIR_FILL: &[Rgba] = &[CYAN, SKY];
const PAIR_STROKE: &[Rgba] = &[Rgba::hex(0x00d4ff), Rgba::hex(0x00aaff)];

const INFERENCE_FILL: &[Rgba] = &[
    CYAN,
    SKY,
    Rgba::hex(0x00d4ff),
    Rgba::hex(0x00aaff),
    Rgba::hex(0x0077ff),
    Rgba::hex(0x0055ff),
];
const INFERENCE_STROKE: &[Rgba] = &[
    Rgba::hex(0x00d4ff),
    Rgba::hex(0x00aaff),
    Rgba::hex(0x0088ff),
    Rgba::hex(0x0066ff),
    Rgba::hex(0x0044ff),
    Rgba::hex(0x0022ff),
];

const fn curve(id: &'static str, title: &'static str, series: MetricSeries, y_max: Option<f64>) -> ChartSpec {
    ChartSpec {
        id,
        title,
        kind: ChartKind::Line,
        series,
        y_max,
        tick_step: None,
        fill: Palette::Single(SKY_FILL),
        stroke: Palette::Single(CYAN),
        border_width: 2.0,
        filled: true,
    }
}

const fn bars(
    id: &'static str,
    title: &'static str,
    series: MetricSeries,
    y_max: f64,
    fill: &'static [Rgba],
    stroke: &'static [Rgba],
) -> ChartSpec {
    ChartSpec {
        id,
        title,
        kind: ChartKind::Bar,
        series,
        y_max: Some(y_max),
        tick_step: None,
        fill: Palette::PerPoint(fill),
        stroke: Palette::PerPoint(stroke),
        border_width: 1.0,
        filled: false,
    }
}

pub const ACCURACY_CHART: ChartSpec = bars(
    "accuracy",
    "Model Accuracy Comparison",
    ACCURACY_SERIES,
    100.0,
    PAIR_FILL,
    PAIR_STROKE,
);

pub const RADAR_CHART: ChartSpec = ChartSpec {
    id: "radar",
    title: "Performance Metrics Radar",
    kind: ChartKind::Radar,
    series: RADAR_SERIES,
    y_max: None,
    tick_step: Some(20.0),
    fill: Palette::Single(SKY_FILL),
    stroke: Palette::Single(CYAN),
    border_width: 2.0,
    filled: true,
};

pub const PARAMETER_CHART: ChartSpec = bars(
    "parameters",
    "AMFF-CNN vs Base CNN",
    PARAMETER_SERIES,
    3.0,
    PAIR_FILL,
    PAIR_STROKE,
);

pub const LOSS_CHART: ChartSpec = curve("loss", "Loss Comparison", LOSS_SERIES, None);

pub const TRAINING_CHART: ChartSpec =
    curve("training", "Training Curves", TRAINING_SERIES, Some(1.0));

pub const VALIDATION_CHART: ChartSpec =
    curve("validation", "Validation Curves", VALIDATION_SERIES, Some(1.0));

pub const INFERENCE_CHART: ChartSpec = bars(
    "inference",
    "Inference Results",
    INFERENCE_SERIES,
    100.0,
    INFERENCE_FILL,
    INFERENCE_STROKE,
);

pub const PERFORMANCE_CHART: ChartSpec = ChartSpec {
    id: "performance",
    title: "Performance Metrics",
    ..INFERENCE_CHART
};

/// Axis grid color shared by all charts.
pub const GRID_COLOR: Rgba = Rgba::WHITE.with_alpha(0.1);
/// Radar rings are drawn a little brighter than cartesian grids.
pub const RADAR_GRID_COLOR: Rgba = Rgba::WHITE.with_alpha(0.2);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_lengths_match_palettes() {
        for chart in [ACCURACY_CHART, PARAMETER_CHART, INFERENCE_CHART] {
            let Palette::PerPoint(fill) = chart.fill else {
                panic!("{} should color each bar", chart.id);
            };
            assert_eq!(fill.len(), chart.series.len(), "{}", chart.id);
        }
    }

    #[test]
    fn test_axis_max() {
        assert_eq!(ACCURACY_CHART.axis_max(), 100.0);
        assert_eq!(PARAMETER_CHART.axis_max(), 3.0);
        assert_eq!(TRAINING_CHART.axis_max(), 1.0);
        assert_eq!(LOSS_CHART.axis_max(), 0.5);
        assert_eq!(RADAR_CHART.axis_max(), 100.0);
    }

    #[test]
    fn test_performance_chart_shares_inference_data() {
        assert_eq!(PERFORMANCE_CHART.series, INFERENCE_CHART.series);
        assert_ne!(PERFORMANCE_CHART.title, INFERENCE_CHART.title);
    }

    #[test]
    fn test_loss_curve_decreases() {
        let values: Vec<f64> = LOSS_SERIES.values().collect();
        assert!(values.windows(2).all(|w| w[1] < w[0]));
    }

    #[test]
    fn test_palette_wraps() {
        let palette = Palette::PerPoint(PAIR_FILL);
        assert_eq!(palette.color_at(2), CYAN);
        assert_eq!(Palette::PerPoint(&[]).color_at(0), Rgba::WHITE);
    }
}
