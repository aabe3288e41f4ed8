//! SVG chart cards.

use amff_core::chart::radar_point;
use amff_core::metrics::{GRID_COLOR, RADAR_GRID_COLOR};
use amff_core::{
    bar_layout, line_layout, radar_layout, radar_rings, tick_label, value_ticks, ChartKind,
    ChartSpec,
};
use leptos::prelude::*;

const WIDTH: f32 = 400.0;
const HEIGHT: f32 = 260.0;
const PAD_LEFT: f32 = 44.0;
const PAD_RIGHT: f32 = 12.0;
const PAD_TOP: f32 = 12.0;
const PAD_BOTTOM: f32 = 36.0;
const TICK_DIVISIONS: usize = 5;
const LABEL_COLOR: &str = "rgba(255, 255, 255, 0.85)";

/// Maps unit-square coordinates into the plot area of the SVG viewport.
#[derive(Clone, Copy)]
struct PlotArea {
    left: f32,
    top: f32,
    width: f32,
    height: f32,
}

impl PlotArea {
    fn cartesian() -> Self {
        Self {
            left: PAD_LEFT,
            top: PAD_TOP,
            width: WIDTH - PAD_LEFT - PAD_RIGHT,
            height: HEIGHT - PAD_TOP - PAD_BOTTOM,
        }
    }

    fn radar() -> Self {
        let side = HEIGHT - 2.0 * PAD_BOTTOM;
        Self {
            left: (WIDTH - side) * 0.5,
            top: PAD_BOTTOM,
            width: side,
            height: side,
        }
    }

    fn x(&self, fx: f32) -> f32 {
        self.left + fx * self.width
    }

    fn y(&self, fy: f32) -> f32 {
        self.top + (1.0 - fy) * self.height
    }

    fn point(&self, p: [f32; 2]) -> String {
        format!("{},{}", num(self.x(p[0])), num(self.y(p[1])))
    }

    fn points(&self, ps: &[[f32; 2]]) -> String {
        ps.iter().map(|p| self.point(*p)).collect::<Vec<_>>().join(" ")
    }
}

/// SVG attribute text for a coordinate.
fn num(value: f32) -> String {
    format!("{:.1}", value)
}

#[component]
pub fn ChartCard(spec: ChartSpec) -> impl IntoView {
    let body = match spec.kind {
        ChartKind::Bar => bar_chart(&spec).into_any(),
        ChartKind::Line => line_chart(&spec).into_any(),
        ChartKind::Radar => radar_chart(&spec).into_any(),
    };

    view! {
        <div class="chart-container">
            <h3 class="chart-title">{spec.title}</h3>
            <svg
                class="chart"
                viewBox=format!("0 0 {} {}", WIDTH, HEIGHT)
            >
                {body}
            </svg>
        </div>
    }
}

/// Horizontal grid lines with value labels on the left.
fn value_axis(spec: &ChartSpec, area: PlotArea) -> impl IntoView {
    let grid = GRID_COLOR.to_css();
    value_ticks(spec, TICK_DIVISIONS)
        .into_iter()
        .map(|(value, fy)| {
            let y = area.y(fy);
            view! {
                <line
                    x1=num(area.x(0.0))
                    y1=num(y)
                    x2=num(area.x(1.0))
                    y2=num(y)
                    stroke=grid.clone()
                    stroke-width="1"
                />
                <text
                    x=num(area.left - 6.0)
                    y=num(y + 4.0)
                    text-anchor="end"
                    font-size="11"
                    fill=LABEL_COLOR
                >
                    {tick_label(value)}
                </text>
            }
        })
        .collect_view()
}

fn category_label(area: PlotArea, fx: f32, label: &'static str) -> impl IntoView {
    let (x, y) = (num(area.x(fx)), num(area.y(0.0) + 18.0));
    view! {
        <text x=x y=y text-anchor="middle" font-size="11" fill=LABEL_COLOR>
            {label}
        </text>
    }
}

fn bar_chart(spec: &ChartSpec) -> impl IntoView {
    let area = PlotArea::cartesian();
    let bars = bar_layout(spec)
        .into_iter()
        .enumerate()
        .map(|(i, bar)| {
            let y = area.y(bar.top);
            let height = area.y(0.0) - y;
            let width = area.x(bar.x1) - area.x(bar.x0);
            view! {
                <rect
                    x=num(area.x(bar.x0))
                    y=num(y)
                    width=num(width)
                    height=num(height)
                    fill=spec.fill.color_at(i).to_css()
                    stroke=spec.stroke.color_at(i).to_css()
                    stroke-width=num(spec.border_width)
                />
                {category_label(area, bar.center_x(), bar.label)}
            }
        })
        .collect_view();

    view! {
        {value_axis(spec, area)}
        {bars}
    }
}

fn line_chart(spec: &ChartSpec) -> impl IntoView {
    let area = PlotArea::cartesian();
    let layout = line_layout(spec);
    let stroke = spec.stroke.color_at(0).to_css();

    // Filled curves close the polygon along the zero line.
    let fill = spec.filled.then(|| {
        let mut outline = layout.clone();
        if let (Some(first), Some(last)) = (layout.first(), layout.last()) {
            outline.push([last[0], 0.0]);
            outline.push([first[0], 0.0]);
        }
        view! { <polygon points=area.points(&outline) fill=spec.fill.color_at(0).to_css() stroke="none" /> }
    });

    let markers = layout
        .iter()
        .zip(spec.series.labels())
        .map(|(p, label)| {
            view! {
                <circle cx=num(area.x(p[0])) cy=num(area.y(p[1])) r="3" fill=stroke.clone() />
                {category_label(area, p[0], label)}
            }
        })
        .collect_view();

    view! {
        {value_axis(spec, area)}
        {fill}
        <polyline
            points=area.points(&layout)
            fill="none"
            stroke=stroke.clone()
            stroke-width=num(spec.border_width)
        />
        {markers}
    }
}

fn radar_chart(spec: &ChartSpec) -> impl IntoView {
    let area = PlotArea::radar();
    let n = spec.series.len();
    let grid = RADAR_GRID_COLOR.to_css();
    let max = spec.axis_max();

    let rings = radar_rings(spec)
        .into_iter()
        .map(|ring| {
            let outline: Vec<[f32; 2]> = (0..n).map(|i| radar_point(i, n, ring)).collect();
            let label_at = [0.5, 0.5 + 0.5 * ring];
            view! {
                <polygon points=area.points(&outline) fill="none" stroke=grid.clone() stroke-width="1" />
                <text
                    x=num(area.x(label_at[0]) + 3.0)
                    y=num(area.y(label_at[1]))
                    font-size="10"
                    fill=LABEL_COLOR
                >
                    {tick_label(ring as f64 * max)}
                </text>
            }
        })
        .collect_view();

    let spokes = spec
        .series
        .labels()
        .enumerate()
        .map(|(i, label)| {
            let end = radar_point(i, n, 1.0);
            let label_at = radar_point(i, n, 1.18);
            view! {
                <line
                    x1=num(area.x(0.5))
                    y1=num(area.y(0.5))
                    x2=num(area.x(end[0]))
                    y2=num(area.y(end[1]))
                    stroke=grid.clone()
                    stroke-width="1"
                />
                <text
                    x=num(area.x(label_at[0]))
                    y=num(area.y(label_at[1]) + 4.0)
                    text-anchor="middle"
                    font-size="12"
                    fill=LABEL_COLOR
                >
                    {label}
                </text>
            }
        })
        .collect_view();

    let vertices = radar_layout(spec);
    let stroke = spec.stroke.color_at(0).to_css();
    let markers = vertices
        .iter()
        .map(|p| {
            view! { <circle cx=num(area.x(p[0])) cy=num(area.y(p[1])) r="3" fill=stroke.clone() /> }
        })
        .collect_view();

    view! {
        {rings}
        {spokes}
        <polygon
            points=area.points(&vertices)
            fill=spec.fill.color_at(0).to_css()
            stroke=stroke.clone()
            stroke-width=num(spec.border_width)
        />
        {markers}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plot_area_flips_y() {
        let area = PlotArea::cartesian();
        assert_eq!(area.y(1.0), PAD_TOP);
        assert_eq!(area.y(0.0), HEIGHT - PAD_BOTTOM);
        assert_eq!(area.x(0.0), PAD_LEFT);
    }

    #[test]
    fn test_radar_area_is_square_and_centered() {
        let area = PlotArea::radar();
        assert_eq!(area.width, area.height);
        assert!((area.x(0.5) - WIDTH * 0.5).abs() < 1e-3);
    }

    #[test]
    fn test_points_format() {
        let area = PlotArea::cartesian();
        assert_eq!(area.points(&[[0.0, 1.0], [1.0, 0.0]]), "44.0,12.0 388.0,224.0");
    }
}
