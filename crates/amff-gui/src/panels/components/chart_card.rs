//! Chart card widget - titled frame around a bar, line or radar chart

use amff_core::chart::{radar_layout, radar_point, radar_rings};
use amff_core::metrics::RADAR_GRID_COLOR;
use amff_core::{ChartKind, ChartSpec};
use eframe::egui::{self, pos2, vec2, Align2, FontId, Pos2, Rect, Sense, Shape, Stroke};
use egui_plot::{Bar, BarChart, GridMark, Line, Plot, PlotPoints, PlotUi, Points};

use crate::theme;

const DEFAULT_HEIGHT: f32 = 260.0;
/// Room around the radar for spoke labels.
const RADAR_LABEL_MARGIN: f32 = 36.0;

/// Chart card widget
pub struct ChartCard<'a> {
    spec: &'a ChartSpec,
    height: f32,
}

impl<'a> ChartCard<'a> {
    pub fn new(spec: &'a ChartSpec) -> Self {
        Self {
            spec,
            height: DEFAULT_HEIGHT,
        }
    }

    pub fn show(self, ui: &mut egui::Ui) {
        theme::card_frame(None).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new(self.spec.title).strong().color(theme::TEXT));
            });
            ui.add_space(8.0);

            match self.spec.kind {
                ChartKind::Bar => self.bar_chart(ui),
                ChartKind::Line => self.line_chart(ui),
                ChartKind::Radar => self.radar_chart(ui),
            }
        });
    }

    fn show_plot(&self, ui: &mut egui::Ui, add_contents: impl FnOnce(&mut PlotUi)) {
        let labels: Vec<&'static str> = self.spec.series.labels().collect();
        let last = labels.len().saturating_sub(1) as f64;

        Plot::new(self.spec.id)
            .height(self.height)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .show_x(false)
            .show_y(false)
            .show_background(false)
            .include_y(0.0)
            .include_y(self.spec.axis_max())
            .include_x(-0.5)
            .include_x(last + 0.5)
            .x_grid_spacer(move |_input| {
                (0..=last as usize)
                    .map(|i| GridMark {
                        value: i as f64,
                        step_size: 1.0,
                    })
                    .collect()
            })
            .x_axis_formatter(move |mark, _range| category_label(&labels, mark.value))
            .label_formatter(|name, point| {
                if name.is_empty() {
                    String::new()
                } else {
                    format!("{}: {}", name, point.y)
                }
            })
            .show_grid(true)
            .show(ui, add_contents);
    }

    fn bar_chart(&self, ui: &mut egui::Ui) {
        let spec = self.spec;
        let bars: Vec<Bar> = spec
            .series
            .points
            .iter()
            .enumerate()
            .map(|(i, (label, value))| {
                Bar::new(i as f64, *value)
                    .width(0.72)
                    .name(*label)
                    .fill(theme::color(spec.fill.color_at(i)))
                    .stroke(Stroke::new(
                        spec.border_width,
                        theme::color(spec.stroke.color_at(i)),
                    ))
            })
            .collect();

        self.show_plot(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name(spec.series.name));
        });
    }

    fn line_chart(&self, ui: &mut egui::Ui) {
        let spec = self.spec;
        let stroke = theme::color(spec.stroke.color_at(0));
        let coords: Vec<[f64; 2]> = spec
            .series
            .values()
            .enumerate()
            .map(|(i, value)| [i as f64, value])
            .collect();

        self.show_plot(ui, |plot_ui| {
            let mut line = Line::new(PlotPoints::from(coords.clone()))
                .color(stroke)
                .width(spec.border_width)
                .name(spec.series.name);
            if spec.filled {
                line = line.fill(0.0);
            }
            plot_ui.line(line);
            plot_ui.points(
                Points::new(PlotPoints::from(coords))
                    .radius(3.0)
                    .color(stroke)
                    .name(spec.series.name),
            );
        });
    }

    fn radar_chart(&self, ui: &mut egui::Ui) {
        let spec = self.spec;
        let (response, painter) =
            ui.allocate_painter(vec2(ui.available_width(), self.height), Sense::hover());
        let rect = response.rect;
        let side = (rect.width().min(rect.height()) - 2.0 * RADAR_LABEL_MARGIN).max(10.0);
        let square = Rect::from_center_size(rect.center(), vec2(side, side));
        let to_screen = |p: [f32; 2]| -> Pos2 {
            pos2(
                square.left() + p[0] * square.width(),
                square.bottom() - p[1] * square.height(),
            )
        };

        let n = spec.series.len();
        let center = to_screen([0.5, 0.5]);
        let grid = Stroke::new(1.0, theme::color(RADAR_GRID_COLOR));
        let max = spec.axis_max();

        for ring in radar_rings(spec) {
            let outline: Vec<Pos2> = (0..n).map(|i| to_screen(radar_point(i, n, ring))).collect();
            painter.add(Shape::closed_line(outline, grid));
            painter.text(
                to_screen([0.5, 0.5 + 0.5 * ring]),
                Align2::LEFT_BOTTOM,
                format!("{}", (ring as f64 * max).round()),
                FontId::proportional(10.0),
                theme::TEXT_DIM,
            );
        }

        for (i, label) in spec.series.labels().enumerate() {
            painter.line_segment([center, to_screen(radar_point(i, n, 1.0))], grid);
            painter.text(
                to_screen(radar_point(i, n, 1.18)),
                Align2::CENTER_CENTER,
                label,
                FontId::proportional(12.0),
                theme::TEXT,
            );
        }

        let vertices: Vec<Pos2> = radar_layout(spec).into_iter().map(to_screen).collect();
        let fill = theme::color(spec.fill.color_at(0));
        let stroke = theme::color(spec.stroke.color_at(0));

        // The dataset polygon can be concave, so fill it as a fan of triangles.
        for i in 0..vertices.len() {
            let next = vertices[(i + 1) % vertices.len()];
            painter.add(Shape::convex_polygon(
                vec![center, vertices[i], next],
                fill,
                Stroke::NONE,
            ));
        }
        painter.add(Shape::closed_line(
            vertices.clone(),
            Stroke::new(spec.border_width, stroke),
        ));
        for vertex in vertices {
            painter.circle_filled(vertex, 3.0, stroke);
        }
    }
}

/// Two charts side by side.
pub fn chart_row(ui: &mut egui::Ui, charts: &[ChartSpec; 2]) {
    ui.columns(2, |columns| {
        for (column, spec) in columns.iter_mut().zip(charts) {
            ChartCard::new(spec).show(column);
        }
    });
    ui.add_space(12.0);
}

fn category_label(labels: &[&str], value: f64) -> String {
    let index = value.round();
    if (value - index).abs() > 1e-6 || index < 0.0 {
        return String::new();
    }
    labels
        .get(index as usize)
        .map(|label| label.to_string())
        .unwrap_or_default()
}
