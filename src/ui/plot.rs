use eframe::egui::{Align2, RichText, Ui};
use egui_plot::{Legend, Line, MarkerShape, Plot, PlotBounds, PlotPoint, PlotPoints, Points, Text};

use crate::color;
use crate::figure::style;
use crate::state::ViewerState;

// Screen sizes for the viewer; the exported files use the point sizes in
// `figure::style` at 300 dpi instead.
const LINE_WIDTH: f32 = 1.5;
const MARKER_RADIUS: f32 = 3.5;
const ANNOTATION_SIZE: f32 = 12.0;

// ---------------------------------------------------------------------------
// Variance plot (central panel)
// ---------------------------------------------------------------------------

/// Render the rank-vs-variance chart in the central panel.
pub fn variance_plot(ui: &mut Ui, state: &mut ViewerState) {
    let reset = state.take_reset();
    let figure = &state.figure;
    let series_color = color::to_color32(color::SERIES, 1.0);

    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(style::TITLE);
    });

    Plot::new("variance_plot")
        .legend(Legend::default())
        .x_axis_label(style::X_LABEL)
        .y_axis_label(style::Y_LABEL)
        .show_grid(true)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            if reset {
                plot_ui.set_plot_bounds(PlotBounds::from_min_max(
                    [figure.x_range.start, figure.y_range.start],
                    [figure.x_range.end, figure.y_range.end],
                ));
            }

            let line: PlotPoints = figure.points.iter().map(|&(x, y)| [x, y]).collect();
            plot_ui.line(
                Line::new(line)
                    .name(style::SERIES_LABEL)
                    .color(series_color)
                    .width(LINE_WIDTH),
            );

            let markers: PlotPoints = figure.points.iter().map(|&(x, y)| [x, y]).collect();
            plot_ui.points(
                Points::new(markers)
                    .name(style::SERIES_LABEL)
                    .shape(MarkerShape::Circle)
                    .radius(MARKER_RADIUS)
                    .filled(false)
                    .color(series_color),
            );

            if state.show_annotations {
                for annotation in &figure.annotations {
                    plot_ui.text(
                        Text::new(
                            PlotPoint::new(annotation.x, annotation.y),
                            RichText::new(&annotation.text).size(ANNOTATION_SIZE),
                        )
                        .anchor(Align2::LEFT_TOP)
                        .color(color::to_color32(color::INK, 1.0)),
                    );
                }
            }
        });
}
