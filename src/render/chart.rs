use plotters::coord::ranged1d::Ranged;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::RenderError;
use crate::color;
use crate::figure::{points_to_px, style, Figure};

/// Tick count hint shared by the axis labels and the dashed grid so that
/// gridlines sit on labelled ticks.
const X_TICKS: usize = 10;
const Y_TICKS: usize = 10;

const OUTER_MARGIN_PT: f64 = 12.0;
const X_LABEL_AREA_PT: f64 = 40.0;
const Y_LABEL_AREA_PT: f64 = 48.0;
const TICK_MARK_PT: f64 = 3.5;
const LEGEND_MARGIN_PT: f64 = 8.0;
const LEGEND_GLYPH_PT: f64 = 22.0;
const GRID_DASH_PT: f64 = 3.0;
const GRID_GAP_PT: f64 = 1.3;

fn px(points: f64) -> u32 {
    points_to_px(points).round() as u32
}

fn drawing_err<E: std::error::Error + Send + Sync>(err: DrawingAreaErrorKind<E>) -> RenderError {
    RenderError::Drawing(err.to_string())
}

/// Rank axis labels: whole ranks without a trailing `.0`.
fn rank_tick_label(x: f64) -> String {
    if x.fract() == 0.0 {
        format!("{x:.0}")
    } else {
        format!("{x}")
    }
}

fn font(points: f64, font_style: FontStyle) -> FontDesc<'static> {
    FontDesc::new(FontFamily::SansSerif, points_to_px(points), font_style)
}

/// Draw the whole chart onto `root` and flush the backend.
///
/// Works for any plotters backend; the exporters call it once with the
/// bitmap backend and once with the SVG backend at the same pixel size.
pub fn draw_figure<DB: DrawingBackend>(
    root: DrawingArea<DB, Shift>,
    figure: &Figure,
) -> Result<(), RenderError> {
    root.fill(&color::BACKGROUND).map_err(drawing_err)?;

    let margin = px(OUTER_MARGIN_PT);
    let body = root
        .margin(margin, margin, margin, margin)
        .titled(
            style::TITLE,
            font(style::TITLE_PT, FontStyle::Normal).color(&color::INK),
        )
        .map_err(drawing_err)?
        .margin(px(style::TITLE_PAD_PT), 0, 0, 0);

    let mut chart = ChartBuilder::on(&body)
        .x_label_area_size(px(X_LABEL_AREA_PT))
        .y_label_area_size(px(Y_LABEL_AREA_PT))
        .build_cartesian_2d(figure.x_range.clone(), figure.y_range.clone())
        .map_err(drawing_err)?;

    // Axes, ticks and labels only; the grid is drawn dashed below.
    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(X_TICKS)
        .y_labels(Y_TICKS)
        .x_label_formatter(&|x| rank_tick_label(*x))
        .x_desc(style::X_LABEL)
        .y_desc(style::Y_LABEL)
        .label_style(font(style::TICK_LABEL_PT, FontStyle::Normal).color(&color::INK))
        .axis_desc_style(font(style::AXIS_LABEL_PT, FontStyle::Bold).color(&color::INK))
        .axis_style(color::INK.stroke_width(px(style::AXIS_WIDTH_PT)))
        .set_all_tick_mark_size(px(TICK_MARK_PT))
        .draw()
        .map_err(drawing_err)?;

    // ---- Dashed grid ----
    let (x_ticks, y_ticks) = {
        let coord = chart.as_coord_spec();
        (
            coord.x_spec().key_points(X_TICKS),
            coord.y_spec().key_points(Y_TICKS),
        )
    };
    let (x0, x1) = (figure.x_range.start, figure.x_range.end);
    let (y0, y1) = (figure.y_range.start, figure.y_range.end);
    let grid = color::GRID
        .mix(style::GRID_ALPHA)
        .stroke_width(px(style::GRID_WIDTH_PT));

    let gridlines = x_ticks
        .iter()
        .map(|&x| [(x, y0), (x, y1)])
        .chain(y_ticks.iter().map(|&y| [(x0, y), (x1, y)]));
    for segment in gridlines {
        chart
            .draw_series(DashedLineSeries::new(
                segment,
                px(GRID_DASH_PT),
                px(GRID_GAP_PT),
                grid,
            ))
            .map_err(drawing_err)?;
    }

    // ---- Series: line, then hollow markers on top ----
    let line_style = color::SERIES.stroke_width(px(style::LINE_WIDTH_PT));
    let edge_style = color::SERIES.stroke_width(px(style::MARKER_EDGE_PT));
    let face_style = color::MARKER_FACE.filled();
    let radius = (points_to_px(style::MARKER_SIZE_PT) / 2.0).round() as i32;
    let glyph_len = px(LEGEND_GLYPH_PT) as i32;

    chart
        .draw_series(LineSeries::new(figure.points.iter().copied(), line_style))
        .map_err(drawing_err)?
        .label(style::SERIES_LABEL)
        .legend(move |(x, y)| {
            EmptyElement::at((x, y))
                + PathElement::new(vec![(0, 0), (glyph_len, 0)], line_style)
                + Circle::new((glyph_len / 2, 0), radius, face_style)
                + Circle::new((glyph_len / 2, 0), radius, edge_style)
        });

    chart
        .draw_series(figure.points.iter().map(|&point| {
            EmptyElement::at(point)
                + Circle::new((0, 0), radius, face_style)
                + Circle::new((0, 0), radius, edge_style)
        }))
        .map_err(drawing_err)?;

    // ---- Component annotations, anchored top-left ----
    let text_style = font(style::ANNOTATION_PT, FontStyle::Normal)
        .color(&color::INK)
        .pos(Pos::new(HPos::Left, VPos::Top));
    for annotation in &figure.annotations {
        let mut label =
            MultiLineText::<_, String>::new((annotation.x, annotation.y), text_style.clone());
        for line in annotation.lines() {
            label.push_line(line.to_string());
        }
        chart
            .draw_series(std::iter::once(label))
            .map_err(drawing_err)?;
    }

    chart
        .configure_series_labels()
        .label_font(font(style::LEGEND_PT, FontStyle::Normal))
        .background_style(&color::BACKGROUND.mix(0.8))
        .border_style(&color::GRID)
        .margin(px(LEGEND_MARGIN_PT))
        .legend_area_size(px(LEGEND_GLYPH_PT))
        .position(SeriesLabelPosition::UpperRight)
        .draw()
        .map_err(drawing_err)?;

    root.present().map_err(drawing_err)?;
    Ok(())
}
