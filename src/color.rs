use eframe::egui::Color32;
use plotters::style::RGBColor;

// ---------------------------------------------------------------------------
// Chart palette
// ---------------------------------------------------------------------------

/// Series line and marker edges.
pub const SERIES: RGBColor = RGBColor(0, 0, 255);
/// Marker fill.
pub const MARKER_FACE: RGBColor = RGBColor(255, 255, 255);
/// Gridlines (at `GRID_ALPHA` opacity) and the opaque legend frame.
pub const GRID: RGBColor = RGBColor(176, 176, 176);
/// Text and axes.
pub const INK: RGBColor = RGBColor(0, 0, 0);
/// Canvas fill. The tight bounding box treats this colour as empty.
pub const BACKGROUND: RGBColor = RGBColor(255, 255, 255);

// ---------------------------------------------------------------------------
// Conversion for the egui viewer
// ---------------------------------------------------------------------------

/// Convert a chart colour plus opacity (0.0 – 1.0) to an egui colour.
pub fn to_color32(color: RGBColor, alpha: f64) -> Color32 {
    let RGBColor(r, g, b) = color;
    let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgba_unmultiplied(r, g, b, a)
}

/// Same colour as an `image` pixel, for scanning rendered rasters.
pub fn to_rgb_pixel(color: RGBColor) -> image::Rgb<u8> {
    let RGBColor(r, g, b) = color;
    image::Rgb([r, g, b])
}
