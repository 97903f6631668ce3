use std::path::{Path, PathBuf};

use image::{ImageFormat, Rgb, RgbImage};
use plotters::prelude::*;

use super::chart::draw_figure;
use super::RenderError;
use crate::color;
use crate::figure::{style, Figure};

// ---------------------------------------------------------------------------
// Output locations
// ---------------------------------------------------------------------------

/// Raster and vector destinations sharing one base name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub png: PathBuf,
    pub svg: PathBuf,
}

impl OutputPaths {
    /// `variance_vs_rank` → `variance_vs_rank.png` + `variance_vs_rank.svg`.
    pub fn from_base(base: impl AsRef<Path>) -> Self {
        let base = base.as_ref();
        Self {
            png: base.with_extension("png"),
            svg: base.with_extension("svg"),
        }
    }
}

// ---------------------------------------------------------------------------
// Tight bounding box
// ---------------------------------------------------------------------------

/// Pixel rectangle on the rendered canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelBox {
    pub fn full(width: u32, height: u32) -> Self {
        Self {
            x: 0,
            y: 0,
            width,
            height,
        }
    }
}

/// Smallest box holding every pixel that differs from `background`, grown by
/// `pad` on each side and clamped to the image. `None` for a blank image.
pub fn tight_bbox(image: &RgbImage, background: Rgb<u8>, pad: u32) -> Option<PixelBox> {
    let mut bounds: Option<(u32, u32, u32, u32)> = None;

    for (x, y, pixel) in image.enumerate_pixels() {
        if *pixel == background {
            continue;
        }
        bounds = Some(match bounds {
            None => (x, y, x, y),
            Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
        });
    }

    let (x0, y0, x1, y1) = bounds?;
    let left = x0.saturating_sub(pad);
    let top = y0.saturating_sub(pad);
    let right = x1.saturating_add(pad + 1).min(image.width());
    let bottom = y1.saturating_add(pad + 1).min(image.height());

    Some(PixelBox {
        x: left,
        y: top,
        width: right - left,
        height: bottom - top,
    })
}

/// Point the SVG root at `bbox` and give it a physical size in inches so the
/// document matches the raster at `dpi`. The body is left untouched.
pub fn crop_svg(document: &str, bbox: PixelBox, dpi: f64) -> Result<String, RenderError> {
    let start = document.find("<svg").ok_or(RenderError::SvgRoot)?;
    let end = document[start..]
        .find('>')
        .map(|offset| start + offset)
        .ok_or(RenderError::SvgRoot)?;

    let root = format!(
        r#"<svg width="{:.3}in" height="{:.3}in" viewBox="{} {} {} {}" xmlns="http://www.w3.org/2000/svg">"#,
        f64::from(bbox.width) / dpi,
        f64::from(bbox.height) / dpi,
        bbox.x,
        bbox.y,
        bbox.width,
        bbox.height,
    );

    Ok(format!("{}{}{}", &document[..start], root, &document[end + 1..]))
}

// ---------------------------------------------------------------------------
// Export
// ---------------------------------------------------------------------------

/// Render `figure` as PNG and SVG and write both files.
///
/// Both documents are produced in memory first; nothing is written unless
/// every drawing step succeeded. Existing files are overwritten.
pub fn export(figure: &Figure, outputs: &OutputPaths) -> Result<(), RenderError> {
    if !figure.y_range.end.is_finite() {
        return Err(RenderError::NonFiniteAxis {
            upper: figure.y_range.end,
        });
    }

    let (width, height) = (figure.width_px, figure.height_px);

    let mut pixels = vec![0u8; width as usize * height as usize * 3];
    draw_figure(
        BitMapBackend::with_buffer(&mut pixels, (width, height)).into_drawing_area(),
        figure,
    )?;
    let raster = RgbImage::from_raw(width, height, pixels)
        .ok_or(RenderError::Buffer { width, height })?;

    let pad = (style::TIGHT_PAD_IN * style::DPI).round() as u32;
    let bbox = tight_bbox(&raster, color::to_rgb_pixel(color::BACKGROUND), pad)
        .unwrap_or_else(|| PixelBox::full(width, height));
    log::debug!("tight bounding box {bbox:?} on {width}x{height} canvas");

    let cropped =
        image::imageops::crop_imm(&raster, bbox.x, bbox.y, bbox.width, bbox.height).to_image();

    let mut svg = String::new();
    draw_figure(
        SVGBackend::with_string(&mut svg, (width, height)).into_drawing_area(),
        figure,
    )?;
    let svg = crop_svg(&svg, bbox, style::DPI)?;

    cropped
        .save_with_format(&outputs.png, ImageFormat::Png)
        .map_err(|source| RenderError::Encode {
            path: outputs.png.clone(),
            source,
        })?;
    std::fs::write(&outputs.svg, svg).map_err(|source| RenderError::Write {
        path: outputs.svg.clone(),
        source,
    })?;

    Ok(())
}
