//! Headless rendering of a [`Figure`](crate::figure::Figure) with [`plotters`].
//!
//! `chart` draws onto any plotters backend; `export` drives the bitmap and
//! SVG backends, crops both to the tight bounding box and writes the files.

use std::path::PathBuf;

use thiserror::Error;

pub mod chart;
pub mod export;

pub use export::{export, OutputPaths};

/// Errors that can occur while laying out or exporting the chart.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("no eigenvalues to plot")]
    EmptySeries,

    #[error("{ranks} ranks but {proportions} proportions")]
    LengthMismatch { ranks: usize, proportions: usize },

    #[error("Y-axis upper limit {upper} is not finite (is the total variance zero?)")]
    NonFiniteAxis { upper: f64 },

    #[error("Failed to draw chart elements: {0}")]
    Drawing(String),

    #[error("raster buffer does not match the {width}x{height} canvas")]
    Buffer { width: u32, height: u32 },

    #[error("SVG output has no root element")]
    SvgRoot,

    #[error("Failed to encode {}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
