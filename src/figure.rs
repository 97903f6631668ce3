//! Backend-independent description of the variance chart.
//!
//! A [`Figure`] holds everything the exporters and the viewer need: canvas
//! geometry, axis ranges, the data points and the component annotations.
//! Building one does no drawing, so the layout rules can be checked without
//! fonts or a display.

use std::ops::Range;

use crate::data::model::VarianceProfile;
use crate::render::RenderError;

/// Fixed chart styling. Sizes are typographic points unless noted.
pub mod style {
    /// Output resolution, dots per inch.
    pub const DPI: f64 = 300.0;
    pub const WIDTH_IN: f64 = 10.0;
    pub const HEIGHT_IN: f64 = 6.0;
    /// Whitespace kept around the content when cropping to the tight box.
    pub const TIGHT_PAD_IN: f64 = 0.1;

    pub const TITLE: &str = "Variance Distribution by Eigenvalue Rank";
    pub const X_LABEL: &str = "Eigenvalue Rank";
    pub const Y_LABEL: &str = "Proportion of Variance (%)";
    pub const SERIES_LABEL: &str = "Proportion of Variance";

    pub const TITLE_PT: f64 = 14.0;
    pub const TITLE_PAD_PT: f64 = 15.0;
    pub const AXIS_LABEL_PT: f64 = 12.0;
    pub const TICK_LABEL_PT: f64 = 10.0;
    pub const LEGEND_PT: f64 = 10.0;
    pub const ANNOTATION_PT: f64 = 9.0;

    /// Marker diameter.
    pub const MARKER_SIZE_PT: f64 = 5.0;
    pub const MARKER_EDGE_PT: f64 = 1.5;
    pub const LINE_WIDTH_PT: f64 = 1.5;
    pub const AXIS_WIDTH_PT: f64 = 0.8;
    pub const GRID_WIDTH_PT: f64 = 0.8;
    pub const GRID_ALPHA: f64 = 0.3;

    /// Only the first 20 ranks are shown, with half a rank of slack.
    pub const X_MIN: f64 = 0.5;
    pub const X_MAX: f64 = 20.5;
    /// Percentage points added above the first proportion.
    pub const Y_HEADROOM: f64 = 5.0;

    /// How many leading components get a text label.
    pub const ANNOTATED_COMPONENTS: usize = 5;
    /// Label offset from its data point, in data units.
    pub const ANNOTATION_DX: f64 = 0.3;
    pub const ANNOTATION_DY: f64 = -2.0;
}

/// Convert typographic points to device pixels at [`style::DPI`].
pub fn points_to_px(points: f64) -> f64 {
    points * style::DPI / 72.0
}

/// Label text for a component: `PC<rank>` over the percentage to one decimal.
pub fn annotation_label(rank: u32, proportion: f64) -> String {
    format!("PC{rank}\n{proportion:.1}%")
}

/// Text placed next to one of the leading data points. The anchor is the
/// label's top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub x: f64,
    pub y: f64,
    pub text: String,
}

impl Annotation {
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.lines()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub width_px: u32,
    pub height_px: u32,
    /// `(rank, proportion)` pairs in rank order.
    pub points: Vec<(f64, f64)>,
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
    pub annotations: Vec<Annotation>,
}

impl Figure {
    /// Lay out the chart for parallel rank / proportion sequences.
    ///
    /// Fails on an empty sequence instead of indexing into it for the Y
    /// limit. The Y limit is taken from the first proportion, which is the
    /// largest only when the input is sorted descending.
    pub fn new(ranks: &[u32], proportions: &[f64]) -> Result<Self, RenderError> {
        if ranks.len() != proportions.len() {
            return Err(RenderError::LengthMismatch {
                ranks: ranks.len(),
                proportions: proportions.len(),
            });
        }
        let Some(&first) = proportions.first() else {
            return Err(RenderError::EmptySeries);
        };

        let points: Vec<(f64, f64)> = ranks
            .iter()
            .zip(proportions)
            .map(|(&rank, &proportion)| (f64::from(rank), proportion))
            .collect();

        let annotations = ranks
            .iter()
            .zip(proportions)
            .take(style::ANNOTATED_COMPONENTS.min(ranks.len()))
            .map(|(&rank, &proportion)| Annotation {
                x: f64::from(rank) + style::ANNOTATION_DX,
                y: proportion + style::ANNOTATION_DY,
                text: annotation_label(rank, proportion),
            })
            .collect();

        Ok(Self {
            width_px: (style::WIDTH_IN * style::DPI).round() as u32,
            height_px: (style::HEIGHT_IN * style::DPI).round() as u32,
            points,
            x_range: style::X_MIN..style::X_MAX,
            y_range: 0.0..first + style::Y_HEADROOM,
            annotations,
        })
    }

    pub fn from_profile(profile: &VarianceProfile) -> Result<Self, RenderError> {
        Self::new(&profile.ranks, &profile.proportions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canvas_is_ten_by_six_inches_at_300_dpi() {
        let fig = Figure::new(&[1], &[100.0]).unwrap();
        assert_eq!((fig.width_px, fig.height_px), (3000, 1800));
    }

    #[test]
    fn single_point_y_limit() {
        let fig = Figure::new(&[1], &[100.0]).unwrap();
        assert_eq!(fig.y_range, 0.0..105.0);
        assert_eq!(fig.x_range, 0.5..20.5);
        assert_eq!(fig.annotations.len(), 1);
    }

    #[test]
    fn empty_sequence_is_rejected() {
        let err = Figure::new(&[], &[]).unwrap_err();
        assert!(matches!(err, RenderError::EmptySeries));
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        let err = Figure::new(&[1, 2], &[100.0]).unwrap_err();
        assert!(matches!(
            err,
            RenderError::LengthMismatch {
                ranks: 2,
                proportions: 1
            }
        ));
    }

    #[test]
    fn annotations_for_first_five_only() {
        let ranks: Vec<u32> = (1..=8).collect();
        let proportions = [40.0, 20.0, 12.0, 9.0, 7.0, 5.0, 4.0, 3.0];
        let fig = Figure::new(&ranks, &proportions).unwrap();

        assert_eq!(fig.points.len(), 8);
        assert_eq!(fig.annotations.len(), 5);
        let first = &fig.annotations[0];
        assert!((first.x - 1.3).abs() < 1e-12);
        assert_eq!(first.y, 38.0);
        assert_eq!(first.text, "PC1\n40.0%");
        assert_eq!(fig.annotations[4].text, "PC5\n7.0%");
    }

    #[test]
    fn annotation_count_clamped_to_length() {
        let fig = Figure::new(&[1, 2, 3], &[50.0, 25.0, 25.0]).unwrap();
        assert_eq!(fig.annotations.len(), 3);
        assert_eq!(fig.y_range.end, 55.0);
    }

    #[test]
    fn label_has_exactly_one_decimal() {
        assert_eq!(annotation_label(1, 50.0), "PC1\n50.0%");
        assert_eq!(annotation_label(2, 33.333_333), "PC2\n33.3%");
        assert_eq!(annotation_label(3, 12.96), "PC3\n13.0%");
    }

    #[test]
    fn annotation_lines_split_on_newline() {
        let fig = Figure::new(&[1], &[100.0]).unwrap();
        let lines: Vec<&str> = fig.annotations[0].lines().collect();
        assert_eq!(lines, vec!["PC1", "100.0%"]);
    }

    #[test]
    fn points_to_px_at_300_dpi() {
        assert_eq!(points_to_px(72.0), 300.0);
        assert_eq!(points_to_px(12.0), 50.0);
    }
}
