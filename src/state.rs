use crate::figure::Figure;
use crate::render::OutputPaths;

// ---------------------------------------------------------------------------
// Viewer state
// ---------------------------------------------------------------------------

/// Everything the viewer window shows, independent of rendering.
pub struct ViewerState {
    /// The chart that was just exported.
    pub figure: Figure,

    /// Where the PNG and SVG were written (shown in the status bar).
    pub outputs: OutputPaths,

    /// Whether the PC labels are drawn.
    pub show_annotations: bool,

    /// Snap the plot back to the exported axis ranges on the next frame.
    pub reset_view: bool,
}

impl ViewerState {
    pub fn new(figure: Figure, outputs: OutputPaths) -> Self {
        Self {
            figure,
            outputs,
            show_annotations: true,
            // First frame starts from the exported ranges.
            reset_view: true,
        }
    }

    /// Consume a pending view reset.
    pub fn take_reset(&mut self) -> bool {
        std::mem::take(&mut self.reset_view)
    }

    /// One-line summary for the status bar.
    pub fn summary(&self) -> String {
        format!(
            "{} components  ·  saved {} and {}",
            self.figure.points.len(),
            self.outputs.png.display(),
            self.outputs.svg.display()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> ViewerState {
        let figure = Figure::new(&[1, 2, 3], &[50.0, 25.0, 25.0]).unwrap();
        ViewerState::new(figure, OutputPaths::from_base("variance_vs_rank"))
    }

    #[test]
    fn reset_is_pending_once() {
        let mut state = state();
        assert!(state.take_reset());
        assert!(!state.take_reset());
        state.reset_view = true;
        assert!(state.take_reset());
    }

    #[test]
    fn summary_lists_outputs() {
        let summary = state().summary();
        assert!(summary.starts_with("3 components"));
        assert!(summary.contains("variance_vs_rank.png"));
        assert!(summary.contains("variance_vs_rank.svg"));
    }
}
