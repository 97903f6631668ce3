mod app;
mod color;
mod data;
mod figure;
mod render;
mod state;
mod ui;

use std::path::Path;

use anyhow::{Context, Result};

use data::{analysis, loader};
use figure::{style, Figure};
use render::OutputPaths;

/// GROMACS `gmx covar` eigenvalue output, read from the working directory.
const INPUT_FILE: &str = "eigenval.xvg";
/// Base name of the `.png` / `.svg` pair written to the working directory.
const OUTPUT_BASE: &str = "variance_vs_rank";

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let series = loader::load_eigenvalues(Path::new(INPUT_FILE))
        .with_context(|| format!("loading eigenvalues from {INPUT_FILE}"))?;
    if series.is_empty() {
        log::warn!("{INPUT_FILE} has no data lines");
    } else {
        log::info!("Loaded {} eigenvalues from {INPUT_FILE}", series.len());
    }

    if let Some(rank) = analysis::descending_violation(series.values()) {
        log::warn!(
            "Eigenvalue at rank {rank} is larger than the one before it; \
             the Y limit and PC labels assume values sorted largest-first"
        );
    }

    let profile = analysis::analyze(&series);
    if !profile.is_empty() {
        let shown = style::ANNOTATED_COMPONENTS.min(profile.len());
        log::info!(
            "Total variance {:.6}; first {shown} components explain {:.1}%",
            profile.total,
            profile.cumulative(shown)
        );
    }

    let figure = Figure::from_profile(&profile).context("laying out variance chart")?;
    let outputs = OutputPaths::from_base(OUTPUT_BASE);
    render::export(&figure, &outputs).context("exporting variance chart")?;
    log::info!(
        "Saved {} and {}",
        outputs.png.display(),
        outputs.svg.display()
    );

    if !app::display_available() {
        log::info!("No display detected, skipping interactive viewer");
        return Ok(());
    }
    if let Err(e) = app::show(figure, outputs) {
        log::warn!("Interactive viewer unavailable: {e}");
    }

    Ok(())
}
