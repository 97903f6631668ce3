use std::ffi::OsString;

use eframe::egui;

use crate::figure::{style, Figure};
use crate::render::OutputPaths;
use crate::state::ViewerState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct ScreeViewerApp {
    pub state: ViewerState,
}

impl ScreeViewerApp {
    pub fn new(state: ViewerState) -> Self {
        Self { state }
    }
}

impl eframe::App for ScreeViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Bottom panel: export summary and view toggles ----
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            panels::status_bar(ui, &mut self.state);
        });

        // ---- Central panel: plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::variance_plot(ui, &mut self.state);
        });
    }
}

// ---------------------------------------------------------------------------
// Entry-points used by main
// ---------------------------------------------------------------------------

/// Open the interactive viewer and block until the window is closed.
pub fn show(figure: Figure, outputs: OutputPaths) -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 600.0])
            .with_min_inner_size([500.0, 300.0]),
        ..Default::default()
    };

    eframe::run_native(
        style::TITLE,
        options,
        Box::new(move |_cc| {
            Ok(Box::new(ScreeViewerApp::new(ViewerState::new(
                figure, outputs,
            ))))
        }),
    )
}

/// Whether a window can be opened in this session.
pub fn display_available() -> bool {
    display_in(|name| std::env::var_os(name))
}

fn display_in(lookup: impl Fn(&str) -> Option<OsString>) -> bool {
    if cfg!(any(target_os = "windows", target_os = "macos")) {
        return true;
    }
    ["DISPLAY", "WAYLAND_DISPLAY"]
        .iter()
        .any(|name| lookup(name).is_some_and(|value| !value.is_empty()))
}

#[cfg(all(test, not(any(target_os = "windows", target_os = "macos"))))]
mod tests {
    use super::*;

    #[test]
    fn headless_without_display_vars() {
        assert!(!display_in(|_| None));
        assert!(!display_in(|_| Some(OsString::new())));
    }

    #[test]
    fn x11_or_wayland_counts_as_display() {
        assert!(display_in(|name| (name == "DISPLAY").then(|| OsString::from(":0"))));
        assert!(display_in(|name| {
            (name == "WAYLAND_DISPLAY").then(|| OsString::from("wayland-0"))
        }));
    }
}
