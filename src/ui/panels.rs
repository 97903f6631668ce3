use eframe::egui::Ui;

use crate::state::ViewerState;

// ---------------------------------------------------------------------------
// Bottom status bar
// ---------------------------------------------------------------------------

/// Export summary plus the viewer's only controls.
pub fn status_bar(ui: &mut Ui, state: &mut ViewerState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.label(state.summary());
        ui.separator();
        ui.checkbox(&mut state.show_annotations, "PC labels");
        if ui.button("Reset view").clicked() {
            state.reset_view = true;
        }
    });
}
