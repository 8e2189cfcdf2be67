use std::path::Path;

use eframe::egui::{self, Color32, RichText, Ui};

use crate::state::{AppState, PlotKind};

// ---------------------------------------------------------------------------
// Left side panel – pitch-axis controls
// ---------------------------------------------------------------------------

/// Render the left control panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Pitch axis");
    ui.separator();

    if state.nodes.is_none() {
        ui.label("No case loaded.");
        return;
    }

    ui.strong("Chordwise filter");
    ui.horizontal(|ui: &mut Ui| {
        ui.label("x ref [m]");
        ui.add(egui::DragValue::new(&mut state.x_ref).speed(0.001));
    });
    ui.horizontal(|ui: &mut Ui| {
        ui.label("tolerance [m]");
        ui.add(
            egui::DragValue::new(&mut state.tolerance)
                .speed(0.001)
                .range(0.0..=f64::INFINITY),
        );
    });
    ui.separator();

    ui.checkbox(&mut state.show_pitch, "Overlay pitch-axis nodes");
    ui.checkbox(&mut state.show_stations, "Overlay station representatives");
    ui.separator();

    // Recompute cached indices after any control change.
    state.refilter();

    let total = state.nodes.as_ref().map(|set| set.len()).unwrap_or(0);
    ui.label(format!(
        "{} of {} nodes on the pitch axis",
        state.pitch_indices.len(),
        total
    ));
    ui.label(format!("{} spanwise stations", state.station_indices.len()));
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_case_dialog(state);
                ui.close_menu();
            }
            let can_export = state.nodes.is_some();
            if ui
                .add_enabled(can_export, egui::Button::new("Export CSV…"))
                .clicked()
            {
                export_csv_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(set) = &state.nodes {
            ui.label(format!(
                "{} nodes loaded, {} with displacement",
                set.len(),
                state.displaced_count()
            ));
        }

        ui.separator();

        if ui
            .selectable_label(state.plot_kind == PlotKind::Planform, "Planform")
            .clicked()
        {
            state.plot_kind = PlotKind::Planform;
        }
        if ui
            .selectable_label(state.plot_kind == PlotKind::Displacement, "Displacement")
            .clicked()
        {
            state.plot_kind = PlotKind::Displacement;
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Dialogs
// ---------------------------------------------------------------------------

pub fn open_case_dialog(state: &mut AppState) {
    let dir = rfd::FileDialog::new()
        .set_title("Open ANSYS results directory")
        .pick_folder();

    if let Some(dir) = dir {
        load_case_into(state, &dir);
    }
}

/// Load the fixed-named report files from `dir` into the app state.
pub fn load_case_into(state: &mut AppState, dir: &Path) {
    match crate::data::loader::load_case(dir) {
        Ok((set, stats)) => {
            log::debug!("first nodes:\n{set}");
            state.set_case(set, stats);
        }
        Err(e) => {
            log::error!("failed to load case: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}

fn export_csv_dialog(state: &mut AppState) {
    let result = {
        let Some(set) = &state.nodes else { return };
        let Some(path) = rfd::FileDialog::new()
            .set_title("Export node table")
            .set_file_name("nodes.csv")
            .add_filter("CSV", &["csv"])
            .save_file()
        else {
            return;
        };
        crate::data::loader::export_csv(set, &path).map(|()| (set.len(), path))
    };

    match result {
        Ok((rows, path)) => {
            log::info!("wrote {rows} rows to {}", path.display());
            state.status_message = Some(format!("Exported {rows} rows"));
        }
        Err(e) => {
            log::error!("CSV export failed: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}
