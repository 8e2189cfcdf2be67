use eframe::egui::Ui;
use egui_plot::{Legend, Line, MarkerShape, Plot, PlotPoints, Points};

use crate::color::SeriesColors;
use crate::data::model::{NodeSet, Table};
use crate::state::{AppState, PlotKind};

// ---------------------------------------------------------------------------
// Central panel – diagnostic figures
// ---------------------------------------------------------------------------

/// Render the active figure in the central panel.
pub fn case_plot(ui: &mut Ui, state: &AppState) {
    let set = match &state.nodes {
        Some(set) => set,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Open a results directory to view the model  (File → Open…)");
            });
            return;
        }
    };

    match state.plot_kind {
        PlotKind::Planform => planform_plot(ui, state, set),
        PlotKind::Displacement => displacement_plot(ui, state, set),
    }
}

fn subset_points(table: &Table, indices: &[usize], y: impl Fn(usize) -> f64) -> Vec<[f64; 2]> {
    indices
        .iter()
        .map(|&i| [table.z[i], y(i)])
        .filter(|p| !p[1].is_nan())
        .collect()
}

// ---------------------------------------------------------------------------
// Planform – spanwise vs. chordwise scatter
// ---------------------------------------------------------------------------

fn planform_plot(ui: &mut Ui, state: &AppState, set: &NodeSet) {
    let colors = SeriesColors::default();
    let table = set.columns();

    let all: Vec<[f64; 2]> = table
        .z
        .iter()
        .zip(table.x.iter())
        .map(|(&z, &x)| [z, x])
        .collect();

    Plot::new("planform_plot")
        .legend(Legend::default())
        .x_axis_label("z, spanwise coordinate [m]")
        .y_axis_label("x, chordwise coordinate [m]")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.points(
                Points::new(PlotPoints::from(all))
                    .name("all nodes")
                    .color(colors.nodes)
                    .shape(MarkerShape::Cross)
                    .radius(3.0),
            );

            if state.show_pitch {
                let pitch = subset_points(&table, &state.pitch_indices, |i| table.x[i]);
                plot_ui.points(
                    Points::new(PlotPoints::from(pitch))
                        .name("pitch axis")
                        .color(colors.pitch)
                        .shape(MarkerShape::Circle)
                        .radius(4.0),
                );
            }

            if state.show_stations {
                let stations = subset_points(&table, &state.station_indices, |i| table.x[i]);
                plot_ui.points(
                    Points::new(PlotPoints::from(stations))
                        .name("stations")
                        .color(colors.stations)
                        .shape(MarkerShape::Diamond)
                        .radius(5.0),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Displacement – uy vs. span
// ---------------------------------------------------------------------------

fn displacement_plot(ui: &mut Ui, state: &AppState, set: &NodeSet) {
    let colors = SeriesColors::default();
    let table = set.columns();

    // Nodes without a solution value carry NaN in the projection; skip them.
    let all: Vec<[f64; 2]> = table
        .z
        .iter()
        .zip(table.uy.iter())
        .filter(|(_, uy)| !uy.is_nan())
        .map(|(&z, &uy)| [z, uy])
        .collect();

    Plot::new("displacement_plot")
        .legend(Legend::default())
        .x_axis_label("z, spanwise coordinate [m]")
        .y_axis_label("uy, nodal y-displacement [m]")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.points(
                Points::new(PlotPoints::from(all))
                    .name("all nodes")
                    .color(colors.nodes)
                    .shape(MarkerShape::Cross)
                    .radius(3.0),
            );

            if state.show_pitch {
                // The set is span-sorted, so ascending indices trace the span.
                let pitch = subset_points(&table, &state.pitch_indices, |i| table.uy[i]);
                plot_ui.line(
                    Line::new(PlotPoints::from(pitch.clone()))
                        .name("pitch axis")
                        .color(colors.pitch)
                        .width(1.5),
                );
                plot_ui.points(
                    Points::new(PlotPoints::from(pitch))
                        .name("pitch axis")
                        .color(colors.pitch)
                        .shape(MarkerShape::Circle)
                        .radius(3.0),
                );
            }

            if state.show_stations {
                let stations = subset_points(&table, &state.station_indices, |i| table.uy[i]);
                plot_ui.points(
                    Points::new(PlotPoints::from(stations))
                        .name("stations")
                        .color(colors.stations)
                        .shape(MarkerShape::Diamond)
                        .radius(5.0),
                );
            }
        });
}
