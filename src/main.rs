mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::Path;

use app::BladePostApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Blade Post – ANSYS Nodal Viewer",
        options,
        Box::new(|_cc| {
            let mut app = BladePostApp::default();
            // The reports are conventionally read from the working directory.
            if Path::new(data::loader::NODE_LIST_FILE).is_file() {
                ui::panels::load_case_into(&mut app.state, Path::new("."));
            }
            Ok(Box::new(app))
        }),
    )
}
