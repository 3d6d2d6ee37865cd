mod app;
mod color;
mod design;
mod export;
mod response;
mod state;
mod ui;

use app::FilterDesignerApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([640.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "RF Filter Designer",
        options,
        Box::new(|_cc| Ok(Box::new(FilterDesignerApp::default()))),
    )
}
