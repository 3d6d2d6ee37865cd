use eframe::egui;

use crate::color::TraceColors;
use crate::state::AppState;
use crate::ui::{panels, viewer};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct FilterDesignerApp {
    pub state: AppState,
    colors: TraceColors,
}

impl eframe::App for FilterDesignerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu + status ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: design form ----
        egui::SidePanel::left("form_panel")
            .default_width(320.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: placeholder behind the viewer ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.centered_and_justified(|ui| {
                if self.state.viewer_open() {
                    ui.label("Close the response window to design another filter.");
                } else {
                    ui.heading("Fill in the form and press Design Filter");
                }
            });
        });

        // ---- Response viewer (blocks the form while open) ----
        viewer::response_window(ctx, &mut self.state, &self.colors);
    }
}
