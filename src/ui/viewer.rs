use eframe::egui::{self, Ui};

use crate::color::TraceColors;
use crate::export;
use crate::state::{AppState, DesignOutcome};
use crate::ui::{plot, table};

// ---------------------------------------------------------------------------
// Response viewer window
// ---------------------------------------------------------------------------

/// Show the response window while a design is active. Closing it drops the
/// design and re-enables the form.
pub fn response_window(ctx: &egui::Context, state: &mut AppState, colors: &TraceColors) {
    let Some(outcome) = &state.outcome else {
        return;
    };

    let mut open = true;
    let mut close_clicked = false;

    egui::Window::new("Frequency Response")
        .open(&mut open)
        .collapsible(false)
        .default_size([1000.0, 520.0])
        .show(ctx, |ui: &mut Ui| {
            ui.label(outcome.spec.to_string());
            ui.separator();

            plot::response_plots(ui, outcome, colors);
            ui.separator();

            egui::CollapsingHeader::new("Coefficients")
                .default_open(false)
                .show(ui, |ui: &mut Ui| {
                    ui.horizontal(|ui: &mut Ui| {
                        copy_buttons(ui, outcome);
                    });
                    table::coefficient_table(ui, &outcome.coefficients);
                });

            ui.separator();
            if ui.button("Close").clicked() {
                close_clicked = true;
            }
        });

    if !open || close_clicked {
        log::debug!("Response viewer dismissed");
        state.dismiss_viewer();
    }
}

fn copy_buttons(ui: &mut Ui, outcome: &DesignOutcome) {
    if ui.button("Copy coefficients (JSON)").clicked() {
        copy_to_clipboard(ui, "coefficients", export::coefficients_json(&outcome.coefficients));
    }
    if ui.button("Copy response (CSV)").clicked() {
        copy_to_clipboard(ui, "response", export::response_csv(&outcome.response));
    }
}

fn copy_to_clipboard(ui: &Ui, what: &str, text: anyhow::Result<String>) {
    match text {
        Ok(text) => {
            log::info!("Copied {what} to clipboard ({} bytes)", text.len());
            ui.ctx().copy_text(text);
        }
        Err(e) => log::error!("Failed to export {what}: {e:#}"),
    }
}
