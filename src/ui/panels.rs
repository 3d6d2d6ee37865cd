use eframe::egui::{self, Color32, RichText, Ui};

use crate::design::{FilterFamily, FilterMode, DEFAULT_SAMPLE_RATE};
use crate::state::{AppState, FormState};

// ---------------------------------------------------------------------------
// Left side panel – design form
// ---------------------------------------------------------------------------

/// Render the parameter form. Disabled while the response viewer is open.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filter");
    ui.separator();

    let enabled = !state.viewer_open();
    let mut submitted = false;

    ui.add_enabled_ui(enabled, |ui: &mut Ui| {
        egui::Grid::new("design_form")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui: &mut Ui| {
                form_rows(ui, &mut state.form);
            });

        ui.add_space(8.0);
        ui.vertical_centered_justified(|ui: &mut Ui| {
            if ui.button("Design Filter").clicked() {
                submitted = true;
            }
        });
    });

    if submitted {
        state.submit();
    }
}

fn form_rows(ui: &mut Ui, form: &mut FormState) {
    ui.label("Filter Type");
    egui::ComboBox::from_id_salt("filter_family")
        .selected_text(form.family.as_str())
        .show_ui(ui, |ui: &mut Ui| {
            for family in FilterFamily::ALL {
                ui.selectable_value(&mut form.family, family, family.as_str());
            }
        });
    ui.end_row();

    ui.label("Order");
    ui.add(egui::TextEdit::singleline(&mut form.order_text).hint_text("4"));
    ui.end_row();

    ui.label("Cutoff Frequency (Hz)");
    ui.add(egui::TextEdit::singleline(&mut form.cutoff_text).hint_text("0.1e9  or  0.2e9, 0.4e9"));
    ui.end_row();

    ui.label("Filter Mode");
    egui::ComboBox::from_id_salt("filter_mode")
        .selected_text(form.mode.as_str())
        .show_ui(ui, |ui: &mut Ui| {
            for mode in FilterMode::ALL {
                ui.selectable_value(&mut form.mode, mode, mode.as_str());
            }
        });
    ui.end_row();
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / status bar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        let enabled = !state.viewer_open();
        ui.add_enabled_ui(enabled, |ui: &mut Ui| {
            ui.menu_button("Form", |ui: &mut Ui| {
                if ui.button("Reset").clicked() {
                    state.reset_form();
                    ui.close_menu();
                }
            });
        });

        ui.separator();
        ui.label(format!("Sample rate: {:.0} MHz", DEFAULT_SAMPLE_RATE / 1e6));
        ui.separator();

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}
