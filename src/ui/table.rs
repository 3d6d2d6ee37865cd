use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::design::FilterCoefficients;

const ROW_HEIGHT: f32 = 18.0;

/// Striped table of `k`, `b[k]`, `a[k]`.
pub fn coefficient_table(ui: &mut Ui, coeffs: &FilterCoefficients) {
    let rows = coeffs.numerator.len().max(coeffs.denominator.len());

    TableBuilder::new(ui)
        .striped(true)
        .max_scroll_height(220.0)
        .column(Column::auto().at_least(32.0))
        .column(Column::remainder())
        .column(Column::remainder())
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("k");
            });
            header.col(|ui| {
                ui.strong("b[k] (numerator)");
            });
            header.col(|ui| {
                ui.strong("a[k] (denominator)");
            });
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, rows, |mut row| {
                let k = row.index();
                row.col(|ui| {
                    ui.monospace(k.to_string());
                });
                row.col(|ui| {
                    ui.monospace(format_coefficient(coeffs.numerator.get(k)));
                });
                row.col(|ui| {
                    ui.monospace(format_coefficient(coeffs.denominator.get(k)));
                });
            });
        });
}

fn format_coefficient(value: Option<&f64>) -> String {
    value.map(|v| format!("{v:+.12e}")).unwrap_or_default()
}
