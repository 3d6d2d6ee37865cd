use eframe::egui::Ui;
use egui_plot::{Legend, Line, LineStyle, Plot, PlotPoints, PlotUi, VLine};

use crate::color::TraceColors;
use crate::state::DesignOutcome;

const PLOT_HEIGHT: f32 = 320.0;

// ---------------------------------------------------------------------------
// Magnitude / phase plots
// ---------------------------------------------------------------------------

/// Magnitude and phase side by side.
pub fn response_plots(ui: &mut Ui, outcome: &DesignOutcome, colors: &TraceColors) {
    ui.columns(2, |columns: &mut [Ui]| {
        magnitude_plot(&mut columns[0], outcome, colors);
        phase_plot(&mut columns[1], outcome, colors);
    });
}

fn magnitude_plot(ui: &mut Ui, outcome: &DesignOutcome, colors: &TraceColors) {
    ui.strong("Magnitude Response");
    let response = &outcome.response;
    let points = finite_points(&response.frequencies, &response.magnitude_db);

    Plot::new("magnitude_plot")
        .height(PLOT_HEIGHT)
        .legend(Legend::default())
        .x_axis_label("Frequency (Hz)")
        .y_axis_label("Magnitude (dB)")
        .show_grid(true)
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(points)
                    .name("|H|")
                    .color(colors.magnitude)
                    .width(1.5),
            );
            cutoff_markers(plot_ui, outcome.spec.cutoff(), colors);
        });
}

fn phase_plot(ui: &mut Ui, outcome: &DesignOutcome, colors: &TraceColors) {
    ui.strong("Phase Response");
    let response = &outcome.response;
    let points = finite_points(&response.frequencies, &response.phase_deg);

    Plot::new("phase_plot")
        .height(PLOT_HEIGHT)
        .legend(Legend::default())
        .x_axis_label("Frequency (Hz)")
        .y_axis_label("Phase (Degrees)")
        .show_grid(true)
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(points)
                    .name("arg H")
                    .color(colors.phase)
                    .width(1.5),
            );
            cutoff_markers(plot_ui, outcome.spec.cutoff(), colors);
        });
}

fn cutoff_markers(plot_ui: &mut PlotUi, cutoffs: &[f64], colors: &TraceColors) {
    for &cutoff in cutoffs {
        plot_ui.vline(
            VLine::new(cutoff)
                .name(format!("cutoff {cutoff:e} Hz"))
                .color(colors.cutoff)
                .style(LineStyle::dashed_loose()),
        );
    }
}

/// Pair up x/y, leaving out NaN and ±inf samples so the auto-bounds stay finite.
fn finite_points(x: &[f64], y: &[f64]) -> PlotPoints<'static> {
    x.iter()
        .zip(y.iter())
        .filter(|(_, yi)| yi.is_finite())
        .map(|(&xi, &yi)| [xi, yi])
        .collect()
}
