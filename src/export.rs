use anyhow::{Context, Result};

use crate::design::FilterCoefficients;
use crate::response::FrequencyResponse;

// ---------------------------------------------------------------------------
// Clipboard text formats
// ---------------------------------------------------------------------------

/// `{"numerator": [...], "denominator": [...]}`, pretty-printed.
pub fn coefficients_json(coeffs: &FilterCoefficients) -> Result<String> {
    serde_json::to_string_pretty(coeffs).context("serializing coefficients to JSON")
}

/// One `frequency_hz,magnitude_db,phase_deg` row per grid point, with header.
pub fn response_csv(response: &FrequencyResponse) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(["frequency_hz", "magnitude_db", "phase_deg"])
        .context("writing CSV header")?;

    let rows = response
        .frequencies
        .iter()
        .zip(&response.magnitude_db)
        .zip(&response.phase_deg);
    for (row, ((f, mag), phase)) in rows.enumerate() {
        writer
            .write_record([f.to_string(), mag.to_string(), phase.to_string()])
            .with_context(|| format!("writing CSV row {row}"))?;
    }

    let bytes = writer.into_inner().context("flushing CSV buffer")?;
    String::from_utf8(bytes).context("CSV output is not UTF-8")
}
