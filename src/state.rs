use anyhow::{Context, Result};

use crate::design::{
    design_filter, FilterCoefficients, FilterFamily, FilterMode, FilterSpec, DEFAULT_SAMPLE_RATE,
};
use crate::response::FrequencyResponse;

// ---------------------------------------------------------------------------
// Form state
// ---------------------------------------------------------------------------

/// Current contents of the parameter form. Owned by the view and read on submit.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub family: FilterFamily,
    pub order_text: String,
    pub cutoff_text: String,
    pub mode: FilterMode,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            family: FilterFamily::Butterworth,
            order_text: String::new(),
            cutoff_text: String::new(),
            mode: FilterMode::Lowpass,
        }
    }
}

impl FormState {
    /// Parse the text fields into a validated spec at the fixed sample rate.
    pub fn to_spec(&self) -> Result<FilterSpec> {
        let order = parse_order(&self.order_text)?;
        let cutoff = parse_cutoffs(&self.cutoff_text)?;
        let spec = FilterSpec::new(self.family, order, cutoff, self.mode, DEFAULT_SAMPLE_RATE)?;
        Ok(spec)
    }
}

/// Parse the order field as a plain integer.
pub fn parse_order(text: &str) -> Result<usize> {
    text.trim()
        .parse::<usize>()
        .with_context(|| format!("Order: '{text}' is not an integer"))
}

/// Parse a comma-separated list of frequencies in Hz.
pub fn parse_cutoffs(text: &str) -> Result<Vec<f64>> {
    text.split(',')
        .enumerate()
        .map(|(i, tok)| {
            let tok = tok.trim();
            tok.parse::<f64>()
                .with_context(|| format!("Cutoff frequency [{i}]: '{tok}' is not a number"))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Design outcome
// ---------------------------------------------------------------------------

/// Everything the viewer shows for one submission.
#[derive(Debug, Clone)]
pub struct DesignOutcome {
    pub spec: FilterSpec,
    pub coefficients: FilterCoefficients,
    pub response: FrequencyResponse,
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
#[derive(Default)]
pub struct AppState {
    pub form: FormState,

    /// Result of the last successful submit; `Some` exactly while the
    /// response viewer is open.
    pub outcome: Option<DesignOutcome>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Run design and response evaluation for the current form contents.
    ///
    /// On failure the error chain lands in `status_message` and no viewer opens.
    pub fn submit(&mut self) {
        match self.design_current() {
            Ok(outcome) => {
                log::info!(
                    "Designed {} ({} coefficients)",
                    outcome.spec,
                    outcome.coefficients.denominator.len()
                );
                log::debug!("b = {:?}", outcome.coefficients.numerator);
                log::debug!("a = {:?}", outcome.coefficients.denominator);
                self.outcome = Some(outcome);
                self.status_message = None;
            }
            Err(e) => {
                log::error!("Filter design failed: {e:#}");
                self.outcome = None;
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    fn design_current(&self) -> Result<DesignOutcome> {
        let spec = self.form.to_spec()?;
        let coefficients = design_filter(&spec)?;
        let response = FrequencyResponse::compute(&coefficients, spec.sample_rate());
        Ok(DesignOutcome {
            spec,
            coefficients,
            response,
        })
    }

    /// Clear the form and status line. Ignored while the viewer is open,
    /// since the form is locked until the design is dismissed.
    pub fn reset_form(&mut self) {
        if self.viewer_open() {
            return;
        }
        self.form = FormState::default();
        self.status_message = None;
    }

    pub fn viewer_open(&self) -> bool {
        self.outcome.is_some()
    }

    /// Close the viewer and drop the design.
    pub fn dismiss_viewer(&mut self) {
        self.outcome = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::error::DesignError;

    fn form(family: FilterFamily, order: &str, cutoff: &str, mode: FilterMode) -> FormState {
        FormState {
            family,
            order_text: order.into(),
            cutoff_text: cutoff.into(),
            mode,
        }
    }

    #[test]
    fn test_parse_order() {
        assert_eq!(parse_order(" 4 ").unwrap(), 4);
        assert!(parse_order("four").is_err());
        assert!(parse_order("-2").is_err());
        assert!(parse_order("").is_err());
    }

    #[test]
    fn test_parse_cutoffs() {
        assert_eq!(parse_cutoffs("1e8").unwrap(), vec![1e8]);
        assert_eq!(parse_cutoffs("0.2e9, 0.4e9").unwrap(), vec![2e8, 4e8]);
        let err = parse_cutoffs("1e8, abc").unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("Cutoff frequency [1]: 'abc'"), "{msg}");
        assert!(!msg.contains("' abc'"), "{msg}");
        assert!(parse_cutoffs("").is_err());
    }

    #[test]
    fn test_submit_opens_viewer() {
        let mut state = AppState {
            form: form(FilterFamily::Butterworth, "4", "0.1e9", FilterMode::Lowpass),
            ..Default::default()
        };
        state.submit();

        assert!(state.viewer_open());
        assert!(state.status_message.is_none());
        let outcome = state.outcome.as_ref().unwrap();
        assert_eq!(outcome.coefficients.denominator.len(), 5);
        assert_eq!(outcome.spec.sample_rate(), DEFAULT_SAMPLE_RATE);

        state.dismiss_viewer();
        assert!(!state.viewer_open());
    }

    #[test]
    fn test_submit_reports_parse_error() {
        let mut state = AppState {
            form: form(FilterFamily::Butterworth, "x", "1e8", FilterMode::Lowpass),
            ..Default::default()
        };
        state.submit();

        assert!(!state.viewer_open());
        let msg = state.status_message.as_deref().unwrap();
        assert!(msg.contains("Order"), "{msg}");
    }

    #[test]
    fn test_submit_reports_design_error_and_stays_usable() {
        let mut state = AppState {
            form: form(FilterFamily::Chebyshev1, "3", "0.2e9", FilterMode::Bandpass),
            ..Default::default()
        };
        state.submit();
        assert!(!state.viewer_open());
        assert!(state
            .status_message
            .as_deref()
            .unwrap()
            .contains("requires 2 cutoff frequencies"));

        state.form.cutoff_text = "0.2e9, 0.4e9".into();
        state.submit();
        assert!(state.viewer_open());
        assert!(state.status_message.is_none());
    }

    #[test]
    fn test_submit_rejects_order_above_limit() {
        let mut state = AppState {
            form: form(FilterFamily::Butterworth, "1000000", "1e8", FilterMode::Lowpass),
            ..Default::default()
        };
        state.submit();
        assert!(!state.viewer_open());
        assert!(state
            .status_message
            .as_deref()
            .unwrap()
            .contains("exceeds the maximum"));
    }

    #[test]
    fn test_reset_form_is_locked_while_viewer_open() {
        let mut state = AppState {
            form: form(FilterFamily::Elliptic, "3", "1e8", FilterMode::Highpass),
            ..Default::default()
        };
        state.submit();
        assert!(state.viewer_open());

        state.reset_form();
        assert_eq!(state.form.order_text, "3");
        assert_eq!(state.form.family, FilterFamily::Elliptic);

        state.dismiss_viewer();
        state.reset_form();
        assert_eq!(state.form, FormState::default());
    }

    #[test]
    fn test_form_errors_keep_design_error_type() {
        let err = form(FilterFamily::Elliptic, "0", "1e8", FilterMode::Lowpass)
            .to_spec()
            .unwrap_err();
        assert_eq!(err.downcast_ref::<DesignError>(), Some(&DesignError::ZeroOrder));
    }
}
