use thiserror::Error;

use super::model::FilterMode;

// ---------------------------------------------------------------------------
// Design errors
// ---------------------------------------------------------------------------

/// Everything that can go wrong between a raw request and a coefficient pair.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DesignError {
    #[error(
        "invalid filter type '{0}' (expected butterworth, chebyshev1, chebyshev2 or elliptic)"
    )]
    InvalidFamily(String),

    #[error("invalid filter mode '{0}' (expected lowpass, highpass, bandpass or bandstop)")]
    InvalidMode(String),

    #[error("filter order must be at least 1")]
    ZeroOrder,

    #[error("filter order {order} exceeds the maximum of {max}")]
    OrderTooHigh { order: usize, max: usize },

    #[error("sample rate must be a positive number of Hz, got {0}")]
    InvalidSampleRate(f64),

    #[error("at least one cutoff frequency is required")]
    EmptyCutoff,

    #[error("at most two cutoff frequencies are allowed, got {0}")]
    TooManyCutoffs(usize),

    #[error("cutoff frequencies must be positive, got {0}")]
    NonPositiveCutoff(f64),

    #[error("{mode} filter requires {expected} cutoff frequencies, got {got}")]
    CutoffCount {
        mode: FilterMode,
        expected: usize,
        got: usize,
    },

    /// Normalized cutoff outside the open interval (0, 1), i.e. at or past Nyquist.
    #[error("digital filter critical frequencies must be 0 < Wn < 1, got Wn = {0}")]
    CutoffOutOfRange(f64),

    #[error("band edges must satisfy low < high, got {low} and {high}")]
    BandEdgeOrder { low: f64, high: f64 },
}

pub type Result<T> = std::result::Result<T, DesignError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_family_message_names_input() {
        let err = DesignError::InvalidFamily("kalman".into());
        assert!(err.to_string().contains("'kalman'"));
    }

    #[test]
    fn test_cutoff_count_message() {
        let err = DesignError::CutoffCount {
            mode: FilterMode::Bandpass,
            expected: 2,
            got: 1,
        };
        assert_eq!(
            err.to_string(),
            "bandpass filter requires 2 cutoff frequencies, got 1"
        );
    }
}
