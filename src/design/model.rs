use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::error::{DesignError, Result};

/// Sample rate used by the form: 1 GHz.
pub const DEFAULT_SAMPLE_RATE: f64 = 1e9;

/// Highest order accepted. Polynomial expansion cost grows with N² and the
/// (b, a) form loses precision well before this for narrow elliptic designs.
pub const MAX_ORDER: usize = 32;

/// Passband ripple of the Chebyshev type I design (dB).
pub const CHEBYSHEV1_RIPPLE_DB: f64 = 0.5;
/// Stopband attenuation of the Chebyshev type II design (dB).
pub const CHEBYSHEV2_ATTENUATION_DB: f64 = 20.0;
/// Passband ripple of the elliptic design (dB).
pub const ELLIPTIC_RIPPLE_DB: f64 = 0.5;
/// Stopband attenuation of the elliptic design (dB).
pub const ELLIPTIC_ATTENUATION_DB: f64 = 20.0;

// ---------------------------------------------------------------------------
// FilterFamily – which classical approximation to use
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterFamily {
    Butterworth,
    Chebyshev1,
    Chebyshev2,
    Elliptic,
}

impl FilterFamily {
    pub const ALL: [FilterFamily; 4] = [
        FilterFamily::Butterworth,
        FilterFamily::Chebyshev1,
        FilterFamily::Chebyshev2,
        FilterFamily::Elliptic,
    ];

    /// Identifier used in the form and accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            FilterFamily::Butterworth => "butterworth",
            FilterFamily::Chebyshev1 => "chebyshev1",
            FilterFamily::Chebyshev2 => "chebyshev2",
            FilterFamily::Elliptic => "elliptic",
        }
    }
}

impl fmt::Display for FilterFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// String entry point for the family name. The form picks the enum directly
/// from its combo box; this is what validates a typed or serialized name,
/// and an unknown one such as "kalman" fails with `InvalidFamily`.
impl FromStr for FilterFamily {
    type Err = DesignError;

    fn from_str(s: &str) -> Result<Self> {
        FilterFamily::ALL
            .into_iter()
            .find(|family| family.as_str() == s)
            .ok_or_else(|| DesignError::InvalidFamily(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// FilterMode – band shape
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterMode {
    Lowpass,
    Highpass,
    Bandpass,
    Bandstop,
}

impl FilterMode {
    pub const ALL: [FilterMode; 4] = [
        FilterMode::Lowpass,
        FilterMode::Highpass,
        FilterMode::Bandpass,
        FilterMode::Bandstop,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FilterMode::Lowpass => "lowpass",
            FilterMode::Highpass => "highpass",
            FilterMode::Bandpass => "bandpass",
            FilterMode::Bandstop => "bandstop",
        }
    }

    /// Number of band edges the mode needs: one for low/highpass, two for band filters.
    pub fn cutoff_count(self) -> usize {
        match self {
            FilterMode::Lowpass | FilterMode::Highpass => 1,
            FilterMode::Bandpass | FilterMode::Bandstop => 2,
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// String entry point for the mode name; an unknown one fails with `InvalidMode`.
impl FromStr for FilterMode {
    type Err = DesignError;

    fn from_str(s: &str) -> Result<Self> {
        FilterMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| DesignError::InvalidMode(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// FilterSpec – one validated design request
// ---------------------------------------------------------------------------

/// A design request. Fields are private so a constructed spec is always
/// well-formed; cutoff arity against the mode is checked at design time.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSpec {
    family: FilterFamily,
    order: usize,
    cutoff: Vec<f64>,
    mode: FilterMode,
    sample_rate: f64,
}

impl FilterSpec {
    pub fn new(
        family: FilterFamily,
        order: usize,
        cutoff: Vec<f64>,
        mode: FilterMode,
        sample_rate: f64,
    ) -> Result<Self> {
        if order == 0 {
            return Err(DesignError::ZeroOrder);
        }
        if order > MAX_ORDER {
            return Err(DesignError::OrderTooHigh { order, max: MAX_ORDER });
        }
        if !(sample_rate.is_finite() && sample_rate > 0.0) {
            return Err(DesignError::InvalidSampleRate(sample_rate));
        }
        if cutoff.is_empty() {
            return Err(DesignError::EmptyCutoff);
        }
        if cutoff.len() > 2 {
            return Err(DesignError::TooManyCutoffs(cutoff.len()));
        }
        if let Some(&bad) = cutoff.iter().find(|c| !(c.is_finite() && **c > 0.0)) {
            return Err(DesignError::NonPositiveCutoff(bad));
        }

        Ok(FilterSpec {
            family,
            order,
            cutoff,
            mode,
            sample_rate,
        })
    }

    pub fn family(&self) -> FilterFamily {
        self.family
    }

    pub fn order(&self) -> usize {
        self.order
    }

    /// Cutoff frequencies in Hz.
    pub fn cutoff(&self) -> &[f64] {
        &self.cutoff
    }

    pub fn mode(&self) -> FilterMode {
        self.mode
    }

    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    pub fn nyquist(&self) -> f64 {
        self.sample_rate / 2.0
    }
}

impl fmt::Display for FilterSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cutoffs: Vec<String> = self.cutoff.iter().map(|c| format!("{c:e}")).collect();
        write!(
            f,
            "{} {} order {}, cutoff [{}] Hz, fs {:e} Hz",
            self.family,
            self.mode,
            self.order,
            cutoffs.join(", "),
            self.sample_rate
        )
    }
}

// ---------------------------------------------------------------------------
// FilterCoefficients – transfer function b(z)/a(z)
// ---------------------------------------------------------------------------

/// Coefficients of `H(z) = Σ b[k] z⁻ᵏ / Σ a[k] z⁻ᵏ`, with `a[0] == 1`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterCoefficients {
    pub numerator: Vec<f64>,
    pub denominator: Vec<f64>,
}
