use std::f64::consts::PI;

use num_complex::Complex64;

use crate::design::FilterCoefficients;

/// Number of grid points between DC and Nyquist (both included).
pub const RESPONSE_POINTS: usize = 2000;

// ---------------------------------------------------------------------------
// FrequencyResponse – H(e^jω) sampled on a linear grid
// ---------------------------------------------------------------------------

/// Magnitude and phase of a filter on a fixed linear grid from 0 Hz to
/// Nyquist. The three vectors are parallel.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyResponse {
    /// Grid frequencies in Hz, strictly increasing.
    pub frequencies: Vec<f64>,
    /// `20·log10|H|`.
    pub magnitude_db: Vec<f64>,
    /// `arg H` in degrees, wrapped to [-180, 180].
    pub phase_deg: Vec<f64>,
}

impl FrequencyResponse {
    /// Sample the response of `coeffs` at `RESPONSE_POINTS` frequencies.
    ///
    /// Degenerate coefficients (empty, all-zero denominator) produce NaN or
    /// infinite values rather than an error; the plot shows them as gaps.
    pub fn compute(coeffs: &FilterCoefficients, sample_rate: f64) -> Self {
        let nyquist = sample_rate / 2.0;
        let last = (RESPONSE_POINTS - 1) as f64;

        let mut frequencies = Vec::with_capacity(RESPONSE_POINTS);
        let mut magnitude_db = Vec::with_capacity(RESPONSE_POINTS);
        let mut phase_deg = Vec::with_capacity(RESPONSE_POINTS);

        for i in 0..RESPONSE_POINTS {
            let fraction = i as f64 / last;
            let h = Self::evaluate(coeffs, PI * fraction);

            frequencies.push(nyquist * fraction);
            magnitude_db.push(20.0 * h.norm().log10());
            phase_deg.push(h.arg().to_degrees());
        }

        FrequencyResponse {
            frequencies,
            magnitude_db,
            phase_deg,
        }
    }

    /// `H(e^{jω})` at one angular frequency `omega` (rad/sample).
    pub fn evaluate(coeffs: &FilterCoefficients, omega: f64) -> Complex64 {
        let z_inv = Complex64::from_polar(1.0, -omega);
        horner(&coeffs.numerator, z_inv) / horner(&coeffs.denominator, z_inv)
    }
}

/// `c[0] + c[1]·x + c[2]·x² + …`
fn horner(coeffs: &[f64], x: Complex64) -> Complex64 {
    coeffs
        .iter()
        .rev()
        .fold(Complex64::new(0.0, 0.0), |acc, &c| acc * x + c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::{design_filter, FilterFamily, FilterMode, FilterSpec, DEFAULT_SAMPLE_RATE};
    use approx::assert_abs_diff_eq;

    fn response_for(
        family: FilterFamily,
        order: usize,
        cutoff: &[f64],
        mode: FilterMode,
    ) -> (FilterCoefficients, FrequencyResponse) {
        let spec =
            FilterSpec::new(family, order, cutoff.to_vec(), mode, DEFAULT_SAMPLE_RATE).unwrap();
        let coeffs = design_filter(&spec).unwrap();
        let response = FrequencyResponse::compute(&coeffs, spec.sample_rate());
        (coeffs, response)
    }

    #[test]
    fn test_grid_spans_dc_to_nyquist() {
        let (_, response) =
            response_for(FilterFamily::Butterworth, 2, &[1e8], FilterMode::Lowpass);
        assert_eq!(response.frequencies.len(), RESPONSE_POINTS);
        assert_eq!(response.magnitude_db.len(), RESPONSE_POINTS);
        assert_eq!(response.phase_deg.len(), RESPONSE_POINTS);
        assert_eq!(response.frequencies[0], 0.0);
        assert_abs_diff_eq!(
            *response.frequencies.last().unwrap(),
            DEFAULT_SAMPLE_RATE / 2.0,
            epsilon = 1e-3
        );
        assert!(response.frequencies.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn test_grid_size_is_fixed_across_calls() {
        let (_, a) = response_for(FilterFamily::Elliptic, 6, &[1e8, 2e8], FilterMode::Bandstop);
        let (_, b) = response_for(FilterFamily::Chebyshev2, 1, &[3e8], FilterMode::Highpass);
        assert_eq!(a.frequencies.len(), b.frequencies.len());
        assert_eq!(a.frequencies, b.frequencies);
    }

    #[test]
    fn test_butterworth_lowpass_round_trip() {
        let (coeffs, response) =
            response_for(FilterFamily::Butterworth, 4, &[0.1e9], FilterMode::Lowpass);
        assert_eq!(coeffs.denominator.len(), 5);
        assert_abs_diff_eq!(response.magnitude_db[0], 0.0, epsilon = 1e-9);
        assert!(*response.magnitude_db.last().unwrap() < -100.0);
    }

    #[test]
    fn test_chebyshev1_bandpass_ripple_bounded() {
        let (coeffs, response) =
            response_for(FilterFamily::Chebyshev1, 3, &[0.2e9, 0.4e9], FilterMode::Bandpass);
        assert_eq!(coeffs.denominator.len(), 7);

        let passband: Vec<f64> = response
            .frequencies
            .iter()
            .zip(&response.magnitude_db)
            .filter(|(f, _)| (0.2e9..=0.4e9).contains(*f))
            .map(|(_, &db)| db)
            .collect();
        assert!(!passband.is_empty());

        let max = passband.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let min = passband.iter().cloned().fold(f64::INFINITY, f64::min);
        assert!(max <= 1e-6, "passband peak {max}");
        assert!(max - min <= 0.5 + 1e-6, "ripple {}", max - min);
    }

    #[test]
    fn test_phase_in_degrees() {
        let (_, response) =
            response_for(FilterFamily::Butterworth, 4, &[0.1e9], FilterMode::Lowpass);
        assert_eq!(response.phase_deg[0], 0.0);
        assert!(response.phase_deg.iter().all(|p| (-180.0..=180.0).contains(p)));
    }

    #[test]
    fn test_empty_coefficients_degrade_to_nan() {
        let coeffs = FilterCoefficients {
            numerator: Vec::new(),
            denominator: Vec::new(),
        };
        let response = FrequencyResponse::compute(&coeffs, DEFAULT_SAMPLE_RATE);
        assert_eq!(response.frequencies.len(), RESPONSE_POINTS);
        assert!(response.magnitude_db.iter().all(|db| db.is_nan()));
    }

    #[test]
    fn test_evaluate_at_dc_sums_coefficients() {
        let coeffs = FilterCoefficients {
            numerator: vec![1.0, 1.0],
            denominator: vec![1.0, -0.5],
        };
        let h = FrequencyResponse::evaluate(&coeffs, 0.0);
        assert_abs_diff_eq!(h.re, 4.0, epsilon = 1e-12);
        assert_abs_diff_eq!(h.im, 0.0, epsilon = 1e-12);
    }
}
