use super::error::{DesignError, Result};
use super::model::{
    FilterCoefficients, FilterFamily, FilterMode, FilterSpec, CHEBYSHEV1_RIPPLE_DB,
    CHEBYSHEV2_ATTENUATION_DB, ELLIPTIC_ATTENUATION_DB, ELLIPTIC_RIPPLE_DB, MAX_ORDER,
};
use super::prototype::{self, Zpk};
use super::transform::{bilinear, lp_to_bp, lp_to_bs, lp_to_hp, lp_to_lp, prewarp, zpk_to_tf};

/// Designs run at a nominal fs of 2 so that normalized frequencies
/// (1 = Nyquist) carry straight through the bilinear transform.
const NORMALIZED_FS: f64 = 2.0;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Design the digital filter described by `spec`.
///
/// Cutoffs are normalized by the Nyquist frequency and handed to
/// [`design_normalized`]; see there for the failure modes.
pub fn design_filter(spec: &FilterSpec) -> Result<FilterCoefficients> {
    let nyquist = spec.nyquist();
    let wn: Vec<f64> = spec.cutoff().iter().map(|c| c / nyquist).collect();
    design_normalized(spec.family(), spec.order(), &wn, spec.mode())
}

/// Design from normalized critical frequencies `wn` (1 = Nyquist).
///
/// Fails when `wn` holds the wrong number of edges for `mode`, when an edge
/// falls outside `0 < wn < 1`, or when band edges are not increasing.
pub fn design_normalized(
    family: FilterFamily,
    order: usize,
    wn: &[f64],
    mode: FilterMode,
) -> Result<FilterCoefficients> {
    if order == 0 {
        return Err(DesignError::ZeroOrder);
    }
    if order > MAX_ORDER {
        return Err(DesignError::OrderTooHigh {
            order,
            max: MAX_ORDER,
        });
    }
    check_critical_frequencies(wn, mode)?;

    let proto = analog_prototype(family, order);
    let warped: Vec<f64> = wn.iter().map(|&w| prewarp(w, NORMALIZED_FS)).collect();

    let analog = match mode {
        FilterMode::Lowpass => lp_to_lp(&proto, warped[0]),
        FilterMode::Highpass => lp_to_hp(&proto, warped[0]),
        FilterMode::Bandpass | FilterMode::Bandstop => {
            let bw = warped[1] - warped[0];
            let wo = (warped[0] * warped[1]).sqrt();
            if mode == FilterMode::Bandpass {
                lp_to_bp(&proto, wo, bw)
            } else {
                lp_to_bs(&proto, wo, bw)
            }
        }
    };

    let digital = bilinear(&analog, NORMALIZED_FS);
    let (numerator, denominator) = zpk_to_tf(&digital);
    Ok(FilterCoefficients {
        numerator,
        denominator,
    })
}

/// Lowpass prototype of the requested family with the fixed ripple and
/// attenuation figures.
pub fn analog_prototype(family: FilterFamily, order: usize) -> Zpk {
    match family {
        FilterFamily::Butterworth => prototype::butterworth(order),
        FilterFamily::Chebyshev1 => prototype::chebyshev1(order, CHEBYSHEV1_RIPPLE_DB),
        FilterFamily::Chebyshev2 => prototype::chebyshev2(order, CHEBYSHEV2_ATTENUATION_DB),
        FilterFamily::Elliptic => {
            prototype::elliptic(order, ELLIPTIC_RIPPLE_DB, ELLIPTIC_ATTENUATION_DB)
        }
    }
}

fn check_critical_frequencies(wn: &[f64], mode: FilterMode) -> Result<()> {
    let expected = mode.cutoff_count();
    if wn.len() != expected {
        return Err(DesignError::CutoffCount {
            mode,
            expected,
            got: wn.len(),
        });
    }
    if let Some(&bad) = wn.iter().find(|&&w| !(w > 0.0 && w < 1.0)) {
        return Err(DesignError::CutoffOutOfRange(bad));
    }
    if let [low, high] = *wn {
        if low >= high {
            return Err(DesignError::BandEdgeOrder { low, high });
        }
    }
    Ok(())
}
