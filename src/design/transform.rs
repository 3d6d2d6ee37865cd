//! Analog frequency transformations, the bilinear transform and the
//! zpk → polynomial expansion.

use num_complex::Complex64;

use super::prototype::{neg_product, Zpk};

// ---------------------------------------------------------------------------
// Analog lowpass → {lowpass, highpass, bandpass, bandstop}
// ---------------------------------------------------------------------------

/// `s → s/ω₀`.
pub fn lp_to_lp(proto: &Zpk, wo: f64) -> Zpk {
    let degree = proto.relative_degree() as i32;
    Zpk {
        zeros: proto.zeros.iter().map(|&z| z * wo).collect(),
        poles: proto.poles.iter().map(|&p| p * wo).collect(),
        gain: proto.gain * wo.powi(degree),
    }
}

/// `s → ω₀/s`. Zeros at infinity move to the origin.
pub fn lp_to_hp(proto: &Zpk, wo: f64) -> Zpk {
    let degree = proto.relative_degree();
    let mut zeros: Vec<Complex64> = proto.zeros.iter().map(|&z| wo / z).collect();
    zeros.extend(std::iter::repeat(Complex64::new(0.0, 0.0)).take(degree));

    Zpk {
        zeros,
        poles: proto.poles.iter().map(|&p| wo / p).collect(),
        gain: proto.gain * (neg_product(&proto.zeros) / neg_product(&proto.poles)).re,
    }
}

/// Each root `r` of the scaled prototype splits into `r ± √(r² − ω₀²)`.
fn split_roots(roots: &[Complex64], wo: f64) -> Vec<Complex64> {
    let upper = roots.iter().map(|&r| r + (r * r - wo * wo).sqrt());
    let lower = roots.iter().map(|&r| r - (r * r - wo * wo).sqrt());
    upper.chain(lower).collect()
}

/// `s → (s² + ω₀²) / (s·bw)`. Doubles the order.
pub fn lp_to_bp(proto: &Zpk, wo: f64, bw: f64) -> Zpk {
    let degree = proto.relative_degree();
    let half_bw = bw / 2.0;
    let scaled_zeros: Vec<Complex64> = proto.zeros.iter().map(|&z| z * half_bw).collect();
    let scaled_poles: Vec<Complex64> = proto.poles.iter().map(|&p| p * half_bw).collect();

    let mut zeros = split_roots(&scaled_zeros, wo);
    zeros.extend(std::iter::repeat(Complex64::new(0.0, 0.0)).take(degree));

    Zpk {
        zeros,
        poles: split_roots(&scaled_poles, wo),
        gain: proto.gain * bw.powi(degree as i32),
    }
}

/// `s → (s·bw) / (s² + ω₀²)`. Doubles the order; zeros at infinity land on ±jω₀.
pub fn lp_to_bs(proto: &Zpk, wo: f64, bw: f64) -> Zpk {
    let degree = proto.relative_degree();
    let half_bw = bw / 2.0;
    let inverted_zeros: Vec<Complex64> = proto.zeros.iter().map(|&z| half_bw / z).collect();
    let inverted_poles: Vec<Complex64> = proto.poles.iter().map(|&p| half_bw / p).collect();

    let mut zeros = split_roots(&inverted_zeros, wo);
    zeros.extend(std::iter::repeat(Complex64::new(0.0, wo)).take(degree));
    zeros.extend(std::iter::repeat(Complex64::new(0.0, -wo)).take(degree));

    Zpk {
        zeros,
        poles: split_roots(&inverted_poles, wo),
        gain: proto.gain * (neg_product(&proto.zeros) / neg_product(&proto.poles)).re,
    }
}

// ---------------------------------------------------------------------------
// Analog → digital
// ---------------------------------------------------------------------------

/// Pre-warp a normalized digital frequency (1 = Nyquist) to the analog
/// frequency that the bilinear transform at `fs` maps onto it.
pub fn prewarp(wn: f64, fs: f64) -> f64 {
    2.0 * fs * (std::f64::consts::PI * wn / fs).tan()
}

/// Bilinear transform `s = 2·fs·(z − 1)/(z + 1)` in zpk form. Zeros at
/// infinity map to Nyquist (`z = −1`).
pub fn bilinear(analog: &Zpk, fs: f64) -> Zpk {
    let fs2 = 2.0 * fs;
    let degree = analog.relative_degree();
    let map = |&r: &Complex64| (fs2 + r) / (fs2 - r);

    let mut zeros: Vec<Complex64> = analog.zeros.iter().map(map).collect();
    zeros.extend(std::iter::repeat(Complex64::new(-1.0, 0.0)).take(degree));

    let num = analog
        .zeros
        .iter()
        .fold(Complex64::new(1.0, 0.0), |acc, &z| acc * (fs2 - z));
    let den = analog
        .poles
        .iter()
        .fold(Complex64::new(1.0, 0.0), |acc, &p| acc * (fs2 - p));

    Zpk {
        zeros,
        poles: analog.poles.iter().map(map).collect(),
        gain: analog.gain * (num / den).re,
    }
}

/// Monic polynomial with the given roots, highest power first.
pub fn poly(roots: &[Complex64]) -> Vec<Complex64> {
    let mut coeffs = vec![Complex64::new(1.0, 0.0)];
    for &root in roots {
        coeffs.push(Complex64::new(0.0, 0.0));
        for i in (1..coeffs.len()).rev() {
            let prev = coeffs[i - 1];
            coeffs[i] -= root * prev;
        }
    }
    coeffs
}

/// Expand zpk into `(b, a)`. Roots come in conjugate pairs, so the imaginary
/// parts are rounding noise and dropped.
pub fn zpk_to_tf(zpk: &Zpk) -> (Vec<f64>, Vec<f64>) {
    let b = poly(&zpk.zeros).iter().map(|c| zpk.gain * c.re).collect();
    let a = poly(&zpk.poles).iter().map(|c| c.re).collect();
    (b, a)
}
