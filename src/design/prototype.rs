//! Analog lowpass prototypes, normalized to a band edge of 1 rad/s.

use std::f64::consts::PI;

use num_complex::Complex64;

use super::elliptic::{asne, cde, ellipdeg, sne};

// ---------------------------------------------------------------------------
// Zpk – zeros, poles and gain of a rational transfer function
// ---------------------------------------------------------------------------

/// `H(s) = gain · Π(s − zᵢ) / Π(s − pᵢ)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Zpk {
    pub zeros: Vec<Complex64>,
    pub poles: Vec<Complex64>,
    pub gain: f64,
}

impl Zpk {
    /// Excess of poles over zeros.
    pub fn relative_degree(&self) -> usize {
        self.poles.len().saturating_sub(self.zeros.len())
    }
}

/// Product of `-rᵢ` over all roots; equals the polynomial's constant term.
pub(crate) fn neg_product(roots: &[Complex64]) -> Complex64 {
    roots
        .iter()
        .fold(Complex64::new(1.0, 0.0), |acc, &r| acc * -r)
}

/// `m = -N+1, -N+3, …, N-1`.
fn symmetric_indices(order: usize) -> impl Iterator<Item = f64> {
    let n = order as i64;
    (0..n).map(move |i| (2 * i - n + 1) as f64)
}

/// Butterworth: poles evenly spaced on the left half of the unit circle.
pub fn butterworth(order: usize) -> Zpk {
    let n = order as f64;
    let poles = symmetric_indices(order)
        .map(|m| -Complex64::from_polar(1.0, PI * m / (2.0 * n)))
        .collect();
    Zpk {
        zeros: Vec::new(),
        poles,
        gain: 1.0,
    }
}

/// Chebyshev type I with `ripple_db` of passband ripple; the gain at 1 rad/s
/// is `-ripple_db`.
pub fn chebyshev1(order: usize, ripple_db: f64) -> Zpk {
    let n = order as f64;
    let eps = (10f64.powf(0.1 * ripple_db) - 1.0).sqrt();
    let mu = (1.0 / eps).asinh() / n;

    let poles: Vec<Complex64> = symmetric_indices(order)
        .map(|m| -(Complex64::new(mu, PI * m / (2.0 * n))).sinh())
        .collect();

    let mut gain = neg_product(&poles).re;
    if order % 2 == 0 {
        gain /= (1.0 + eps * eps).sqrt();
    }
    Zpk {
        zeros: Vec::new(),
        poles,
        gain,
    }
}

/// Chebyshev type II with `attenuation_db` of stopband attenuation; the gain
/// first reaches `-attenuation_db` at 1 rad/s.
pub fn chebyshev2(order: usize, attenuation_db: f64) -> Zpk {
    let n = order as f64;
    let es = (10f64.powf(0.1 * attenuation_db) - 1.0).sqrt();
    let mu = es.asinh() / n;

    // m = 0 would put a zero at infinity (odd orders only).
    let zeros: Vec<Complex64> = symmetric_indices(order)
        .filter(|&m| m != 0.0)
        .map(|m| Complex64::new(0.0, 1.0 / (PI * m / (2.0 * n)).sin()))
        .collect();

    let poles: Vec<Complex64> = symmetric_indices(order)
        .map(|m| {
            let p = -Complex64::from_polar(1.0, PI * m / (2.0 * n));
            Complex64::new(mu.sinh() * p.re, mu.cosh() * p.im).inv()
        })
        .collect();

    let gain = (neg_product(&poles) / neg_product(&zeros)).re;
    Zpk { zeros, poles, gain }
}

/// Elliptic (Cauer) with `ripple_db` passband ripple and `attenuation_db`
/// stopband attenuation; the passband edge sits at 1 rad/s.
pub fn elliptic(order: usize, ripple_db: f64, attenuation_db: f64) -> Zpk {
    let n = order as f64;
    let ep = (10f64.powf(0.1 * ripple_db) - 1.0).sqrt();
    let es = (10f64.powf(0.1 * attenuation_db) - 1.0).sqrt();
    let k1 = ep / es;
    let k = ellipdeg(order, k1);

    let j = Complex64::i();
    let v0 = -j * asne(j / ep, k1) / n;

    let mut zeros = Vec::with_capacity(order);
    let mut poles = Vec::with_capacity(order);
    for i in 1..=order / 2 {
        let u = Complex64::new((2 * i - 1) as f64 / n, 0.0);

        let zero = j / (k * cde(u, k));
        zeros.push(zero);
        zeros.push(zero.conj());

        let pole = j * cde(u - j * v0, k);
        poles.push(pole);
        poles.push(pole.conj());
    }
    if order % 2 == 1 {
        let real_pole = j * sne(j * v0, k);
        poles.push(Complex64::new(real_pole.re, 0.0));
    }

    // Odd orders peak at DC, even orders start at the bottom of the ripple.
    let dc_gain = if order % 2 == 1 {
        1.0
    } else {
        10f64.powf(-ripple_db / 20.0)
    };
    let gain = dc_gain * (neg_product(&poles) / neg_product(&zeros)).re;
    Zpk { zeros, poles, gain }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    /// |H(jω)| in dB for an analog zpk.
    fn analog_gain_db(zpk: &Zpk, omega: f64) -> f64 {
        let s = Complex64::new(0.0, omega);
        let num = zpk
            .zeros
            .iter()
            .fold(Complex64::new(zpk.gain, 0.0), |acc, &z| acc * (s - z));
        let den = zpk
            .poles
            .iter()
            .fold(Complex64::new(1.0, 0.0), |acc, &p| acc * (s - p));
        20.0 * (num / den).norm().log10()
    }

    fn assert_stable(zpk: &Zpk) {
        for p in &zpk.poles {
            assert!(p.re < 0.0, "pole {p} not in left half-plane");
        }
    }

    #[test]
    fn test_butterworth_half_power_at_unity() {
        for order in 1..=8 {
            let zpk = butterworth(order);
            assert_eq!(zpk.poles.len(), order);
            assert!(zpk.zeros.is_empty());
            assert_stable(&zpk);
            assert_abs_diff_eq!(analog_gain_db(&zpk, 1.0), -3.0103, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_chebyshev1_ripple_edge() {
        for order in 1..=7 {
            let zpk = chebyshev1(order, 0.5);
            assert_stable(&zpk);
            assert_abs_diff_eq!(analog_gain_db(&zpk, 1.0), -0.5, epsilon = 1e-9);
        }
        // Even orders sit at the bottom of the ripple at DC.
        assert_abs_diff_eq!(analog_gain_db(&chebyshev1(4, 0.5), 0.0), -0.5, epsilon = 1e-9);
        assert_abs_diff_eq!(analog_gain_db(&chebyshev1(3, 0.5), 0.0), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_chebyshev2_stopband_edge() {
        for order in 1..=7 {
            let zpk = chebyshev2(order, 20.0);
            assert_stable(&zpk);
            assert_eq!(zpk.zeros.len(), order - order % 2);
            assert_abs_diff_eq!(analog_gain_db(&zpk, 0.0), 0.0, epsilon = 1e-9);
            assert_abs_diff_eq!(analog_gain_db(&zpk, 1.0), -20.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_elliptic_band_edges() {
        for order in 1..=7 {
            let zpk = elliptic(order, 0.5, 20.0);
            assert_eq!(zpk.poles.len(), order);
            assert_eq!(zpk.zeros.len(), order - order % 2);
            assert_stable(&zpk);
            assert_abs_diff_eq!(analog_gain_db(&zpk, 1.0), -0.5, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_elliptic_zeros_on_imaginary_axis() {
        let zpk = elliptic(4, 0.5, 20.0);
        for z in &zpk.zeros {
            assert_abs_diff_eq!(z.re, 0.0, epsilon = 1e-12);
            // Zeros live in the stopband, beyond the passband edge.
            assert!(z.im.abs() > 1.0);
        }
    }
}
