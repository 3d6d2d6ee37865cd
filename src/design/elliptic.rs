//! Jacobi elliptic functions and the elliptic degree equation.
//!
//! Functions take their argument `u` normalized to the quarter period,
//! i.e. `cde(u, k) = cd(u·K(k), k)`. Everything is evaluated through the
//! Landen sequence of descending moduli, which converges in a handful of
//! steps for any modulus in `[0, 1)`.

use std::f64::consts::{FRAC_PI_2, PI};

use num_complex::Complex64;

const LANDEN_MAX_STEPS: usize = 16;

/// Descending Landen moduli `k₁, k₂, …` starting from `k`, stopped once
/// below machine precision.
pub fn landen(k: f64) -> Vec<f64> {
    let mut moduli = Vec::new();
    let mut k = k;
    for _ in 0..LANDEN_MAX_STEPS {
        if k <= f64::EPSILON {
            break;
        }
        let kp = (1.0 - k * k).sqrt();
        k = (k / (1.0 + kp)).powi(2);
        moduli.push(k);
    }
    moduli
}

/// Complete elliptic integral of the first kind, `K(k)`.
pub fn ellipk(k: f64) -> f64 {
    if k >= 1.0 {
        return f64::INFINITY;
    }
    FRAC_PI_2 * landen(k).iter().map(|v| 1.0 + v).product::<f64>()
}

/// Complementary modulus `k' = √(1 − k²)`.
pub fn complement(k: f64) -> f64 {
    (1.0 - k * k).sqrt()
}

fn ascend(mut w: Complex64, moduli: &[f64]) -> Complex64 {
    for &v in moduli.iter().rev() {
        w = (1.0 + v) * w / (1.0 + v * w * w);
    }
    w
}

/// `cd(u·K, k)` for complex normalized `u`.
pub fn cde(u: Complex64, k: f64) -> Complex64 {
    ascend((u * FRAC_PI_2).cos(), &landen(k))
}

/// `sn(u·K, k)` for complex normalized `u`.
pub fn sne(u: Complex64, k: f64) -> Complex64 {
    ascend((u * FRAC_PI_2).sin(), &landen(k))
}

/// Symmetric remainder: `x mod y` folded into `[-y/2, y/2]`.
fn srem(x: f64, y: f64) -> f64 {
    let z = x % y;
    if z.abs() > y / 2.0 {
        z - y * z.signum()
    } else {
        z
    }
}

/// Inverse of [`cde`]: the normalized `u` with `cd(u·K, k) = w`, reduced to
/// the fundamental period rectangle.
pub fn acde(w: Complex64, k: f64) -> Complex64 {
    let moduli = landen(k);
    let mut w = w;
    let mut prev = k;
    for &v in &moduli {
        w = w / (1.0 + (1.0 - w * w * prev * prev).sqrt()) * (2.0 / (1.0 + v));
        prev = v;
    }
    let u = w.acos() * (2.0 / PI);

    let ratio = ellipk(complement(k)) / ellipk(k);
    Complex64::new(srem(u.re, 4.0), srem(u.im, 2.0 * ratio))
}

/// Inverse of [`sne`].
pub fn asne(w: Complex64, k: f64) -> Complex64 {
    Complex64::new(1.0, 0.0) - acde(w, k)
}

/// Solve the degree equation `N·K'/K = K₁'/K₁` for the selectivity modulus
/// `k`, given the order and the discrimination modulus `k1`.
pub fn ellipdeg(order: usize, k1: f64) -> f64 {
    let k1p = complement(k1);
    let n = order as f64;
    let kp = (1..=order / 2).fold(k1p.powi(order as i32), |acc, i| {
        let u = Complex64::new((2 * i - 1) as f64 / n, 0.0);
        acc * sne(u, k1p).re.powi(4)
    });
    complement(kp)
}
