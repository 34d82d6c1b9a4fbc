use crate::common::constants::PION2;
use crate::domain::{SamplingError, SamplingResult};
use crate::numerics::quadrature::gauss_legendre;
use num_complex::Complex64;

/// Quadrature weight for Fourier mode `p` of the toroidally extended
/// colatitude integral used by MW sampling.
///
/// The weight is purely imaginary for `p = ±1`, real for even `p`, and zero
/// for every other odd `p`; the return type is complex in every branch.
pub fn weight_mw(p: i64) -> Complex64 {
    if p == 1 {
        Complex64::new(0.0, PION2)
    } else if p == -1 {
        Complex64::new(0.0, -PION2)
    } else if p % 2 == 0 {
        let p = p as f64;
        Complex64::new(2.0 / (1.0 - p * p), 0.0)
    } else {
        Complex64::new(0.0, 0.0)
    }
}

/// Driscoll–Healy quadrature weight at colatitude `theta` for band-limit
/// `bandlimit`.
///
/// Evaluates the finite series
/// `(2 / L) sin(theta) * sum_{k=0}^{L-1} sin((2k + 1) theta) / (2k + 1)`,
/// which is O(L); callers evaluate it once per theta sample, not per
/// (theta, phi) pair.
pub fn weight_dh(theta: f64, bandlimit: i64) -> SamplingResult<f64> {
    if bandlimit <= 0 {
        return Err(SamplingError::InvalidBandlimit { bandlimit });
    }

    let mut series = 0.0;
    for k in 0..bandlimit {
        let odd = (2 * k + 1) as f64;
        series += (odd * theta).sin() / odd;
    }

    Ok(2.0 / bandlimit as f64 * theta.sin() * series)
}

/// Fill `thetas` and `weights` with the Gauss–Legendre colatitude grid for
/// band-limit `bandlimit`.
///
/// Delegates to the L-point quadrature rule on [-1, 1] and maps each
/// abscissa through `acos`. The underlying abscissas are strictly
/// increasing, so the colatitudes come out strictly decreasing; no re-sort
/// is applied and `weights[i]` always corresponds to `thetas[i]`. Both
/// buffers must be caller-sized to `bandlimit`.
pub fn gl_thetas_weights(
    thetas: &mut [f64],
    weights: &mut [f64],
    bandlimit: i64,
) -> SamplingResult<()> {
    if bandlimit <= 0 {
        return Err(SamplingError::InvalidBandlimit { bandlimit });
    }

    let expected = bandlimit as usize;
    if thetas.len() != expected {
        return Err(SamplingError::LengthMismatch {
            context: "Gauss-Legendre theta",
            actual: thetas.len(),
            expected,
        });
    }
    if weights.len() != expected {
        return Err(SamplingError::LengthMismatch {
            context: "Gauss-Legendre weight",
            actual: weights.len(),
            expected,
        });
    }

    gauss_legendre(-1.0, 1.0, thetas, weights)?;
    for theta in thetas.iter_mut() {
        *theta = theta.acos();
    }

    Ok(())
}
