pub mod indexing;
pub mod quadrature;
pub mod sampling;
pub mod weights;

pub use indexing::{elm2ind, ind2elm};
pub use quadrature::{gauss_legendre, legendre_and_derivative};
pub use sampling::{
    dh_p2phi, dh_t2theta, gl_p2phi, mw_p2phi, mw_t2theta, nphi, ntheta, sample_count,
};
pub use weights::{gl_thetas_weights, weight_dh, weight_mw};

fn kahan_add(sum: &mut f64, correction: &mut f64, value: f64) {
    let corrected = value - *correction;
    let next = *sum + corrected;
    *correction = (next - *sum) - corrected;
    *sum = next;
}

/// Compensated summation; keeps quadrature weight sums exact enough to check
/// against the interval length.
pub fn stable_sum(values: &[f64]) -> f64 {
    let mut sum = 0.0;
    let mut correction = 0.0;

    for &value in values {
        kahan_add(&mut sum, &mut correction, value);
    }

    sum
}

pub fn relative_difference(lhs: f64, rhs: f64, relative_floor: f64) -> f64 {
    let scale = lhs.abs().max(rhs.abs()).max(relative_floor);
    (lhs - rhs).abs() / scale
}

pub fn within_tolerance(
    lhs: f64,
    rhs: f64,
    abs_tol: f64,
    rel_tol: f64,
    relative_floor: f64,
) -> bool {
    let abs_diff = (lhs - rhs).abs();
    abs_diff <= abs_tol || relative_difference(lhs, rhs, relative_floor) <= rel_tol
}
