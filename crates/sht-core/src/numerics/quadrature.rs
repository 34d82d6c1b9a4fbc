use crate::common::constants::PI;
use crate::domain::{SamplingError, SamplingResult};

/// Absolute convergence tolerance on a Legendre root.
const NEWTON_TOLERANCE: f64 = 1.0e-14;
/// Cap on Newton steps per root; exceeding it is reported, never spun on.
const MAX_NEWTON_ITERATIONS: usize = 100;

/// Evaluate the Legendre polynomial `P_n` and its derivative at `z`.
///
/// Uses the three-term recurrence for the value and the standard derivative
/// relation `P'_n(z) = n (z P_n - P_{n-1}) / (z^2 - 1)`, with the closed-form
/// endpoint values `P'_n(±1) = (±1)^{n+1} n (n + 1) / 2` where that relation
/// is singular.
pub fn legendre_and_derivative(n: usize, z: f64) -> (f64, f64) {
    if n == 0 {
        return (1.0, 0.0);
    }

    let mut current = 1.0;
    let mut previous = 0.0;
    for j in 1..=n {
        let older = previous;
        previous = current;
        current = ((2 * j - 1) as f64 * z * previous - (j - 1) as f64 * older) / j as f64;
    }

    let denominator = z * z - 1.0;
    if denominator == 0.0 {
        let magnitude = (n * (n + 1)) as f64 / 2.0;
        let slope = if z < 0.0 && n % 2 == 0 {
            -magnitude
        } else {
            magnitude
        };
        return (current, slope);
    }

    (current, n as f64 * (z * current - previous) / denominator)
}

/// Fill `nodes` and `weights` with the n-point Gauss–Legendre rule on
/// `[x1, x2]`, where `n = nodes.len()`.
///
/// Roots of `P_n` are symmetric about zero, so only the first `ceil(n / 2)`
/// are solved for; each mirrored node shares its weight. The abscissas come
/// out strictly increasing. Both buffers must be caller-sized to `n`; on any
/// error their contents are unspecified.
pub fn gauss_legendre(
    x1: f64,
    x2: f64,
    nodes: &mut [f64],
    weights: &mut [f64],
) -> SamplingResult<()> {
    let n = nodes.len();
    if weights.len() != n {
        return Err(SamplingError::LengthMismatch {
            context: "quadrature weight",
            actual: weights.len(),
            expected: n,
        });
    }
    if n == 0 {
        return Err(SamplingError::InsufficientPoints { actual: 0 });
    }
    if !x1.is_finite() || !x2.is_finite() || x1 >= x2 {
        return Err(SamplingError::InvalidInterval {
            lower: x1,
            upper: x2,
        });
    }

    tracing::trace!(n, x1, x2, "computing Gauss-Legendre quadrature rule");

    let half_count = n.div_ceil(2);
    let midpoint = 0.5 * (x2 + x1);
    let half_length = 0.5 * (x2 - x1);

    for i in 1..=half_count {
        // Asymptotic estimate of the i-th root of P_n, refined by Newton.
        let mut z = (PI * (i as f64 - 0.25) / (n as f64 + 0.5)).cos();
        let mut slope = 0.0;
        let mut converged = false;

        for _ in 0..MAX_NEWTON_ITERATIONS {
            let (value, derivative) = legendre_and_derivative(n, z);
            let step = value / derivative;
            z -= step;
            slope = derivative;
            if step.abs() <= NEWTON_TOLERANCE {
                converged = true;
                break;
            }
        }

        if !converged {
            tracing::debug!(
                node_index = i - 1,
                iterations = MAX_NEWTON_ITERATIONS,
                "Newton refinement of Legendre root exceeded the iteration cap"
            );
            return Err(SamplingError::NonConvergence {
                node_index: i - 1,
                iterations: MAX_NEWTON_ITERATIONS,
            });
        }

        let weight = 2.0 * half_length / ((1.0 - z * z) * slope * slope);
        nodes[i - 1] = midpoint - half_length * z;
        nodes[n - i] = midpoint + half_length * z;
        weights[i - 1] = weight;
        weights[n - i] = weight;
    }

    Ok(())
}
