pub type SamplingResult<T> = Result<T, SamplingError>;

/// Precondition and convergence failures reported by the sampling kernels.
///
/// Every variant carries the offending values; callers either get a fully
/// populated output or exactly one of these, never a partial result.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SamplingError {
    #[error("band-limit must be positive, got {bandlimit}")]
    InvalidBandlimit { bandlimit: i64 },
    #[error("harmonic indices must satisfy 0 <= el and -el <= m <= el, got el={el}, m={m}")]
    InvalidHarmonicIndex { el: i64, m: i64 },
    #[error("flat harmonic index must be non-negative, got {ind}")]
    InvalidFlatIndex { ind: i64 },
    #[error("{axis} sample index {index} is outside the grid for band-limit {bandlimit}")]
    InvalidSampleIndex {
        axis: &'static str,
        index: i64,
        bandlimit: i64,
    },
    #[error("quadrature interval must have finite bounds with lower < upper, got [{lower}, {upper}]")]
    InvalidInterval { lower: f64, upper: f64 },
    #[error("quadrature requires at least 1 node, got {actual}")]
    InsufficientPoints { actual: usize },
    #[error("{context} buffer length mismatch: got {actual}, expected {expected}")]
    LengthMismatch {
        context: &'static str,
        actual: usize,
        expected: usize,
    },
    #[error("Newton iteration for quadrature node {node_index} did not converge within {iterations} iterations")]
    NonConvergence {
        node_index: usize,
        iterations: usize,
    },
}
