//! Sampling geometry and harmonic indexing for spherical harmonic transforms.
//!
//! This crate provides the grid, quadrature-weight, and index arithmetic
//! shared by the MW (McEwen–Wiaux), Driscoll–Healy, and Gauss–Legendre
//! sampling conventions on the sphere. Every routine is a pure function over
//! scalars and caller-sized buffers; the transform pipeline itself lives
//! elsewhere and calls into this crate per sample or per precomputation pass.

pub mod common;
pub mod domain;
pub mod numerics;

pub use domain::{SamplingError, SamplingResult, SamplingScheme};
pub use numerics::indexing::{elm2ind, ind2elm};
pub use numerics::quadrature::{gauss_legendre, legendre_and_derivative};
pub use numerics::sampling::{
    dh_p2phi, dh_t2theta, gl_p2phi, mw_p2phi, mw_t2theta, nphi, ntheta, sample_count,
};
pub use numerics::weights::{gl_thetas_weights, weight_dh, weight_mw};
