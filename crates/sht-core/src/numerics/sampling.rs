use crate::common::constants::PI;
use crate::domain::{SamplingError, SamplingResult, SamplingScheme};

fn check_bandlimit(bandlimit: i64) -> SamplingResult<()> {
    if bandlimit <= 0 {
        return Err(SamplingError::InvalidBandlimit { bandlimit });
    }
    Ok(())
}

fn check_sample_index(
    axis: &'static str,
    index: i64,
    upper: i64,
    bandlimit: i64,
) -> SamplingResult<()> {
    if index < 0 || index > upper {
        return Err(SamplingError::InvalidSampleIndex {
            axis,
            index,
            bandlimit,
        });
    }
    Ok(())
}

/// Colatitude of theta sample `t` for MW sampling.
///
/// `t` ranges over [0, 2L-2], giving 2L-1 equally spaced samples in
/// (0, 2pi) on the toroidally extended domain; the physical sphere uses the
/// subset landing in (0, pi].
pub fn mw_t2theta(t: i64, bandlimit: i64) -> SamplingResult<f64> {
    check_bandlimit(bandlimit)?;
    check_sample_index("theta", t, 2 * bandlimit - 2, bandlimit)?;
    Ok((2 * t + 1) as f64 * PI / (2 * bandlimit - 1) as f64)
}

/// Longitude of phi sample `p` for MW sampling.
///
/// `p` ranges over [0, 2L-2], giving 2L-1 equally spaced samples in
/// [0, 2pi).
pub fn mw_p2phi(p: i64, bandlimit: i64) -> SamplingResult<f64> {
    check_bandlimit(bandlimit)?;
    check_sample_index("phi", p, 2 * bandlimit - 2, bandlimit)?;
    Ok(2.0 * p as f64 * PI / (2 * bandlimit - 1) as f64)
}

/// Colatitude of theta sample `t` for Driscoll–Healy sampling.
///
/// `t` ranges over [0, 2L-1], giving 2L samples in (0, pi).
pub fn dh_t2theta(t: i64, bandlimit: i64) -> SamplingResult<f64> {
    check_bandlimit(bandlimit)?;
    check_sample_index("theta", t, 2 * bandlimit - 1, bandlimit)?;
    Ok((2 * t + 1) as f64 * PI / (4 * bandlimit) as f64)
}

/// Longitude of phi sample `p` for Driscoll–Healy sampling.
pub fn dh_p2phi(p: i64, bandlimit: i64) -> SamplingResult<f64> {
    check_bandlimit(bandlimit)?;
    check_sample_index("phi", p, 2 * bandlimit - 2, bandlimit)?;
    Ok(2.0 * p as f64 * PI / (2 * bandlimit - 1) as f64)
}

/// Longitude of phi sample `p` for Gauss–Legendre sampling.
pub fn gl_p2phi(p: i64, bandlimit: i64) -> SamplingResult<f64> {
    check_bandlimit(bandlimit)?;
    check_sample_index("phi", p, 2 * bandlimit - 2, bandlimit)?;
    Ok(2.0 * p as f64 * PI / (2 * bandlimit - 1) as f64)
}

/// Number of colatitude rings for `scheme` at band-limit `bandlimit`.
pub fn ntheta(scheme: SamplingScheme, bandlimit: i64) -> SamplingResult<i64> {
    check_bandlimit(bandlimit)?;
    Ok(match scheme {
        SamplingScheme::Mw | SamplingScheme::Gl => bandlimit,
        SamplingScheme::Dh => 2 * bandlimit,
    })
}

/// Number of longitude samples per ring for `scheme` at band-limit
/// `bandlimit`.
pub fn nphi(scheme: SamplingScheme, bandlimit: i64) -> SamplingResult<i64> {
    check_bandlimit(bandlimit)?;
    Ok(match scheme {
        SamplingScheme::Mw | SamplingScheme::Dh | SamplingScheme::Gl => 2 * bandlimit - 1,
    })
}

/// Total number of samples on the sphere for `scheme` at band-limit
/// `bandlimit`.
///
/// The MW grid places its last ring exactly on the south pole, where all
/// longitudes coincide, so that ring contributes a single sample.
pub fn sample_count(scheme: SamplingScheme, bandlimit: i64) -> SamplingResult<i64> {
    check_bandlimit(bandlimit)?;
    Ok(match scheme {
        SamplingScheme::Mw => (bandlimit - 1) * (2 * bandlimit - 1) + 1,
        SamplingScheme::Dh => 2 * bandlimit * (2 * bandlimit - 1),
        SamplingScheme::Gl => bandlimit * (2 * bandlimit - 1),
    })
}
