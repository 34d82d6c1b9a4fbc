use crate::domain::{SamplingError, SamplingResult};

/// Flat storage index of the harmonic coefficient (el, m).
///
/// Coefficients are packed degree-major: degree `el` occupies the block
/// `[el^2, el^2 + 2el]` with `m` running from `-el` to `el`, so
/// `ind = el^2 + el + m`.
pub fn elm2ind(el: i64, m: i64) -> SamplingResult<i64> {
    if el < 0 || m < -el || m > el {
        return Err(SamplingError::InvalidHarmonicIndex { el, m });
    }

    Ok(el * el + el + m)
}

/// Recover (el, m) from a flat storage index.
///
/// The degree comes from the integer floor of `sqrt(ind)`; the floating
/// square root can land one unit off at perfect-square boundaries, so the
/// candidate is nudged until `el^2 <= ind < (el + 1)^2` holds exactly.
pub fn ind2elm(ind: i64) -> SamplingResult<(i64, i64)> {
    if ind < 0 {
        return Err(SamplingError::InvalidFlatIndex { ind });
    }

    let mut el = (ind as f64).sqrt() as i64;
    while el > 0 && el * el > ind {
        el -= 1;
    }
    while (el + 1) * (el + 1) <= ind {
        el += 1;
    }

    Ok((el, ind - el * el - el))
}

#[cfg(test)]
mod tests {
    use super::{elm2ind, ind2elm};
    use crate::domain::SamplingError;

    #[test]
    fn flat_indices_pack_degree_blocks_contiguously() {
        assert_eq!(elm2ind(0, 0).expect("(0,0)"), 0);
        assert_eq!(elm2ind(1, -1).expect("(1,-1)"), 1);
        assert_eq!(elm2ind(1, 0).expect("(1,0)"), 2);
        assert_eq!(elm2ind(1, 1).expect("(1,1)"), 3);
        assert_eq!(elm2ind(2, 1).expect("(2,1)"), 7);
        assert_eq!(elm2ind(10, -7).expect("(10,-7)"), 103);
    }

    #[test]
    fn round_trip_holds_for_every_coefficient_below_the_bandlimit() {
        let bandlimit = 16_i64;
        for el in 0..bandlimit {
            for m in -el..=el {
                let ind = elm2ind(el, m).expect("elm2ind");
                assert!(ind >= 0 && ind < bandlimit * bandlimit);
                assert_eq!(ind2elm(ind).expect("ind2elm"), (el, m));
            }
        }
        for ind in 0..(bandlimit * bandlimit) {
            let (el, m) = ind2elm(ind).expect("ind2elm");
            assert_eq!(elm2ind(el, m).expect("elm2ind"), ind);
        }
    }

    #[test]
    fn perfect_square_boundaries_resolve_to_the_new_degree() {
        for el in 1..200_i64 {
            let boundary = el * el;
            assert_eq!(ind2elm(boundary).expect("boundary"), (el, -el));
            assert_eq!(ind2elm(boundary - 1).expect("below"), (el - 1, el - 1));
        }
    }

    #[test]
    fn large_indices_survive_the_floating_point_degree_extraction() {
        for el in [46_340_i64, 94_906_265, 1_000_000_007] {
            let ind = el * el;
            assert_eq!(ind2elm(ind).expect("square"), (el, -el));
            assert_eq!(ind2elm(ind + el).expect("center"), (el, 0));
            assert_eq!(ind2elm(ind + 2 * el).expect("top"), (el, el));
        }
    }

    #[test]
    fn invalid_harmonic_pairs_and_negative_indices_are_rejected() {
        assert_eq!(
            elm2ind(-1, 0).expect_err("el=-1"),
            SamplingError::InvalidHarmonicIndex { el: -1, m: 0 }
        );
        assert_eq!(
            elm2ind(2, 3).expect_err("m>el"),
            SamplingError::InvalidHarmonicIndex { el: 2, m: 3 }
        );
        assert_eq!(
            elm2ind(2, -3).expect_err("m<-el"),
            SamplingError::InvalidHarmonicIndex { el: 2, m: -3 }
        );
        assert_eq!(
            ind2elm(-5).expect_err("ind=-5"),
            SamplingError::InvalidFlatIndex { ind: -5 }
        );
    }
}
