//! Scalar comparisons

/// `2^63`, the first float above the `i64` range
const I64_UPPER_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Float equality with a symmetric relative tolerance
///
/// Equal values and pairs of NaN are close. Otherwise the difference must be
/// within `tolerance` times the larger magnitude; an infinity is only close
/// to itself.
#[inline]
#[must_use]
pub fn floats_close(a: f64, b: f64, tolerance: f64) -> bool {
    if a == b || (a.is_nan() && b.is_nan()) {
        return true;
    }
    if a.is_infinite() || b.is_infinite() {
        return false;
    }
    (a - b).abs() <= tolerance * a.abs().max(b.abs())
}

/// Exact equality between a float and an integer
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn float_equals_int(f: f64, i: i64) -> bool {
    if !f.is_finite() || f.fract() != 0.0 {
        return false;
    }
    if !(-I64_UPPER_BOUND..I64_UPPER_BOUND).contains(&f) {
        return false;
    }
    f as i64 == i
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tolerance_is_relative_to_larger_magnitude() {
        assert!(floats_close(100.0, 100.0 + 1e-9, 1e-10));
        assert!(!floats_close(1.0, 1.0 + 1e-9, 1e-10));
    }

    #[test]
    fn test_infinities() {
        assert!(floats_close(f64::INFINITY, f64::INFINITY, 0.5));
        assert!(!floats_close(f64::INFINITY, f64::MAX, 0.5));
        assert!(!floats_close(f64::INFINITY, f64::NEG_INFINITY, 0.5));
    }

    #[test]
    fn test_float_equals_int_bounds() {
        assert!(float_equals_int(-9_223_372_036_854_775_808.0, i64::MIN));
        assert!(!float_equals_int(I64_UPPER_BOUND, i64::MAX));
        assert!(!float_equals_int(2.5, 2));
        assert!(!float_equals_int(f64::NAN, 0));
    }
}
