use std::hash::{Hash, Hasher};

/// `2^63`, the first `f64` above `i64::MAX`. `i64::MAX as f64` rounds up to this value.
const I64_UPPER_BOUND: f64 = 9_223_372_036_854_775_808.0;
/// `-2^63`, exactly `i64::MIN`.
const I64_LOWER_BOUND: f64 = -9_223_372_036_854_775_808.0;

/// Converts `value` to `i64` only if no rounding, truncation or wrapping is involved.
#[inline]
pub(crate) fn f64_to_i64_exact(value: f64) -> Option<i64> {
    if !value.is_finite() || value.fract() != 0.0 {
        return None;
    }
    if (I64_LOWER_BOUND..I64_UPPER_BOUND).contains(&value) {
        // The value is integral and within range, hence the cast is exact
        #[allow(clippy::cast_possible_truncation)]
        Some(value as i64)
    } else {
        None
    }
}

#[inline]
pub(crate) fn f64_to_isize_exact(value: f64) -> Option<isize> {
    f64_to_i64_exact(value).and_then(|value| isize::try_from(value).ok())
}

/// The whole string must be an integer literal, with an optional sign.
#[inline]
pub(crate) fn parse_integer<T: std::str::FromStr>(input: &str) -> Option<T> {
    input.parse().ok()
}

#[inline]
pub(crate) fn parse_float(input: &str) -> Option<f64> {
    input.parse().ok()
}

/// Equal doubles must hash equally, so `-0.0` hashes as `0.0`.
#[inline]
pub(crate) fn hash_f64<H: Hasher>(value: f64, h: &mut H) {
    if value == 0.0f64 {
        0.0f64.to_bits().hash(h);
    } else {
        value.to_bits().hash(h);
    }
}
