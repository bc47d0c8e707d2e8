//! Compute the ULP distance between two floats.

use num_traits::AsPrimitive;

use crate::consts::NAN_DISTANCE;
use crate::error::UlpError;
use crate::ord32::FtzOrd32;

/// Number of representable f32 values between `a` and `b`.
///
/// Subnormals count as zero, so any subnormal is 0 ULP from ±0 and 1 ULP
/// from the smallest normal of the same sign. Infinities sit one step past
/// `±f32::MAX`. If either input is NaN the result is
/// [`NAN_DISTANCE`](crate::consts::NAN_DISTANCE).
#[inline]
pub fn diff_ulp(a: f32, b: f32) -> u32 {
    if a.is_nan() || b.is_nan() {
        return NAN_DISTANCE;
    }
    FtzOrd32::from_f32(a).distance(FtzOrd32::from_f32(b))
}

/// [`diff_ulp`] for wider inputs, rounded to the nearest f32 first.
///
/// Finite `f64` values beyond the f32 range round to infinity.
#[inline]
pub fn diff_ulp_as<T: AsPrimitive<f32>>(a: T, b: T) -> u32 {
    diff_ulp(a.as_(), b.as_())
}

/// [`diff_ulp`] restricted to finite inputs.
pub fn checked_diff_ulp(a: f32, b: f32) -> Result<u32, UlpError> {
    for x in [a, b] {
        if x.is_nan() {
            return Err(UlpError::NotANumber);
        }
        if x.is_infinite() {
            return Err(UlpError::Infinite(x));
        }
    }
    Ok(diff_ulp(a, b))
}

/// Whether `actual` is at most `tolerance` ULP away from `expected`.
///
/// NaN on either side is never within tolerance.
#[inline]
pub fn within_ulp(expected: f32, actual: f32, tolerance: u32) -> bool {
    !expected.is_nan() && !actual.is_nan() && diff_ulp(expected, actual) <= tolerance
}

/// Smallest and largest f32 within `tolerance` ULP of `x`.
///
/// The bounds saturate at the infinities. For NaN both bounds are NaN.
pub fn ulp_interval(x: f32, tolerance: u32) -> (f32, f32) {
    if x.is_nan() {
        return (x, x);
    }
    let center = FtzOrd32::from_f32(x);
    let n = tolerance as i64;
    (
        center.saturating_offset(-n).to_f32(),
        center.saturating_offset(n).to_f32(),
    )
}
