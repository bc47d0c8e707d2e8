//! f32 stored as a flush-to-zero ordered i32 index.

use crate::consts::{INFINITY_BITS, SIGN_MASK, SUBNORMAL_MAX};

/// Position of an f32 in the ordered sequence of representable values.
///
/// Both zeros and all subnormals collapse to index 0. Positive normals count
/// up from 1 at the smallest normal, negative normals mirror them below 0, so
/// adjacent bit patterns are exactly one index apart on either side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct FtzOrd32(i32);

impl FtzOrd32 {
    /// Index shared by ±0 and every subnormal.
    pub const ZERO: Self = Self(0);
    /// Index of positive infinity, one past `f32::MAX`.
    pub const INFINITY: Self = Self((INFINITY_BITS - SUBNORMAL_MAX) as i32);
    /// Index of negative infinity.
    pub const NEG_INFINITY: Self = Self(-Self::INFINITY.0);

    /// Map a float to its index.
    ///
    /// NaN has no meaningful position; its bits land above the infinities.
    #[inline]
    pub fn from_f32(x: f32) -> Self {
        let bits = x.to_bits();
        let magnitude = (bits & !SIGN_MASK).saturating_sub(SUBNORMAL_MAX) as i32;
        if bits & SIGN_MASK != 0 {
            Self(-magnitude)
        } else {
            Self(magnitude)
        }
    }

    /// Map an index back to a float. Index 0 gives `+0.0`.
    #[inline]
    pub fn to_f32(self) -> f32 {
        if self.0 == 0 {
            return 0.0;
        }
        let magnitude = self.0.unsigned_abs() + SUBNORMAL_MAX;
        let sign = if self.0 < 0 { SIGN_MASK } else { 0 };
        f32::from_bits(sign | magnitude)
    }

    /// Raw index value.
    #[inline]
    pub fn get(self) -> i32 {
        self.0
    }

    /// Number of index steps between two positions.
    #[inline]
    pub fn distance(self, other: Self) -> u32 {
        self.0.abs_diff(other.0)
    }

    /// Move `n` steps, clamped to the infinities.
    pub fn saturating_offset(self, n: i64) -> Self {
        let bound = Self::INFINITY.0 as i64;
        Self((self.0 as i64 + n).clamp(-bound, bound) as i32)
    }
}

impl From<f32> for FtzOrd32 {
    #[inline]
    fn from(x: f32) -> Self {
        Self::from_f32(x)
    }
}

impl From<FtzOrd32> for f32 {
    #[inline]
    fn from(x: FtzOrd32) -> Self {
        x.to_f32()
    }
}
