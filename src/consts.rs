//! Bit layout of IEEE-754 single precision.

/// Sign bit.
pub const SIGN_MASK: u32 = 0x8000_0000;
/// Biased exponent field.
pub const EXPONENT_MASK: u32 = 0x7F80_0000;
/// Stored mantissa field.
pub const MANTISSA_MASK: u32 = 0x007F_FFFF;
/// Number of stored mantissa bits.
pub const MANTISSA_BITS: u32 = 23;
/// Largest subnormal bit pattern. Everything at or below it flushes to zero.
pub const SUBNORMAL_MAX: u32 = MANTISSA_MASK;
/// Bit pattern of the smallest positive normal.
pub const MIN_NORMAL_BITS: u32 = 0x0080_0000;
/// Bit pattern of positive infinity.
pub const INFINITY_BITS: u32 = EXPONENT_MASK;
/// Returned by [`crate::diff_ulp`] when either input is NaN. No pair of
/// non-NaN values is this far apart.
pub const NAN_DISTANCE: u32 = u32::MAX;
