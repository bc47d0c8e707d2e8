//! ULP distance between single-precision floats.
//!
//! Values are placed on a flush-to-zero ordered index: both zeros and every
//! subnormal share index 0, the smallest normal sits at ±1, and each following
//! bit pattern moves one step further out. The distance is the difference of
//! two indices.

#![forbid(missing_docs)]
pub mod compare;
pub mod consts;
pub mod error;
pub mod ord32;
pub mod ulp;
pub mod utils;

pub use compare::{assert_ulp_eq, compare_slices, Mismatch, UlpReport};
pub use error::UlpError;
pub use ord32::FtzOrd32;
pub use ulp::{checked_diff_ulp, diff_ulp, diff_ulp_as, ulp_interval, within_ulp};
