//! Errors of the ULP helpers.

use thiserror::Error;

/// ULP comparison error.
#[derive(Debug, Error)]
pub enum UlpError {
    /// An input was NaN.
    #[error("cannot measure ULP distance to NaN")]
    NotANumber,
    /// An input was infinite.
    #[error("cannot measure ULP distance to {0}")]
    Infinite(f32),
    /// The compared slices have different lengths.
    #[error("length mismatch: expected {expected} values, got {actual}")]
    LengthMismatch {
        /// expected length
        expected: usize,
        /// actual length
        actual: usize,
    },
    /// A float literal could not be parsed.
    #[error("invalid float literal `{0}`")]
    InvalidLiteral(String),
}
