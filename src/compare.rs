//! Compare expected and actual value slices within a ULP tolerance.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::UlpError;
use crate::ulp::{diff_ulp, within_ulp};

/// One element outside the tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Mismatch {
    /// position in both slices
    pub index: usize,
    /// expected value
    pub expected: f32,
    /// observed value
    pub actual: f32,
    /// ULP distance between them
    pub ulp: u32,
}

/// Result of comparing two slices.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UlpReport {
    /// number of compared elements
    pub compared: usize,
    /// allowed distance
    pub tolerance: u32,
    /// largest distance seen, including elements within tolerance
    pub max_ulp: u32,
    /// elements beyond tolerance, in index order
    pub mismatches: Vec<Mismatch>,
}

impl UlpReport {
    /// No element exceeded the tolerance.
    pub fn passed(&self) -> bool {
        self.mismatches.is_empty()
    }

    /// The mismatch with the largest distance; the first one wins ties.
    pub fn worst(&self) -> Option<&Mismatch> {
        self.mismatches
            .iter()
            .reduce(|worst, m| if m.ulp > worst.ulp { m } else { worst })
    }
}

/// Compare `actual` against `expected` element by element.
pub fn compare_slices(
    expected: &[f32],
    actual: &[f32],
    tolerance: u32,
) -> Result<UlpReport, UlpError> {
    if expected.len() != actual.len() {
        return Err(UlpError::LengthMismatch {
            expected: expected.len(),
            actual: actual.len(),
        });
    }

    let mut report = UlpReport {
        compared: expected.len(),
        tolerance,
        ..Default::default()
    };
    for (index, (&e, &a)) in expected.iter().zip(actual.iter()).enumerate() {
        let ulp = diff_ulp(e, a);
        report.max_ulp = report.max_ulp.max(ulp);
        if !within_ulp(e, a, tolerance) {
            debug!("index {index}: expected {e:e}, got {a:e} ({ulp} ULP)");
            report.mismatches.push(Mismatch {
                index,
                expected: e,
                actual: a,
                ulp,
            });
        }
    }
    Ok(report)
}

/// Assert that two slices agree within `tolerance` ULP.
///
/// # Panics
///
/// Panics if the lengths differ or any element pair is too far apart.
pub fn assert_ulp_eq(expected: &[f32], actual: &[f32], tolerance: u32) {
    let report = match compare_slices(expected, actual, tolerance) {
        Ok(report) => report,
        Err(err) => panic!("{err}"),
    };
    if let Some(m) = report.worst() {
        panic!(
            "ULP violation at index {}: expected {} got {} ({} ULP, max {}, {} of {} elements off)",
            m.index,
            m.expected,
            m.actual,
            m.ulp,
            tolerance,
            report.mismatches.len(),
            report.compared
        );
    }
}
