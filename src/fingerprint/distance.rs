//! Euclidean distances between patterns and between signatures

use crate::fingerprint::pattern::{Pattern, is_undefined};
use crate::fingerprint::signature::Signature;
use crate::math::precision::Precision;

/// Result of a cell-wise pattern comparison
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatternComparison {
    /// Euclidean distance over the compared cells, rounded
    pub distance: f32,
    /// Number of cells defined in both patterns
    pub compared_cells: usize,
}

/// Compare two patterns over the cells both of them define
///
/// A cell undefined in either pattern is skipped rather than read as zero.
/// When no cell is defined in both (for instance two empty patterns) the
/// distance is zero by convention and `compared_cells` is zero, so callers
/// can tell "identical" from "nothing to compare".
///
/// The sum is accumulated in `f64`, so it never overflows for finite cells.
/// A root beyond `f32::MAX` still saturates to `f32::INFINITY` on the way out.
pub fn compare_patterns(a: &Pattern, b: &Pattern, precision: Precision) -> PatternComparison {
    let (sum, compared_cells) = a
        .iter()
        .zip(b.iter())
        .filter(|(x, y)| !is_undefined(*x) && !is_undefined(*y))
        .fold((0.0_f64, 0_usize), |(sum, count), (x, y)| {
            let delta = f64::from(x) - f64::from(y);
            (sum + delta * delta, count + 1)
        });

    if compared_cells == 0 {
        tracing::debug!("no cell defined in both patterns, distance is zero by convention");
    }

    PatternComparison {
        distance: precision.round(sum.sqrt()) as f32,
        compared_cells,
    }
}

/// Distance between two patterns; see [`compare_patterns`]
pub fn measure_patterns(a: &Pattern, b: &Pattern, precision: Precision) -> f32 {
    compare_patterns(a, b, precision).distance
}

/// Euclidean distance between two signatures
///
/// Saturates to `f32::INFINITY` like [`compare_patterns`].
pub fn measure_signatures(a: &Signature, b: &Signature, precision: Precision) -> f32 {
    let sum = a
        .values()
        .iter()
        .zip(b.values().iter())
        .map(|(&x, &y)| {
            let delta = f64::from(x) - f64::from(y);
            delta * delta
        })
        .sum::<f64>();
    precision.round(sum.sqrt()) as f32
}
