//! Pattern extraction from decoded luminance grids
//!
//! The grid is area-averaged onto 64x64 cells, stretched to the full `[0, 1]`
//! range, and each cell records its Sobel gradient magnitude. Cells without
//! local variation get the undefined sentinel, so featureless regions are
//! located without being counted as structure. An image whose luminance
//! range collapses yields an empty pattern.
//!
//! All arithmetic runs in `f64` without fused operations, which keeps results
//! bit-identical across platforms.

use ndarray::Array2;

use crate::fingerprint::pattern::{Pattern, UNDEFINED};
use crate::io::configuration::{
    FLAT_RANGE_EPSILON, MAX_SOURCE_PIXELS, PATTERN_SIZE, STRUCTURE_EPSILON,
};
use crate::io::error::{FingerprintError, Result};
use crate::math::precision::Precision;
use crate::spatial::gradient::sobel_magnitude;
use crate::spatial::pixels::PixelGrid;
use crate::spatial::resample::area_average;

/// Reduce a luminance grid to a pattern
///
/// # Errors
///
/// Returns an error if the grid has zero area or exceeds the source size limit
pub fn extract_pattern(source: &PixelGrid, precision: Precision) -> Result<Pattern> {
    let (width, height) = (source.width(), source.height());
    let unsupported = |reason: &str| FingerprintError::UnsupportedInput {
        width,
        height,
        reason: reason.to_string(),
    };

    if width == 0 || height == 0 {
        return Err(unsupported("image has zero area"));
    }
    if width.saturating_mul(height) > MAX_SOURCE_PIXELS {
        return Err(unsupported("image exceeds the source pixel limit"));
    }

    let resampled = area_average(source.luminance(), PATTERN_SIZE, PATTERN_SIZE)
        .ok_or_else(|| unsupported("image cannot be resampled"))?;

    let Some(normalized) = normalize(&resampled) else {
        tracing::debug!(width, height, "flat luminance, pattern is empty");
        return Ok(Pattern::undefined());
    };

    let magnitude = sobel_magnitude(&normalized);
    let cells: Array2<f32> = magnitude.mapv(|value| {
        if value <= STRUCTURE_EPSILON {
            UNDEFINED
        } else {
            precision.round(value) as f32
        }
    });

    let pattern = Pattern::from_canonical(cells);
    tracing::debug!(
        width,
        height,
        defined = pattern.defined_count(),
        "pattern extracted"
    );
    Ok(pattern)
}

/// Stretch a grid linearly so its minimum maps to 0 and its maximum to 1
///
/// Returns `None` when the range is too small to carry structure.
pub fn normalize(grid: &Array2<f64>) -> Option<Array2<f64>> {
    let (min, max) = grid
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &value| {
            (lo.min(value), hi.max(value))
        });

    let range = max - min;
    if !range.is_finite() || range <= FLAT_RANGE_EPSILON {
        return None;
    }
    Some(grid.mapv(|value| (value - min) / range))
}
