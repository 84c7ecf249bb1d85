//! Area-averaging resampling onto a fixed grid
//!
//! Every output sample averages the source samples it covers, weighted by the
//! exact fraction of each source sample inside its footprint. The same rule
//! downsamples large images and replicates small ones, and the work stays
//! linear in the source size.

use ndarray::Array2;

/// Source index and weight contributing to one output sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tap {
    /// Index of the source sample along the axis
    pub index: usize,
    /// Fraction of the output footprint covered by this source sample
    pub weight: f64,
}

/// Compute the taps mapping `source_len` samples onto `target_len` samples
///
/// Footprint boundaries are tracked in integer units of `1 / target_len` so
/// coverage fractions are exact rationals. Returns an empty list if either
/// length is zero.
pub fn axis_taps(source_len: usize, target_len: usize) -> Vec<Vec<Tap>> {
    if source_len == 0 || target_len == 0 {
        return Vec::new();
    }

    let span = source_len as f64;
    (0..target_len)
        .map(|output| {
            let start = output * source_len;
            let end = start + source_len;
            let first = start / target_len;
            let last = (end - 1) / target_len;

            (first..=last)
                .filter_map(|index| {
                    let pixel_start = index * target_len;
                    let pixel_end = pixel_start + target_len;
                    let overlap = end.min(pixel_end).saturating_sub(start.max(pixel_start));
                    (overlap > 0).then(|| Tap {
                        index,
                        weight: overlap as f64 / span,
                    })
                })
                .collect()
        })
        .collect()
}

/// Resample a grid to `rows` x `cols` by area averaging
///
/// Returns `None` if the source or the target has zero area.
pub fn area_average(source: &Array2<f64>, rows: usize, cols: usize) -> Option<Array2<f64>> {
    let (source_rows, source_cols) = source.dim();
    if source_rows == 0 || source_cols == 0 || rows == 0 || cols == 0 {
        return None;
    }

    let col_taps = axis_taps(source_cols, cols);
    let row_taps = axis_taps(source_rows, rows);

    // Horizontal pass: source_rows x cols
    let mut horizontal = Array2::zeros((source_rows, cols));
    for (row, source_row) in source.outer_iter().enumerate() {
        for (col, taps) in col_taps.iter().enumerate() {
            let value = taps
                .iter()
                .map(|tap| source_row.get(tap.index).copied().unwrap_or(0.0) * tap.weight)
                .sum::<f64>();
            if let Some(cell) = horizontal.get_mut((row, col)) {
                *cell = value;
            }
        }
    }

    // Vertical pass: rows x cols
    let mut result = Array2::zeros((rows, cols));
    for (row, taps) in row_taps.iter().enumerate() {
        for col in 0..cols {
            let value = taps
                .iter()
                .map(|tap| horizontal.get((tap.index, col)).copied().unwrap_or(0.0) * tap.weight)
                .sum::<f64>();
            if let Some(cell) = result.get_mut((row, col)) {
                *cell = value;
            }
        }
    }

    Some(result)
}
