//! Two-dimensional Haar wavelet decomposition in the standard quadrant layout
//!
//! For a square input of side `n`, level `k` (half-size `s = n / 2^k`) stores
//! its detail coefficients in three quadrants:
//! - rows `s..2s`, cols `0..s`: differences along the row axis
//! - rows `0..s`, cols `s..2s`: differences along the column axis
//! - rows `s..2s`, cols `s..2s`: diagonal differences
//!
//! and the final approximation (mean of the whole input) lands at `[0, 0]`.

use ndarray::Array2;

/// Full multi-level Haar decomposition of a square power-of-two grid
///
/// Returns `None` when the input is not square with a power-of-two side.
pub fn haar_decompose(source: &Array2<f64>) -> Option<Array2<f64>> {
    let (rows, cols) = source.dim();
    if rows != cols || !rows.is_power_of_two() {
        return None;
    }

    let mut coefficients = Array2::zeros((rows, cols));
    let mut approximation = source.clone();
    let mut size = rows;

    while size > 1 {
        let half = size / 2;
        let mut next = Array2::zeros((half, half));

        for i in 0..half {
            for j in 0..half {
                let sample = |row: usize, col: usize| {
                    approximation.get((row, col)).copied().unwrap_or(0.0)
                };
                let a = sample(2 * i, 2 * j);
                let b = sample(2 * i + 1, 2 * j);
                let c = sample(2 * i, 2 * j + 1);
                let d = sample(2 * i + 1, 2 * j + 1);

                let details = [
                    ((i + half, j), (-a + b - c + d) / 4.0),
                    ((i, j + half), (-a - b + c + d) / 4.0),
                    ((i + half, j + half), (a - b - c + d) / 4.0),
                ];
                for (position, value) in details {
                    if let Some(cell) = coefficients.get_mut(position) {
                        *cell = value;
                    }
                }
                if let Some(cell) = next.get_mut((i, j)) {
                    *cell = (a + b + c + d) / 4.0;
                }
            }
        }

        approximation = next;
        size = half;
    }

    if let (Some(mean), Some(cell)) = (approximation.get((0, 0)), coefficients.get_mut((0, 0))) {
        *cell = *mean;
    }
    Some(coefficients)
}

/// Euclidean norm of a square block of coefficients
///
/// Blocks reaching past the grid are clipped to it.
pub fn block_energy(coefficients: &Array2<f64>, row: usize, col: usize, size: usize) -> f64 {
    let (rows, cols) = coefficients.dim();
    let row_end = (row + size).min(rows);
    let col_end = (col + size).min(cols);
    if row >= row_end || col >= col_end {
        return 0.0;
    }

    (row..row_end)
        .flat_map(|r| (col..col_end).map(move |c| (r, c)))
        .filter_map(|position| coefficients.get(position))
        .map(|value| value * value)
        .sum::<f64>()
        .sqrt()
}
