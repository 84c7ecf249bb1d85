//! Sobel gradient magnitude with replicated borders

use ndarray::Array2;

/// Largest Sobel magnitude reachable on inputs within `[0, 1]`
pub const SOBEL_MAX_MAGNITUDE: f64 = 4.0 * std::f64::consts::SQRT_2;

// Reads outside the grid clamp to the nearest edge sample
fn clamped(grid: &Array2<f64>, row: isize, col: isize) -> f64 {
    let (rows, cols) = grid.dim();
    if rows == 0 || cols == 0 {
        return 0.0;
    }
    let r = row.clamp(0, rows as isize - 1) as usize;
    let c = col.clamp(0, cols as isize - 1) as usize;
    grid.get((r, c)).copied().unwrap_or(0.0)
}

/// Horizontal and vertical Sobel responses at one position
pub fn sobel_at(grid: &Array2<f64>, row: usize, col: usize) -> (f64, f64) {
    let r = row as isize;
    let c = col as isize;
    let at = |dr: isize, dc: isize| clamped(grid, r + dr, c + dc);

    let gx = (at(-1, 1) + 2.0 * at(0, 1) + at(1, 1)) - (at(-1, -1) + 2.0 * at(0, -1) + at(1, -1));
    let gy = (at(1, -1) + 2.0 * at(1, 0) + at(1, 1)) - (at(-1, -1) + 2.0 * at(-1, 0) + at(-1, 1));
    (gx, gy)
}

/// Gradient magnitude of every sample, scaled to `[0, 1]` for inputs in `[0, 1]`
pub fn sobel_magnitude(grid: &Array2<f64>) -> Array2<f64> {
    Array2::from_shape_fn(grid.dim(), |(row, col)| {
        let (gx, gy) = sobel_at(grid, row, col);
        (gx * gx + gy * gy).sqrt() / SOBEL_MAX_MAGNITUDE
    })
}
