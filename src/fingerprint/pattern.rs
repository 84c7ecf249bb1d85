//! The 64x64 pattern matrix and its undefined-cell sentinel
//!
//! Cells hold either a finite structure value or [`UNDEFINED`], the canonical
//! quiet NaN. Any other NaN payload is canonicalized on construction so the
//! sentinel survives storage bit for bit. Callers should prefer
//! [`Pattern::cell`], which exposes the sentinel as `None`, over raw access.

use bitvec::prelude::{BitVec, bitvec};
use ndarray::Array2;

use crate::io::configuration::{PATTERN_CELLS, PATTERN_SIZE, UNDEFINED_BITS};
use crate::io::error::{Result, invalid_pattern};
use crate::math::precision::Precision;

/// Sentinel marking a cell without usable structure
pub const UNDEFINED: f32 = f32::from_bits(UNDEFINED_BITS);

/// Test whether a raw cell value is the undefined sentinel
pub const fn is_undefined(value: f32) -> bool {
    value.is_nan()
}

/// Fixed 64x64 matrix of normalized structure values
///
/// Equality is bitwise, so two patterns are equal exactly when their
/// serialized forms are identical.
#[derive(Debug, Clone)]
pub struct Pattern {
    cells: Array2<f32>,
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.cells
            .iter()
            .zip(other.cells.iter())
            .all(|(a, b)| a.to_bits() == b.to_bits())
    }
}

impl Eq for Pattern {}

impl Pattern {
    /// Pattern where every cell is undefined
    pub fn undefined() -> Self {
        Self {
            cells: Array2::from_elem((PATTERN_SIZE, PATTERN_SIZE), UNDEFINED),
        }
    }

    /// Validate and wrap a raw 64x64 array
    ///
    /// # Errors
    ///
    /// Returns an error if the array is not 64x64 or holds an infinite value
    pub fn from_array(mut cells: Array2<f32>) -> Result<Self> {
        if cells.dim() != (PATTERN_SIZE, PATTERN_SIZE) {
            let (rows, cols) = cells.dim();
            return Err(invalid_pattern(&format!(
                "expected {PATTERN_SIZE}x{PATTERN_SIZE} cells, got {rows}x{cols}"
            )));
        }
        if let Some(((row, col), value)) = cells.indexed_iter().find(|(_, v)| v.is_infinite()) {
            return Err(invalid_pattern(&format!(
                "cell ({row}, {col}) holds {value}"
            )));
        }
        cells.mapv_inplace(|value| if value.is_nan() { UNDEFINED } else { value });
        Ok(Self { cells })
    }

    /// Build a pattern from a per-cell function, `None` meaning undefined
    ///
    /// # Errors
    ///
    /// Returns an error if the function yields an infinite value
    pub fn from_fn<F>(mut cell: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> Option<f32>,
    {
        Self::from_array(Array2::from_shape_fn(
            (PATTERN_SIZE, PATTERN_SIZE),
            |(row, col)| cell(row, col).unwrap_or(UNDEFINED),
        ))
    }

    /// Build a pattern from 4096 row-major raw values
    ///
    /// # Errors
    ///
    /// Returns an error if the count is wrong or a value is infinite
    pub fn from_row_major(values: Vec<f32>) -> Result<Self> {
        let count = values.len();
        let cells = Array2::from_shape_vec((PATTERN_SIZE, PATTERN_SIZE), values)
            .map_err(|e| invalid_pattern(&format!("{count} values: {e}")))?;
        Self::from_array(cells)
    }

    // Callers guarantee shape and sentinel canonicalization
    pub(crate) const fn from_canonical(cells: Array2<f32>) -> Self {
        Self { cells }
    }

    /// Value at a cell, `None` if undefined or outside the grid
    pub fn cell(&self, row: usize, col: usize) -> Option<f32> {
        self.cells
            .get((row, col))
            .copied()
            .filter(|value| !is_undefined(*value))
    }

    /// Raw cells including the sentinel
    pub const fn values(&self) -> &Array2<f32> {
        &self.cells
    }

    /// Raw cells in row-major order
    pub fn iter(&self) -> impl Iterator<Item = f32> + '_ {
        self.cells.iter().copied()
    }

    /// True iff every cell is undefined
    ///
    /// Stops at the first defined cell.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|value| is_undefined(*value))
    }

    /// Number of defined cells
    pub fn defined_count(&self) -> usize {
        self.cells.iter().filter(|value| !is_undefined(**value)).count()
    }

    /// Row-major bitmap with a set bit for each defined cell
    pub fn defined_mask(&self) -> BitVec {
        let mut mask = bitvec![0; PATTERN_CELLS];
        for (index, value) in self.cells.iter().enumerate() {
            if !is_undefined(*value) {
                mask.set(index, true);
            }
        }
        mask
    }

    /// Copy with every defined cell rounded to `precision`
    #[must_use]
    pub fn rounded(&self, precision: Precision) -> Self {
        Self {
            cells: self.cells.mapv(|value| {
                if is_undefined(value) {
                    UNDEFINED
                } else {
                    precision.round_f32(value)
                }
            }),
        }
    }
}
