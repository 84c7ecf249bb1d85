//! Fixed Z-order permutation of pattern cells
//!
//! The cell at `(row, col)` moves to the row-major slot whose linear index
//! interleaves the bits of `row` and `col` (column bits in even positions).
//! Every aligned 2^k x 2^k block ends up contiguous, which gives coarse-to-fine
//! ordered layouts for comparison code. The mapping is a bijection and is the
//! same on every call.

use std::sync::LazyLock;

use ndarray::Array2;

use crate::fingerprint::pattern::{Pattern, UNDEFINED};
use crate::io::configuration::{PATTERN_CELLS, PATTERN_SIZE};

// Destination slot of each source cell, indexed row-major
static MORTON_SLOTS: LazyLock<Vec<usize>> = LazyLock::new(|| {
    (0..PATTERN_CELLS)
        .map(|index| morton_index(index / PATTERN_SIZE, index % PATTERN_SIZE))
        .collect()
});

/// Interleave the bits of `row` and `col`
///
/// Only the low half of each coordinate's bits is used.
pub const fn morton_index(row: usize, col: usize) -> usize {
    let half = (usize::BITS / 2) as usize;
    let mut index = 0;
    let mut bit = 0;
    while bit < half && ((row >> bit) > 0 || (col >> bit) > 0) {
        index |= ((col >> bit) & 1) << (2 * bit);
        index |= ((row >> bit) & 1) << (2 * bit + 1);
        bit += 1;
    }
    index
}

/// Rearrange a pattern into Z-order
///
/// Returns a new pattern; the input is left untouched.
pub fn shuffle(pattern: &Pattern) -> Pattern {
    permute(pattern, false)
}

/// Undo [`shuffle`]
pub fn unshuffle(pattern: &Pattern) -> Pattern {
    permute(pattern, true)
}

fn permute(pattern: &Pattern, inverse: bool) -> Pattern {
    let source = pattern.values();
    let mut cells = Array2::from_elem((PATTERN_SIZE, PATTERN_SIZE), UNDEFINED);

    for (index, &slot) in MORTON_SLOTS.iter().enumerate() {
        let natural = (index / PATTERN_SIZE, index % PATTERN_SIZE);
        let ordered = (slot / PATTERN_SIZE, slot % PATTERN_SIZE);
        let (from, to) = if inverse {
            (ordered, natural)
        } else {
            (natural, ordered)
        };

        if let (Some(&value), Some(target)) = (source.get(from), cells.get_mut(to)) {
            *target = value;
        }
    }

    Pattern::from_canonical(cells)
}
