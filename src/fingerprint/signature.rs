//! Sixteen-value signatures summarizing a pattern's wavelet energy
//!
//! The pattern is decomposed with a 2D Haar transform. Each of the detail
//! subbands at sizes 16, 8, 4, 2 and 1 contributes its energy, weighted by a
//! factor that doubles per coarser level to offset the averaging. The last
//! component is the approximation coefficient. The finest 32x32 subbands are
//! dropped, which keeps the signature insensitive to pixel-level noise.

use ndarray::Array2;

use crate::fingerprint::pattern::{Pattern, is_undefined};
use crate::io::configuration::{PATTERN_SIZE, SIGNATURE_SIZE};
use crate::io::error::{Result, invalid_pattern};
use crate::math::precision::Precision;
use crate::math::wavelet::{block_energy, haar_decompose};

/// Compressed fingerprint of a pattern for cheap candidate filtering
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Signature {
    values: [f32; SIGNATURE_SIZE],
}

impl Signature {
    /// Wrap 16 components
    ///
    /// # Errors
    ///
    /// Returns an error if any component is not finite
    pub fn from_values(values: [f32; SIGNATURE_SIZE]) -> Result<Self> {
        if let Some((index, value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(invalid_pattern(&format!(
                "signature component {index} is {value}"
            )));
        }
        Ok(Self { values })
    }

    /// Components in order
    pub const fn values(&self) -> &[f32; SIGNATURE_SIZE] {
        &self.values
    }

    /// Component at `index`
    pub fn get(&self, index: usize) -> Option<f32> {
        self.values.get(index).copied()
    }
}

/// Generate the signature of a non-empty pattern
///
/// Undefined cells contribute nothing to the transform.
///
/// # Errors
///
/// Returns an error if the pattern is empty or holds a value outside its
/// legal domain
pub fn generate_signature(pattern: &Pattern, precision: Precision) -> Result<Signature> {
    if pattern.is_empty() {
        return Err(invalid_pattern(&"empty pattern has no signature"));
    }
    if pattern.iter().any(f32::is_infinite) {
        return Err(invalid_pattern(&"pattern holds an infinite value"));
    }

    let samples = Array2::from_shape_fn((PATTERN_SIZE, PATTERN_SIZE), |(row, col)| {
        pattern
            .values()
            .get((row, col))
            .copied()
            .filter(|value| !is_undefined(*value))
            .map_or(0.0, f64::from)
    });
    let coefficients = haar_decompose(&samples)
        .ok_or_else(|| invalid_pattern(&"pattern side is not a power of two"))?;

    let mut values = [0.0_f32; SIGNATURE_SIZE];
    let mut slot = 0;
    let mut size = PATTERN_SIZE / 2;
    let mut weight = 1.0_f64;

    while size > 1 {
        size /= 2;
        for (row, col) in [(size, 0), (0, size), (size, size)] {
            if let Some(component) = values.get_mut(slot) {
                *component = precision.round(weight * block_energy(&coefficients, row, col, size)) as f32;
            }
            slot += 1;
        }
        weight *= 2.0;
    }

    let approximation = coefficients.get((0, 0)).copied().unwrap_or(0.0);
    if let Some(component) = values.last_mut() {
        *component = precision.round(approximation) as f32;
    }

    let signature = Signature::from_values(values)?;
    tracing::trace!(?signature, "signature generated");
    Ok(signature)
}
