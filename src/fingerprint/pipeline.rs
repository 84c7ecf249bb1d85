//! End-to-end fingerprinting with an explicit precision policy
//!
//! [`Fingerprinter`] carries the precision used for every value it emits. The
//! free functions in this module use a fingerprinter built from the
//! process-wide default at call time.

use crate::fingerprint::distance::{measure_patterns, measure_signatures};
use crate::fingerprint::extractor::extract_pattern;
use crate::fingerprint::pattern::Pattern;
use crate::fingerprint::shuffle as permutation;
use crate::fingerprint::signature::{Signature, generate_signature};
use crate::io::decode::EncodedImage;
use crate::io::error::{FingerprintError, Result};
use crate::math::precision::Precision;
use crate::spatial::pixels::PixelSource;

/// Pattern and signature of one image
#[derive(Debug, Clone, PartialEq)]
pub struct Fingerprint {
    /// Full 64x64 pattern
    pub pattern: Pattern,
    /// Compressed signature of the pattern
    pub signature: Signature,
}

/// Extraction and comparison bound to one precision policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fingerprinter {
    precision: Precision,
}

impl Default for Fingerprinter {
    fn default() -> Self {
        Self::new(Precision::global())
    }
}

impl Fingerprinter {
    /// Create a fingerprinter emitting values at `precision`
    pub const fn new(precision: Precision) -> Self {
        Self { precision }
    }

    /// Precision applied to emitted values
    pub const fn precision(&self) -> Precision {
        self.precision
    }

    /// Extract the pattern of any pixel source
    ///
    /// The pattern may be empty; see [`Self::analyzable_pattern`].
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot produce pixels or the grid cannot
    /// be partitioned
    pub fn extract(&self, source: &impl PixelSource) -> Result<Pattern> {
        let grid = source.pixel_grid()?;
        extract_pattern(&grid, self.precision)
    }

    /// Extract a pattern, rejecting images without structure
    ///
    /// # Errors
    ///
    /// Returns [`FingerprintError::DegenerateContent`] for an empty pattern,
    /// or the extraction error
    pub fn analyzable_pattern(&self, source: &impl PixelSource) -> Result<Pattern> {
        let pattern = self.extract(source)?;
        if pattern.is_empty() {
            tracing::debug!("pattern is empty, image not supported");
            return Err(FingerprintError::DegenerateContent);
        }
        Ok(pattern)
    }

    /// Decode raw bytes and extract an analyzable pattern
    ///
    /// # Errors
    ///
    /// Returns a decode error for unreadable bytes and
    /// [`FingerprintError::DegenerateContent`] for solid colour images
    pub fn pattern_from_bytes(&self, bytes: &[u8]) -> Result<Pattern> {
        self.analyzable_pattern(&EncodedImage::new(bytes))
    }

    /// Signature of a non-empty pattern
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern is empty or malformed
    pub fn signature_of(&self, pattern: &Pattern) -> Result<Signature> {
        generate_signature(pattern, self.precision)
    }

    /// Pattern and signature of any pixel source
    ///
    /// # Errors
    ///
    /// Returns the first error of decoding, extraction or signature generation
    pub fn fingerprint(&self, source: &impl PixelSource) -> Result<Fingerprint> {
        let pattern = self.analyzable_pattern(source)?;
        let signature = self.signature_of(&pattern)?;
        Ok(Fingerprint { pattern, signature })
    }

    /// Pattern and signature of raw image bytes
    ///
    /// # Errors
    ///
    /// Returns the first error of decoding, extraction or signature generation
    pub fn fingerprint_bytes(&self, bytes: &[u8]) -> Result<Fingerprint> {
        self.fingerprint(&EncodedImage::new(bytes))
    }

    /// Cell-wise distance between two patterns
    pub fn pattern_distance(&self, a: &Pattern, b: &Pattern) -> f32 {
        measure_patterns(a, b, self.precision)
    }

    /// Distance between two signatures
    pub fn signature_distance(&self, a: &Signature, b: &Signature) -> f32 {
        measure_signatures(a, b, self.precision)
    }
}

/// Extract a pattern using the process-wide precision
///
/// # Errors
///
/// Returns an error if the source cannot produce pixels or the grid cannot be
/// partitioned
pub fn extract(source: &impl PixelSource) -> Result<Pattern> {
    Fingerprinter::default().extract(source)
}

/// True iff every cell of the pattern is undefined
pub fn is_empty(pattern: &Pattern) -> bool {
    pattern.is_empty()
}

/// Signature of a pattern using the process-wide precision
///
/// # Errors
///
/// Returns an error if the pattern is empty or malformed
pub fn signature_of(pattern: &Pattern) -> Result<Signature> {
    Fingerprinter::default().signature_of(pattern)
}

/// Z-order rearrangement of a pattern
pub fn shuffle(pattern: &Pattern) -> Pattern {
    permutation::shuffle(pattern)
}

/// Pattern distance using the process-wide precision
pub fn pattern_distance(a: &Pattern, b: &Pattern) -> f32 {
    Fingerprinter::default().pattern_distance(a, b)
}

/// Signature distance using the process-wide precision
pub fn signature_distance(a: &Signature, b: &Signature) -> f32 {
    Fingerprinter::default().signature_distance(a, b)
}
