//! Perceptual image fingerprints for similarity search and near-duplicate detection
//!
//! Each image yields a 64x64 pattern of normalized local structure and a
//! 16-value signature derived from it. Signatures are cheap to compare and
//! suit candidate filtering; patterns give the precise ranking.

#![forbid(unsafe_code)]

/// Pattern extraction, signatures, shuffling and distances
pub mod fingerprint;
/// Decoding, encodings, errors, configuration and the CLI
pub mod io;
/// Precision policy and wavelet utilities
pub mod math;
/// Pixel grids, resampling and gradient filters
pub mod spatial;

pub use fingerprint::pipeline::{
    extract, is_empty, pattern_distance, shuffle, signature_distance, signature_of,
};
pub use fingerprint::{Fingerprint, Fingerprinter, Pattern, Signature};
pub use io::decode::{EncodedImage, ImageKind, decode, sniff_format};
pub use io::error::{FingerprintError, Result};
pub use math::precision::Precision;
pub use spatial::{PixelGrid, PixelSource};
