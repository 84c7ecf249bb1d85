//! Pattern extraction, signatures, shuffling and distances

/// Pattern and signature distance metrics
pub mod distance;
/// Luminance grid to pattern reduction
pub mod extractor;
/// The pattern matrix and its undefined sentinel
pub mod pattern;
/// Bytes to fingerprint pipeline with explicit precision
pub mod pipeline;
/// Deterministic Z-order permutation of patterns
pub mod shuffle;
/// Signature generation from patterns
pub mod signature;

pub use pattern::Pattern;
pub use pipeline::{Fingerprint, Fingerprinter};
pub use signature::Signature;
