//! Input/output: decoding, encodings, errors, configuration and the CLI

/// Command-line interface
pub mod cli;
/// Constants and defaults
pub mod configuration;
/// Format sniffing and image decoding
pub mod decode;
/// Binary and text encodings
pub mod encoding;
/// Error types
pub mod error;
/// Batch progress display
pub mod progress;
