//! Error types for fingerprint extraction, comparison and encoding

use std::fmt;
use std::path::PathBuf;

/// Main error type for all fingerprint operations
#[derive(Debug)]
pub enum FingerprintError {
    /// Raw bytes are not a decodable image of a supported format
    Decode {
        /// Detected or expected format name
        format: &'static str,
        /// Description of why decoding failed
        reason: String,
    },

    /// Decoded pixels cannot be partitioned into a pattern
    UnsupportedInput {
        /// Source width in pixels
        width: usize,
        /// Source height in pixels
        height: usize,
        /// Explanation of what makes the geometry unusable
        reason: String,
    },

    /// The image decoded fine but carries no usable structure
    ///
    /// Typical for solid colour images. Indexing pipelines should skip the
    /// image or store it as "no pattern" rather than as a zero fingerprint.
    DegenerateContent,

    /// A pattern or signature violates shape or sentinel invariants
    InvalidPattern {
        /// Description of the violated invariant
        reason: String,
    },

    /// Configuration parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Text or binary encoding of a pattern or signature is malformed
    Malformed {
        /// Which representation was being parsed
        what: &'static str,
        /// Description of the problem
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for FingerprintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decode { format, reason } => {
                write!(f, "Failed to decode {format} image: {reason}")
            }
            Self::UnsupportedInput {
                width,
                height,
                reason,
            } => {
                write!(f, "Unsupported input ({width}x{height}): {reason}")
            }
            Self::DegenerateContent => {
                write!(f, "Image has no extractable structure (solid colour?)")
            }
            Self::InvalidPattern { reason } => {
                write!(f, "Invalid pattern: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Malformed { what, reason } => {
                write!(f, "Malformed {what}: {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for FingerprintError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl FingerprintError {
    /// Whether the error means "this image has no fingerprint" rather than a failure
    pub const fn is_degenerate(&self) -> bool {
        matches!(self, Self::DegenerateContent)
    }
}

/// Convenience type alias for fingerprint results
pub type Result<T> = std::result::Result<T, FingerprintError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> FingerprintError {
    FingerprintError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid pattern error
pub fn invalid_pattern(reason: &impl ToString) -> FingerprintError {
    FingerprintError::InvalidPattern {
        reason: reason.to_string(),
    }
}

/// Create a malformed encoding error
pub fn malformed(what: &'static str, reason: &impl ToString) -> FingerprintError {
    FingerprintError::Malformed {
        what,
        reason: reason.to_string(),
    }
}

/// Create a decode error for the named format
pub fn decode_error(format: &'static str, reason: &impl ToString) -> FingerprintError {
    FingerprintError::Decode {
        format,
        reason: reason.to_string(),
    }
}
