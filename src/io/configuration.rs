//! Fingerprint geometry constants and runtime configuration defaults

/// Side length of the square pattern matrix
pub const PATTERN_SIZE: usize = 64;

/// Number of cells in a pattern
pub const PATTERN_CELLS: usize = PATTERN_SIZE * PATTERN_SIZE;

/// Number of components in a signature
pub const SIGNATURE_SIZE: usize = 16;

/// Bit pattern of the undefined-cell sentinel (canonical quiet NaN)
pub const UNDEFINED_BITS: u32 = 0x7FC0_0000;

// A luminance range at or below this is treated as a solid colour image
/// Minimum normalized luminance range for an image to carry structure
pub const FLAT_RANGE_EPSILON: f64 = 1e-6;

// Gradient magnitudes are in [0, 1] after scaling by the Sobel maximum
/// Gradient magnitude at or below which a cell is undefined
pub const STRUCTURE_EPSILON: f64 = 1e-4;

// Safety limit to bound per-image work on untrusted inputs
/// Maximum number of source pixels accepted by the extractor
pub const MAX_SOURCE_PIXELS: usize = 1 << 28;

/// Default number of decimal digits applied to emitted floats
pub const DEFAULT_PRECISION: u8 = 6;

/// Largest supported precision (beyond this `f32` carries no more digits)
pub const MAX_PRECISION: u8 = 9;

// CLI settings
/// File extensions picked up when fingerprinting a directory
pub const SUPPORTED_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "gif"];
/// Threshold above which a directory run shows a progress bar
pub const PROGRESS_MIN_FILES: usize = 2;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
