//! Pixel grids and the spatial filters applied before pattern extraction
//!
//! This module contains:
//! - Luminance grids and the pixel source seam
//! - Area-averaging resampling onto the pattern grid
//! - Gradient magnitude filters

/// Sobel gradient magnitude
pub mod gradient;
/// Luminance grids and pixel sources
pub mod pixels;
/// Area-averaging resampling
pub mod resample;

pub use pixels::{PixelGrid, PixelSource};
