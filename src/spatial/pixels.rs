//! Decoded luminance grids and the capability to produce them

use image::DynamicImage;
use ndarray::Array2;

use crate::io::error::{FingerprintError, Result};

/// Width x height grid of luminance samples in `[0, 1]`
///
/// Stored row-major as (`height`, `width`).
#[derive(Debug, Clone, PartialEq)]
pub struct PixelGrid {
    luminance: Array2<f64>,
}

/// Anything able to supply a decoded luminance grid
///
/// Decoding is an external concern; this trait is the seam where a codec
/// plugs into the extractor.
pub trait PixelSource {
    /// Produce the luminance grid for this source
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be decoded into pixels
    fn pixel_grid(&self) -> Result<PixelGrid>;
}

/// Perceived brightness of an 8-bit RGB triple
///
/// Root mean square of the channels scaled to `[0, 1]`.
pub fn rgb_luminance(rgb: [u8; 3]) -> f64 {
    let [r, g, b] = rgb.map(|channel| f64::from(channel) / 255.0);
    ((r * r + g * g + b * b) / 3.0).sqrt()
}

impl PixelGrid {
    /// Wrap a luminance grid shaped (`height`, `width`)
    ///
    /// # Errors
    ///
    /// Returns an error if any sample is non-finite or outside `[0, 1]`
    pub fn from_luminance(luminance: Array2<f64>) -> Result<Self> {
        if let Some(bad) = luminance
            .iter()
            .find(|value| !value.is_finite() || **value < 0.0 || **value > 1.0)
        {
            let (height, width) = luminance.dim();
            return Err(FingerprintError::UnsupportedInput {
                width,
                height,
                reason: format!("luminance sample {bad} outside [0, 1]"),
            });
        }
        Ok(Self { luminance })
    }

    /// Build a grid from tightly packed 8-bit RGB samples
    ///
    /// # Errors
    ///
    /// Returns an error if `rgb` does not hold exactly `width * height * 3` bytes
    pub fn from_rgb8(width: usize, height: usize, rgb: &[u8]) -> Result<Self> {
        let expected = width.checked_mul(height).and_then(|n| n.checked_mul(3));
        if expected != Some(rgb.len()) {
            return Err(FingerprintError::UnsupportedInput {
                width,
                height,
                reason: format!("expected {width}x{height} RGB samples, got {} bytes", rgb.len()),
            });
        }

        let samples = rgb
            .chunks_exact(3)
            .map(|px| match *px {
                [r, g, b] => rgb_luminance([r, g, b]),
                _ => 0.0,
            })
            .collect();
        let luminance = Array2::from_shape_vec((height, width), samples).map_err(|e| {
            FingerprintError::UnsupportedInput {
                width,
                height,
                reason: e.to_string(),
            }
        })?;
        Ok(Self { luminance })
    }

    /// Convert a decoded image, discarding alpha
    pub fn from_image(image: &DynamicImage) -> Self {
        let rgb = image.to_rgb8();
        let (width, height) = (rgb.width() as usize, rgb.height() as usize);
        let mut luminance = Array2::zeros((height, width));
        for (x, y, pixel) in rgb.enumerate_pixels() {
            if let Some(sample) = luminance.get_mut((y as usize, x as usize)) {
                *sample = rgb_luminance(pixel.0);
            }
        }
        Self { luminance }
    }

    /// Width in samples
    pub fn width(&self) -> usize {
        self.luminance.ncols()
    }

    /// Height in samples
    pub fn height(&self) -> usize {
        self.luminance.nrows()
    }

    /// Luminance samples shaped (`height`, `width`)
    pub const fn luminance(&self) -> &Array2<f64> {
        &self.luminance
    }
}

impl PixelSource for PixelGrid {
    fn pixel_grid(&self) -> Result<PixelGrid> {
        Ok(self.clone())
    }
}

impl PixelSource for DynamicImage {
    fn pixel_grid(&self) -> Result<PixelGrid> {
        Ok(PixelGrid::from_image(self))
    }
}
