//! Format sniffing and decoding of raw image bytes
//!
//! Pixel decoding is delegated to the `image` crate. This module only picks
//! the decoder from the leading magic bytes and converts the result into a
//! luminance grid.

use image::ImageFormat;

use crate::io::error::{Result, decode_error};
use crate::spatial::pixels::{PixelGrid, PixelSource};

const JPEG_MAGIC: &[u8] = &[0xFF, 0xD8, 0xFF];
const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
const GIF87_MAGIC: &[u8] = b"GIF87a";
const GIF89_MAGIC: &[u8] = b"GIF89a";
const RIFF_MAGIC: &[u8] = b"RIFF";
const WEBP_MAGIC: &[u8] = b"WEBP";

/// Container formats recognised from magic bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageKind {
    /// JPEG / JFIF
    Jpeg,
    /// Portable Network Graphics
    Png,
    /// GIF87a or GIF89a
    Gif,
    /// WebP; recognised but not decoded
    Webp,
    /// Anything else
    Unknown,
}

impl ImageKind {
    /// Short lowercase format name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Jpeg => "jpeg",
            Self::Png => "png",
            Self::Gif => "gif",
            Self::Webp => "webp",
            Self::Unknown => "image",
        }
    }

    /// MIME type of the format
    pub const fn mime(self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
            Self::Gif => "image/gif",
            Self::Webp => "image/webp",
            Self::Unknown => "application/octet-stream",
        }
    }

    /// Decoder to use, `None` for formats this crate does not decode
    pub const fn decoder(self) -> Option<ImageFormat> {
        match self {
            Self::Jpeg => Some(ImageFormat::Jpeg),
            Self::Png => Some(ImageFormat::Png),
            Self::Gif => Some(ImageFormat::Gif),
            Self::Webp | Self::Unknown => None,
        }
    }
}

/// Identify the container format from the leading bytes
pub fn sniff_format(bytes: &[u8]) -> ImageKind {
    if bytes.starts_with(JPEG_MAGIC) {
        ImageKind::Jpeg
    } else if bytes.starts_with(PNG_MAGIC) {
        ImageKind::Png
    } else if bytes.starts_with(GIF87_MAGIC) || bytes.starts_with(GIF89_MAGIC) {
        ImageKind::Gif
    } else if bytes.starts_with(RIFF_MAGIC) && bytes.get(8..12) == Some(WEBP_MAGIC) {
        ImageKind::Webp
    } else {
        ImageKind::Unknown
    }
}

/// Decode raw bytes into a luminance grid
///
/// # Errors
///
/// Returns a decode error if the input is empty, the format is unrecognised
/// or unsupported, or the codec rejects the data
pub fn decode(bytes: &[u8]) -> Result<PixelGrid> {
    if bytes.is_empty() {
        return Err(decode_error("image", &"empty input"));
    }

    let kind = sniff_format(bytes);
    let Some(format) = kind.decoder() else {
        let reason = match kind {
            ImageKind::Webp => "'image/webp' not supported",
            _ => "not a valid image file",
        };
        return Err(decode_error(kind.name(), &reason));
    };

    let image = image::load_from_memory_with_format(bytes, format).map_err(|e| {
        tracing::debug!(format = kind.name(), error = %e, "decoder rejected input");
        decode_error(kind.name(), &format!("not a valid {} file: {e}", kind.name()))
    })?;

    tracing::trace!(
        format = kind.name(),
        width = image.width(),
        height = image.height(),
        "image decoded"
    );
    Ok(PixelGrid::from_image(&image))
}

/// Raw encoded image bytes usable wherever a [`PixelSource`] is expected
#[derive(Debug, Clone, Copy)]
pub struct EncodedImage<'a> {
    bytes: &'a [u8],
}

impl<'a> EncodedImage<'a> {
    /// Borrow encoded bytes
    pub const fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    /// Format detected from the magic bytes
    pub fn kind(&self) -> ImageKind {
        sniff_format(self.bytes)
    }
}

impl PixelSource for EncodedImage<'_> {
    fn pixel_grid(&self) -> Result<PixelGrid> {
        decode(self.bytes)
    }
}
