//! Core types for image decoding.

use std::path::PathBuf;

use thiserror::Error;

/// Error types for image decoding operations.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The input file does not exist.
    #[error("Input file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The input file exists but could not be read.
    #[error("I/O error reading input: {0}")]
    Io(String),

    /// The bytes are not a recognized or valid raster image.
    #[error("Invalid or unsupported image: {0}")]
    InvalidFormat(String),

    /// The image does not fit the 16-bit width/height header.
    #[error("Image dimensions {width}x{height} exceed the 65535 pixel limit")]
    DimensionsTooLarge { width: u32, height: u32 },
}

/// Read access to a decoded RGB bitmap.
///
/// The converter only needs dimensions and per-coordinate color, so any
/// decoder (or a synthetic test pattern) can stand behind this trait.
pub trait ImageSource {
    /// Width in pixels.
    fn width(&self) -> u16;

    /// Height in pixels.
    fn height(&self) -> u16;

    /// The (r, g, b) color at column `x`, row `y`.
    ///
    /// Callers stay within `0..width` and `0..height`.
    fn pixel_at(&self, x: u16, y: u16) -> (u8, u8, u8);

    /// Total number of pixels.
    fn pixel_count(&self) -> usize {
        self.width() as usize * self.height() as usize
    }
}

/// A decoded image with RGB pixel data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    width: u16,
    height: u16,
    /// RGB pixel data in row-major order (3 bytes per pixel).
    pixels: Vec<u8>,
}

impl DecodedImage {
    /// Create a new DecodedImage with the given dimensions and pixel data.
    ///
    /// Returns `None` if `pixels` is not exactly `width * height * 3` bytes.
    pub fn new(width: u16, height: u16, pixels: Vec<u8>) -> Option<Self> {
        if pixels.len() != width as usize * height as usize * 3 {
            return None;
        }
        Some(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create a DecodedImage from an image::RgbImage.
    pub fn from_rgb_image(img: image::RgbImage) -> Result<Self, DecodeError> {
        let (width, height) = img.dimensions();
        let (Ok(w), Ok(h)) = (u16::try_from(width), u16::try_from(height)) else {
            return Err(DecodeError::DimensionsTooLarge { width, height });
        };
        Ok(Self {
            width: w,
            height: h,
            pixels: img.into_raw(),
        })
    }

    /// Raw RGB888 bytes, row-major.
    pub fn as_rgb888(&self) -> &[u8] {
        &self.pixels
    }

    /// Check if this is an empty image.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl ImageSource for DecodedImage {
    fn width(&self) -> u16 {
        self.width
    }

    fn height(&self) -> u16 {
        self.height
    }

    fn pixel_at(&self, x: u16, y: u16) -> (u8, u8, u8) {
        let idx = (y as usize * self.width as usize + x as usize) * 3;
        (self.pixels[idx], self.pixels[idx + 1], self.pixels[idx + 2])
    }
}
