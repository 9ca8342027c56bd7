//! Zero-copy reader for RGB565 blobs.
//!
//! This is the consumer side of the format: firmware embeds the output
//! with `include_bytes!` and reads pixels out of it without copying.

use thiserror::Error;

use crate::encode::{encoded_len, Rgb565Header, HEADER_LEN};

/// Errors from parsing an RGB565 blob.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmbeddedError {
    /// Fewer bytes than the 4-byte header.
    #[error("Blob too short for header: {0} bytes")]
    TooShort(usize),

    /// Payload size does not match the header dimensions.
    #[error("Blob length mismatch: header implies {expected} bytes, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

/// A borrowed, validated RGB565 image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmbeddedImage<'a> {
    header: Rgb565Header,
    payload: &'a [u8],
}

impl<'a> EmbeddedImage<'a> {
    /// Parse and validate a blob.
    ///
    /// The total length must be exactly `4 + 2 * width * height`, which
    /// rejects truncated output from an interrupted write.
    pub fn new(data: &'a [u8]) -> Result<Self, EmbeddedError> {
        let header = Rgb565Header::from_bytes(data).ok_or(EmbeddedError::TooShort(data.len()))?;
        let expected = encoded_len(header.width, header.height);
        if data.len() != expected {
            return Err(EmbeddedError::LengthMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            header,
            payload: &data[HEADER_LEN..],
        })
    }

    pub fn width(&self) -> u16 {
        self.header.width
    }

    pub fn height(&self) -> u16 {
        self.header.height
    }

    /// The RGB565 value at (`x`, `y`), or `None` if out of bounds.
    pub fn pixel(&self, x: u16, y: u16) -> Option<u16> {
        if x >= self.header.width || y >= self.header.height {
            return None;
        }
        let i = (y as usize * self.header.width as usize + x as usize) * 2;
        Some(u16::from_le_bytes([self.payload[i], self.payload[i + 1]]))
    }

    /// All pixels in row-major order.
    pub fn pixels(&self) -> impl ExactSizeIterator<Item = u16> + 'a {
        self.payload
            .chunks_exact(2)
            .map(|p| u16::from_le_bytes([p[0], p[1]]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_PIXELS: &[u8] = &[0x02, 0x00, 0x01, 0x00, 0x00, 0xF8, 0xE0, 0x07];

    #[test]
    fn test_parse_two_pixels() {
        let img = EmbeddedImage::new(TWO_PIXELS).unwrap();
        assert_eq!(img.width(), 2);
        assert_eq!(img.height(), 1);
        assert_eq!(img.pixel(0, 0), Some(0xF800));
        assert_eq!(img.pixel(1, 0), Some(0x07E0));
        assert_eq!(img.pixels().collect::<Vec<_>>(), vec![0xF800, 0x07E0]);
    }

    #[test]
    fn test_pixel_out_of_bounds() {
        let img = EmbeddedImage::new(TWO_PIXELS).unwrap();
        assert_eq!(img.pixel(2, 0), None);
        assert_eq!(img.pixel(0, 1), None);
    }

    #[test]
    fn test_too_short() {
        assert_eq!(
            EmbeddedImage::new(&[0x01, 0x00]),
            Err(EmbeddedError::TooShort(2))
        );
    }

    #[test]
    fn test_truncated_payload() {
        assert_eq!(
            EmbeddedImage::new(&TWO_PIXELS[..7]),
            Err(EmbeddedError::LengthMismatch {
                expected: 8,
                actual: 7
            })
        );
    }

    #[test]
    fn test_trailing_bytes_rejected() {
        let mut data = TWO_PIXELS.to_vec();
        data.push(0);
        assert!(EmbeddedImage::new(&data).is_err());
    }

    #[test]
    fn test_empty_image() {
        let img = EmbeddedImage::new(&[0, 0, 5, 0]).unwrap();
        assert_eq!(img.width(), 0);
        assert_eq!(img.height(), 5);
        assert_eq!(img.pixels().len(), 0);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
