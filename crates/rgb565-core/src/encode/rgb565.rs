//! Header and payload serialization for RGB565 blobs.

use std::io::{self, Write};

use thiserror::Error;

use crate::decode::ImageSource;
use crate::quantize::quantize;

/// Size of the `width | height` header in bytes.
pub const HEADER_LEN: usize = 4;

/// Errors that can occur while writing an RGB565 blob.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The pixel slice does not cover width * height.
    #[error("Pixel count mismatch: expected {expected} pixels (width * height), got {actual}")]
    PixelCountMismatch { expected: usize, actual: usize },

    /// Writing to the sink failed.
    #[error("I/O error writing output: {0}")]
    Io(#[from] io::Error),
}

/// The 4-byte blob header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb565Header {
    pub width: u16,
    pub height: u16,
}

impl Rgb565Header {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Number of pixels the payload must carry.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Little-endian `width | height`.
    pub fn to_bytes(self) -> [u8; HEADER_LEN] {
        let [w0, w1] = self.width.to_le_bytes();
        let [h0, h1] = self.height.to_le_bytes();
        [w0, w1, h0, h1]
    }

    /// Parse the header from the first four bytes of `bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        match bytes {
            [w0, w1, h0, h1, ..] => Some(Self {
                width: u16::from_le_bytes([*w0, *w1]),
                height: u16::from_le_bytes([*h0, *h1]),
            }),
            _ => None,
        }
    }
}

/// Total encoded size for a `width` x `height` image.
pub fn encoded_len(width: u16, height: u16) -> usize {
    HEADER_LEN + 2 * Rgb565Header::new(width, height).pixel_count()
}

/// Write the header followed by each pixel as a little-endian `u16`.
///
/// Returns the number of bytes written. The writer is not flushed.
///
/// # Errors
///
/// Returns `EncodeError::PixelCountMismatch` before writing anything if
/// `pixels` does not match the header, and `EncodeError::Io` if the writer
/// fails part way.
pub fn write_rgb565<W: Write>(
    writer: &mut W,
    header: Rgb565Header,
    pixels: &[u16],
) -> Result<usize, EncodeError> {
    let expected = header.pixel_count();
    if pixels.len() != expected {
        return Err(EncodeError::PixelCountMismatch {
            expected,
            actual: pixels.len(),
        });
    }

    writer.write_all(&header.to_bytes())?;
    for px in pixels {
        writer.write_all(&px.to_le_bytes())?;
    }

    Ok(HEADER_LEN + pixels.len() * 2)
}

/// Quantize and encode an image into an in-memory blob.
pub fn encode_rgb565<S: ImageSource + ?Sized>(source: &S) -> Vec<u8> {
    let (width, height) = (source.width(), source.height());
    let mut out = Vec::with_capacity(encoded_len(width, height));
    out.extend_from_slice(&Rgb565Header::new(width, height).to_bytes());
    for y in 0..height {
        for x in 0..width {
            let (r, g, b) = source.pixel_at(x, y);
            out.extend_from_slice(&quantize(r, g, b).to_le_bytes());
        }
    }
    out
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::decode::DecodedImage;
    use proptest::prelude::*;

    /// Strategy for generating image dimensions (keep small for speed).
    fn dimensions_strategy() -> impl Strategy<Value = (u16, u16)> {
        (0u16..=24, 0u16..=24)
    }

    /// Strategy for generating an image with random pixel data.
    fn image_strategy() -> impl Strategy<Value = DecodedImage> {
        dimensions_strategy().prop_flat_map(|(w, h)| {
            let size = w as usize * h as usize * 3;
            prop::collection::vec(any::<u8>(), size..=size)
                .prop_map(move |px| DecodedImage::new(w, h, px).unwrap())
        })
    }

    proptest! {
        /// Property: encoded length is always 4 + 2 * width * height.
        #[test]
        fn prop_encoded_length(img in image_strategy()) {
            let bytes = encode_rgb565(&img);
            prop_assert_eq!(bytes.len(), encoded_len(img.width(), img.height()));
            prop_assert_eq!(bytes.len(), 4 + 2 * img.pixel_count());
        }

        /// Property: the header decodes back to the image dimensions.
        #[test]
        fn prop_header_holds_dimensions(img in image_strategy()) {
            let bytes = encode_rgb565(&img);
            prop_assert_eq!(u16::from_le_bytes([bytes[0], bytes[1]]), img.width());
            prop_assert_eq!(u16::from_le_bytes([bytes[2], bytes[3]]), img.height());
        }

        /// Property: each payload word is the quantized pixel at its row-major index.
        #[test]
        fn prop_payload_is_row_major(img in image_strategy()) {
            let bytes = encode_rgb565(&img);
            let payload = &bytes[HEADER_LEN..];
            for y in 0..img.height() {
                for x in 0..img.width() {
                    let i = (y as usize * img.width() as usize + x as usize) * 2;
                    let (r, g, b) = img.pixel_at(x, y);
                    prop_assert_eq!(
                        u16::from_le_bytes([payload[i], payload[i + 1]]),
                        quantize(r, g, b)
                    );
                }
            }
        }
    }
}
