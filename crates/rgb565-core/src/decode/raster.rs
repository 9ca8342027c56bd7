//! Raster decoding through the `image` crate.

use std::io::{self, Cursor};
use std::path::Path;

use image::{DynamicImage, ImageError, ImageReader};
use log::debug;

use super::{DecodeError, DecodedImage};

/// Decode the image file at `path` into RGB888.
///
/// The format is guessed from the file contents, not the extension.
///
/// # Errors
///
/// Returns `DecodeError::NotFound` if the file does not exist,
/// `DecodeError::Io` if it cannot be read, `DecodeError::InvalidFormat` if
/// it is not a decodable raster image, and `DecodeError::DimensionsTooLarge`
/// if either side exceeds 65535 pixels.
pub fn decode_file(path: impl AsRef<Path>) -> Result<DecodedImage, DecodeError> {
    let path = path.as_ref();
    let reader = ImageReader::open(path)
        .map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => DecodeError::NotFound(path.to_path_buf()),
            _ => DecodeError::Io(e.to_string()),
        })?
        .with_guessed_format()
        .map_err(|e| DecodeError::Io(e.to_string()))?;

    debug!("decoding {} as {:?}", path.display(), reader.format());
    let img = reader.decode().map_err(map_image_error)?;
    into_rgb(img)
}

/// Decode an in-memory image into RGB888.
///
/// # Errors
///
/// Same as [`decode_file`], minus `NotFound`.
pub fn decode_bytes(bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::Io(e.to_string()))?;

    let img = reader.decode().map_err(map_image_error)?;
    into_rgb(img)
}

fn map_image_error(err: ImageError) -> DecodeError {
    match err {
        ImageError::IoError(e) => DecodeError::Io(e.to_string()),
        other => DecodeError::InvalidFormat(other.to_string()),
    }
}

/// Drop alpha (and widen grayscale) to 8-bit RGB.
fn into_rgb(img: DynamicImage) -> Result<DecodedImage, DecodeError> {
    debug!(
        "decoded {}x{} {:?}",
        img.width(),
        img.height(),
        img.color()
    );
    DecodedImage::from_rgb_image(img.into_rgb8())
}
