//! File-to-file conversion: decode, quantize, write.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::{debug, info, warn};
use serde::Serialize;
use thiserror::Error;

use crate::decode::{decode_file, DecodeError, ImageSource};
use crate::encode::{write_rgb565, EncodeError, Rgb565Header, HEADER_LEN};
use crate::quantize::quantize;

/// Errors from a full conversion.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The input could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The output could not be created or written.
    #[error(transparent)]
    Encode(#[from] EncodeError),
}

/// Summary of a successful conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConvertReport {
    pub width: u16,
    pub height: u16,
    /// Number of pixels written.
    pub pixel_count: usize,
    /// Payload bytes written, excluding the header.
    pub byte_count: usize,
}

impl ConvertReport {
    /// Total size of the output file.
    pub fn file_len(&self) -> usize {
        HEADER_LEN + self.byte_count
    }
}

/// Convert the image at `input` into an RGB565 blob at `output`.
///
/// The input is fully decoded before `output` is created, so a decode
/// failure never touches an existing output file.
///
/// # Errors
///
/// Returns `ConvertError::Decode` if the input is missing or not a valid
/// image, and `ConvertError::Encode` if the output cannot be written.
pub fn convert(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
) -> Result<ConvertReport, ConvertError> {
    let input = input.as_ref();
    let image = decode_file(input)?;
    debug!(
        "decoded {}: {}x{}",
        input.display(),
        image.width(),
        image.height()
    );
    convert_source(&image, output)
}

/// Quantize `source` and write it as an RGB565 blob at `output`.
///
/// A write failure leaves the partially written file in place; its length
/// will not match its header.
pub fn convert_source<S: ImageSource + ?Sized>(
    source: &S,
    output: impl AsRef<Path>,
) -> Result<ConvertReport, ConvertError> {
    let output = output.as_ref();
    let header = Rgb565Header::new(source.width(), source.height());
    let pixels = quantize_source(source);

    let file = File::create(output).map_err(EncodeError::from)?;
    let mut writer = BufWriter::new(file);
    let written = write_rgb565(&mut writer, header, &pixels)
        .and_then(|n| writer.flush().map(|()| n).map_err(EncodeError::from))
        .inspect_err(|e| warn!("write to {} failed: {}", output.display(), e))?;

    let report = ConvertReport {
        width: header.width,
        height: header.height,
        pixel_count: pixels.len(),
        byte_count: written - HEADER_LEN,
    };
    info!(
        "wrote {} pixels ({} bytes) to {}",
        report.pixel_count,
        report.byte_count,
        output.display()
    );
    Ok(report)
}

/// Quantize every pixel in row-major order.
fn quantize_source<S: ImageSource + ?Sized>(source: &S) -> Vec<u16> {
    let mut pixels = Vec::with_capacity(source.pixel_count());
    for y in 0..source.height() {
        for x in 0..source.width() {
            let (r, g, b) = source.pixel_at(x, y);
            pixels.push(quantize(r, g, b));
        }
    }
    pixels
}
