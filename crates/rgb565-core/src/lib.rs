//! RGB565 Core - PNG to raw RGB565 conversion
//!
//! This crate turns a raster image into the flat RGB565 blob that firmware
//! embeds with `include_bytes!`, and reads such blobs back.
//!
//! # Pipeline
//!
//! decode (RGB888) -> quantize (RGB565) -> encode (`u16 width | u16 height | u16[] pixels`)
//!
//! # Module Structure
//!
//! - `quantize` - RGB888 to RGB565 bit packing
//! - `decode` - Image decoding behind the `ImageSource` capability
//! - `encode` - Little-endian header and payload serialization
//! - `convert` - The file-to-file converter tying the stages together
//! - `embedded` - Zero-copy reader over an encoded blob
//! - `snippet` - Rust source snippet for embedding the output

pub mod convert;
pub mod decode;
pub mod embedded;
pub mod encode;
pub mod quantize;
pub mod snippet;

pub use convert::{convert, convert_source, ConvertError, ConvertReport};
pub use decode::{decode_bytes, decode_file, DecodeError, DecodedImage, ImageSource};
pub use embedded::{EmbeddedError, EmbeddedImage};
pub use encode::{encode_rgb565, write_rgb565, EncodeError, Rgb565Header, HEADER_LEN};
pub use quantize::{quantize, quantize_rgb888, unpack};
pub use snippet::{render_snippet, SnippetOptions};
