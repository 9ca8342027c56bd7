//! Image decoding for the RGB565 converter.
//!
//! This module provides:
//! - The `ImageSource` capability the converter reads pixels through
//! - `DecodedImage`, an owned RGB888 bitmap implementing it
//! - Decoding of PNG (and other enabled raster formats) from a path or bytes
//!
//! # Alpha
//!
//! Any alpha channel is discarded without compositing; the color channels
//! are kept as stored.
//!
//! # Examples
//!
//! ```ignore
//! use rgb565_core::decode::{decode_file, ImageSource};
//!
//! let image = decode_file("logo.png").unwrap();
//! println!("Decoded {}x{} image", image.width(), image.height());
//! ```

mod raster;
mod types;

pub use raster::{decode_bytes, decode_file};
pub use types::{DecodeError, DecodedImage, ImageSource};
