//! RGB565 blob encoding.
//!
//! Output layout, all little-endian:
//!
//! ```text
//! u16 width | u16 height | u16[width * height] pixels (row-major)
//! ```
//!
//! The encoded length is always `4 + 2 * width * height`.
//!
//! # Examples
//!
//! ```ignore
//! use rgb565_core::encode::{write_rgb565, Rgb565Header};
//!
//! let mut out = Vec::new();
//! write_rgb565(&mut out, Rgb565Header::new(2, 1), &[0xF800, 0x07E0]).unwrap();
//! assert_eq!(out, [0x02, 0x00, 0x01, 0x00, 0x00, 0xF8, 0xE0, 0x07]);
//! ```

mod rgb565;

pub use rgb565::{encode_rgb565, encoded_len, write_rgb565, EncodeError, Rgb565Header, HEADER_LEN};
