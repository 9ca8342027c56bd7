//! RGB888 to RGB565 quantization.
//!
//! Each channel is scaled with truncating integer division
//! (`c * max / 255`), so full intensity maps to the full field value and
//! pure black maps to zero. No dithering or rounding is applied.

/// Maximum value of the 5-bit red and blue fields.
pub const MAX_5: u16 = 31;

/// Maximum value of the 6-bit green field.
pub const MAX_6: u16 = 63;

/// Pack an 8-bit-per-channel color into a 16-bit RGB565 value.
///
/// Layout: red in bits 15-11, green in bits 10-5, blue in bits 4-0.
#[inline]
pub fn quantize(r: u8, g: u8, b: u8) -> u16 {
    let r5 = r as u16 * MAX_5 / 255;
    let g6 = g as u16 * MAX_6 / 255;
    let b5 = b as u16 * MAX_5 / 255;

    (r5 << 11) | (g6 << 5) | b5
}

/// Quantize a packed RGB888 buffer (3 bytes per pixel, row-major).
///
/// Trailing bytes that do not form a whole pixel are ignored.
pub fn quantize_rgb888(pixels: &[u8]) -> Vec<u16> {
    pixels
        .chunks_exact(3)
        .map(|p| quantize(p[0], p[1], p[2]))
        .collect()
}

/// Split an RGB565 value into its raw (r5, g6, b5) fields.
#[inline]
pub fn unpack(value: u16) -> (u8, u8, u8) {
    (
        ((value >> 11) & MAX_5) as u8,
        ((value >> 5) & MAX_6) as u8,
        (value & MAX_5) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantize_black_and_white() {
        assert_eq!(quantize(0, 0, 0), 0x0000);
        assert_eq!(quantize(255, 255, 255), 0xFFFF);
    }

    #[test]
    fn test_quantize_primaries() {
        assert_eq!(quantize(255, 0, 0), 0xF800);
        assert_eq!(quantize(0, 255, 0), 0x07E0);
        assert_eq!(quantize(0, 0, 255), 0x001F);
    }

    #[test]
    fn test_quantize_truncates() {
        // 128 * 31 / 255 = 15.56 -> 15, 128 * 63 / 255 = 31.62 -> 31
        assert_eq!(quantize(128, 128, 128), (15 << 11) | (31 << 5) | 15);
        // 8 * 31 / 255 = 0.97 -> 0
        assert_eq!(quantize(8, 0, 8), 0);
        // 9 * 31 / 255 = 1.09 -> 1
        assert_eq!(quantize(9, 0, 0), 1 << 11);
    }

    #[test]
    fn test_quantize_rgb888_row_major() {
        let pixels = [255, 0, 0, 0, 255, 0, 0, 0, 255];
        assert_eq!(quantize_rgb888(&pixels), vec![0xF800, 0x07E0, 0x001F]);
    }

    #[test]
    fn test_quantize_rgb888_ignores_partial_pixel() {
        let pixels = [255, 255, 255, 1, 2];
        assert_eq!(quantize_rgb888(&pixels), vec![0xFFFF]);
    }

    #[test]
    fn test_unpack_fields() {
        assert_eq!(unpack(0xF800), (31, 0, 0));
        assert_eq!(unpack(0x07E0), (0, 63, 0));
        assert_eq!(unpack(0x001F), (0, 0, 31));
        assert_eq!(unpack(0xFFFF), (31, 63, 31));
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
