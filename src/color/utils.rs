use crate::color::Rgb;

/// Create an RGB color from a u32 value (0xRRGGBB format)
///
/// The top byte is ignored.
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Pack an RGB color into a u32 value (0xRRGGBB format)
pub const fn rgb_to_u32(color: Rgb) -> u32 {
    ((color.r as u32) << 16) | ((color.g as u32) << 8) | color.b as u32
}

/// Channel bytes in wire order
///
/// WS281x chips shift in green first, then red, then blue.
#[inline]
pub const fn grb_bytes(color: Rgb) -> [u8; 3] {
    [color.g, color.r, color.b]
}
