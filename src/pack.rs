//! 15-bit packed color encoding.
//!
//! The target display takes colors as 16-bit little-endian words: bit 15
//! is a fixed opaque marker, bits 14-10 blue, 9-5 green, 4-0 red, five
//! bits per channel taken from the high bits of each 8-bit component.
//! The low three bits of each channel are truncated, not rounded.

use palette_reduce::Rgb;

/// Pack an 8-bit RGB color into the display's 15-bit format.
#[inline]
pub fn pack(color: Rgb) -> u16 {
    0x8000
        | ((color.b as u16 >> 3) << 10)
        | ((color.g as u16 >> 3) << 5)
        | (color.r as u16 >> 3)
}

/// Expand a packed color back to 8-bit channels.
///
/// The low three bits of each channel come back as zero; packing is lossy.
#[inline]
pub fn unpack(raw: u16) -> Rgb {
    Rgb::new(
        ((raw & 0x1f) as u8) << 3,
        (((raw >> 5) & 0x1f) as u8) << 3,
        (((raw >> 10) & 0x1f) as u8) << 3,
    )
}
