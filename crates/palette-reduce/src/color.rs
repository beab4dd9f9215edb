//! 8-bit RGB color type
//!
//! A plain 24-bit color triple. This crate operates on device palette data,
//! so values stay in integer sRGB throughout; no gamma or perceptual
//! conversions are applied.

/// A color with 8-bit red, green, and blue channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb {
    /// Create a new color from channel values.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a byte array `[R, G, B]`.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array `[R, G, B]`.
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Component-wise average of two colors, truncating toward zero.
    ///
    /// Each channel is `(a + b) >> 1`, matching integer blend hardware:
    /// the low bit is dropped, not rounded.
    ///
    /// # Example
    /// ```
    /// use palette_reduce::Rgb;
    /// let mid = Rgb::new(0, 0, 0).mix(Rgb::new(255, 255, 255));
    /// assert_eq!(mid, Rgb::new(127, 127, 127));
    /// ```
    #[inline]
    pub const fn mix(self, other: Rgb) -> Rgb {
        Rgb::new(
            ((self.r as u16 + other.r as u16) >> 1) as u8,
            ((self.g as u16 + other.g as u16) >> 1) as u8,
            ((self.b as u16 + other.b as u16) >> 1) as u8,
        )
    }

    /// Squared Euclidean distance to another color in RGB space.
    #[inline]
    pub fn distance_squared(self, other: Rgb) -> u32 {
        let dr = self.r as i32 - other.r as i32;
        let dg = self.g as i32 - other.g as i32;
        let db = self.b as i32 - other.b as i32;
        (dr * dr + dg * dg + db * db) as u32
    }
}
