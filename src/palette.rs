//! The fixed 16-color base palette and blend-pair enumeration.
//!
//! The base palette is the classic 4-bit set (black, blue, green, cyan,
//! red, magenta, brown, light grey, then the bright variants). Blending
//! two distinct entries produces a candidate display color; the canonical
//! enumeration order of those pairs is load-bearing, because the index
//! table and the reduced palette are both keyed by it.

use palette_reduce::Rgb;

/// The 16 fixed base colors, in hardware index order.
pub const BASE_COLORS: [Rgb; 16] = [
    Rgb::new(0, 0, 0),       // black
    Rgb::new(0, 0, 170),     // blue
    Rgb::new(0, 170, 0),     // green
    Rgb::new(0, 170, 170),   // cyan
    Rgb::new(170, 0, 0),     // red
    Rgb::new(170, 0, 170),   // magenta
    Rgb::new(170, 85, 0),    // brown
    Rgb::new(170, 170, 170), // light grey
    Rgb::new(85, 85, 85),    // dark grey
    Rgb::new(85, 85, 255),   // bright blue
    Rgb::new(85, 255, 85),   // bright green
    Rgb::new(85, 255, 255),  // bright cyan
    Rgb::new(255, 85, 85),   // bright red
    Rgb::new(255, 85, 255),  // bright magenta
    Rgb::new(255, 255, 85),  // yellow
    Rgb::new(255, 255, 255), // white
];

/// Enumerate every unordered pair `(a, b)` of base color indices with
/// `a < b`, in canonical row-major order: `a` outer, `b` inner.
///
/// This yields exactly `16 * 15 / 2 = 120` pairs. Table construction and
/// serialization both re-walk this order, so it must never change.
pub fn blend_pairs() -> impl Iterator<Item = (usize, usize)> {
    (0..BASE_COLORS.len()).flat_map(|a| (a + 1..BASE_COLORS.len()).map(move |b| (a, b)))
}

/// The averaged blend colors of all unordered base-color pairs, in
/// canonical pair order.
pub fn blend_strip() -> Vec<Rgb> {
    blend_pairs()
        .map(|(a, b)| BASE_COLORS[a].mix(BASE_COLORS[b]))
        .collect()
}
