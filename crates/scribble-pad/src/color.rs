//! 8-bit sRGB colors and the fixed palette.
//!
//! Canvas colors are specified as 8-bit sRGB values and converted to the
//! engine's linear premultiplied [`Color`] only when painted.

use scribble_engine::paint::Color;

/// Per-step multiplier applied by [`darken`].
pub const DARKEN_RATIO: f32 = 0.5;

/// Backdrop base colors.
pub const BLUE: Rgba8 = Rgba8::rgb(86, 158, 199);
pub const DARK_GRAY: Rgba8 = Rgba8::rgb(80, 80, 80);

/// Backgrounds cycled by the canvas, indexed by `Document::bg_index`.
pub const PALETTE: [Rgba8; 2] = [BLUE, DARK_GRAY];

/// Ink color (#EEEEEE, opaque).
pub const INK: Rgba8 = Rgba8::rgb(0xEE, 0xEE, 0xEE);

/// Drop-shadow color.
pub const SHADOW: Rgba8 = Rgba8::new(0, 0, 0, 190);

/// 8-bit sRGB color with straight (non-premultiplied) alpha.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// See [`darken`].
    #[inline]
    pub fn darken(self) -> Self {
        darken(self)
    }

    /// Converts to the engine's linear premultiplied color.
    #[inline]
    pub fn to_color(self) -> Color {
        Color::from_srgb_u8(self.r, self.g, self.b, self.a)
    }
}

impl From<Rgba8> for Color {
    #[inline]
    fn from(c: Rgba8) -> Self {
        c.to_color()
    }
}

/// Scales each RGB channel by [`DARKEN_RATIO`], truncating toward zero.
/// Alpha is preserved.
pub fn darken(c: Rgba8) -> Rgba8 {
    let scale = |v: u8| (v as f32 * DARKEN_RATIO) as u8;
    Rgba8::new(scale(c.r), scale(c.g), scale(c.b), c.a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn darken_halves_and_truncates() {
        assert_eq!(darken(BLUE), Rgba8::rgb(43, 79, 99));
        assert_eq!(darken(Rgba8::rgb(1, 3, 255)), Rgba8::rgb(0, 1, 127));
    }

    #[test]
    fn darken_keeps_alpha() {
        assert_eq!(darken(SHADOW).a, 190);
    }

    #[test]
    fn triple_darken_of_palette() {
        assert_eq!(BLUE.darken().darken().darken(), Rgba8::rgb(10, 19, 24));
        assert_eq!(DARK_GRAY.darken().darken().darken(), Rgba8::rgb(10, 10, 10));
    }

    #[test]
    fn opaque_ink_converts_to_opaque_color() {
        let c = INK.to_color();
        assert_eq!(c.a, 1.0);
        assert!(c.r > 0.8 && c.r < 0.9);
    }
}
