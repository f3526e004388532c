use super::packed::*;

///
/// A colour described as a set of floating point components in the range 0-1
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color          = Color { r: 1.0, g: 1.0, b: 1.0, a: 1.0 };
    pub const BLACK: Color          = Color { r: 0.0, g: 0.0, b: 0.0, a: 1.0 };
    pub const RED: Color            = Color { r: 1.0, g: 0.0, b: 0.0, a: 1.0 };
    pub const GREEN: Color          = Color { r: 0.0, g: 1.0, b: 0.0, a: 1.0 };
    pub const BLUE: Color           = Color { r: 0.0, g: 0.0, b: 1.0, a: 1.0 };
    pub const TRANSPARENT: Color    = Color { r: 0.0, g: 0.0, b: 0.0, a: 0.0 };

    ///
    /// Creates a colour from components in the range 0-1
    ///
    #[inline]
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Color {
        Color { r, g, b, a }
    }

    ///
    /// Creates a colour from byte components
    ///
    #[inline]
    pub fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color {
            r: (r as f32) / 255.0,
            g: (g as f32) / 255.0,
            b: (b as f32) / 255.0,
            a: (a as f32) / 255.0,
        }
    }

    ///
    /// Creates a colour from a packed ARGB pixel
    ///
    #[inline]
    pub fn from_argb(pixel: u32) -> Color {
        let [r, g, b, a] = rgba_components(pixel);
        Color::from_rgba_u8(r, g, b, a)
    }

    ///
    /// Packs this colour as an ARGB pixel
    ///
    #[inline]
    pub fn to_argb(&self) -> u32 {
        argb(unit_to_byte(self.a), unit_to_byte(self.r), unit_to_byte(self.g), unit_to_byte(self.b))
    }

    /// Packs this colour as an opaque RGB value (the alpha byte is always 0xff)
    #[inline]
    pub fn to_rgb(&self) -> u32 {
        with_alpha(self.to_argb(), 0xff)
    }

    /// Returns the components of this colour as bytes, in R, G, B, A order
    #[inline]
    pub fn to_rgba_u8(&self) -> [u8; 4] {
        rgba_components(self.to_argb())
    }

    ///
    /// Multiplies each component of this colour by the matching component of another
    ///
    #[inline]
    pub fn multiply(&self, other: &Color) -> Color {
        Color {
            r: self.r * other.r,
            g: self.g * other.g,
            b: self.b * other.b,
            a: self.a * other.a,
        }
    }
}

impl Default for Color {
    fn default() -> Color {
        Color::WHITE
    }
}

impl From<u32> for Color {
    #[inline]
    fn from(pixel: u32) -> Color {
        Color::from_argb(pixel)
    }
}

impl From<Color> for u32 {
    #[inline]
    fn from(color: Color) -> u32 {
        color.to_argb()
    }
}
