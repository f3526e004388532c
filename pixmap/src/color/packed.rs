//!
//! Helpers for working with packed `0xAARRGGBB` pixel values
//!

/// The pixel value used as the default transparency sentinel
pub const TRANSPARENT: u32 = 0x0000_0000;

/// The default drawing colour (opaque white)
pub const DEFAULT_COLOR: u32 = 0xffff_ffff;

/// Opaque black, used as the default background colour
pub const BLACK: u32 = 0xff00_0000;

///
/// Packs a set of components into an ARGB pixel
///
#[inline]
pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> u32 {
    ((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

/// Packs an opaque RGB pixel
#[inline]
pub const fn rgb(r: u8, g: u8, b: u8) -> u32 {
    argb(0xff, r, g, b)
}

#[inline] pub const fn alpha_of(pixel: u32) -> u8 { (pixel >> 24) as u8 }
#[inline] pub const fn red_of(pixel: u32) -> u8   { (pixel >> 16) as u8 }
#[inline] pub const fn green_of(pixel: u32) -> u8 { (pixel >> 8) as u8 }
#[inline] pub const fn blue_of(pixel: u32) -> u8  { pixel as u8 }

///
/// Replaces the alpha byte of a pixel
///
#[inline]
pub const fn with_alpha(pixel: u32, alpha: u8) -> u32 {
    ((alpha as u32) << 24) | (pixel & 0x00ff_ffff)
}

///
/// Splits a pixel into `[r, g, b, a]` components
///
#[inline]
pub const fn rgba_components(pixel: u32) -> [u8; 4] {
    [red_of(pixel), green_of(pixel), blue_of(pixel), alpha_of(pixel)]
}

///
/// Swaps the red and blue channels, turning an ARGB pixel into an ABGR one (the conversion is its own inverse)
///
#[inline]
pub const fn argb_to_abgr(pixel: u32) -> u32 {
    (pixel & 0xff00_ff00) | ((pixel & 0x00ff_0000) >> 16) | ((pixel & 0x0000_00ff) << 16)
}

///
/// Perceptual luminance of a colour, in the same 0-255 range as the components
///
#[inline]
pub fn luminance(r: u8, g: u8, b: u8) -> f32 {
    0.299 * (r as f32) + 0.587 * (g as f32) + 0.114 * (b as f32)
}

///
/// Converts a value in the range 0-255 to a byte, clamping values that are out of range
///
#[inline]
pub fn clamp_to_byte(value: f32) -> u8 {
    if value <= 0.0 {
        0
    } else if value >= 255.0 {
        255
    } else {
        value as u8
    }
}

///
/// Converts a value in the range 0-1 to a byte (rounding to the nearest value), clamping values that are out of range
///
#[inline]
pub fn unit_to_byte(value: f32) -> u8 {
    clamp_to_byte(value * 255.0 + 0.5)
}
