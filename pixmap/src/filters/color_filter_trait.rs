use crate::raster::*;

///
/// A colour filter transforms each pixel of a buffer independently of its neighbours
///
pub trait ColorFilter {
    ///
    /// Returns the filtered version of a packed ARGB pixel
    ///
    fn filter_pixel(&self, pixel: u32) -> u32;

    ///
    /// Filters a line of pixels in place, leaving any pixels that match the transparency sentinel alone
    ///
    fn filter_line(&self, line: &mut [u32], transparent: Option<u32>) {
        for pixel in line.iter_mut() {
            if Some(*pixel) != transparent {
                *pixel = self.filter_pixel(*pixel);
            }
        }
    }
}

///
/// Applies a colour filter to every line of a buffer
///
pub fn apply_color_filter(buffer: &mut PixelBuffer, filter: &(impl ColorFilter + ?Sized)) {
    let transparent = buffer.transparent();

    for y in 0..buffer.height() {
        filter.filter_line(buffer.row_mut(y), transparent);
    }
}

///
/// Clamps a mix value to the range 0-1
///
#[inline]
pub (crate) fn clamp_mix(mix: f32) -> f32 {
    if mix.is_nan() { 0.0 } else { mix.max(0.0).min(1.0) }
}

///
/// Interpolates between an original value and a filtered value
///
#[inline]
pub (crate) fn mix_value(original: f32, filtered: f32, mix: f32) -> f32 {
    filtered * mix + original * (1.0 - mix)
}
