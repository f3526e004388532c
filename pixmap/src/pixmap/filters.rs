use super::pixmap::*;
use crate::color::*;
use crate::filters::*;

use log::{trace};

///
/// Whole-pixmap colour filters
///
/// Filters change the pixels directly: they ignore the clip and the colour state, and pixels that match the
/// transparency sentinel are left alone. Filtering a closed pixmap does nothing.
///
impl Pixmap {
    ///
    /// Applies a colour filter to every pixel
    ///
    pub fn apply_filter(&mut self, filter: &(impl ColorFilter + ?Sized)) -> &mut Self {
        if self.closed {
            trace!("Ignoring filter on a closed pixmap");
            return self;
        }

        apply_color_filter(&mut self.buffer, filter);
        self
    }

    /// Moves every pixel towards its luminance by `mix` (0 = unchanged, 1 = fully grey)
    pub fn grey_scale(&mut self, mix: f32) -> &mut Self {
        self.apply_filter(&GreyScaleFilter::with_mix(mix))
    }

    /// Moves every pixel towards a sepia tone by `mix`
    pub fn sepia(&mut self, mix: f32) -> &mut Self {
        self.apply_filter(&SepiaFilter::with_mix(mix))
    }

    /// Moves every pixel towards its inverse by `mix`
    pub fn invert(&mut self, mix: f32) -> &mut Self {
        self.apply_filter(&InvertFilter::with_mix(mix))
    }

    ///
    /// Turns every pixel black or white depending on whether its luminance is above a level
    ///
    pub fn threshold(&mut self, level: i32) -> &mut Self {
        self.apply_filter(&ThresholdFilter::with_level(level))
    }

    /// Multiplies every channel of every pixel by a colour
    pub fn multiply(&mut self, color: &Color) -> &mut Self {
        self.apply_filter(&MultiplyFilter::with_color(*color))
    }

    ///
    /// Blends the colour of every pixel towards a target colour. `weight` is out of 256, with 256 leaving the
    /// pixels unchanged.
    ///
    pub fn blend_to(&mut self, color: u32, weight: i32) -> &mut Self {
        self.apply_filter(&BlendToFilter::new(color, weight))
    }

    ///
    /// Replaces every pixel that is exactly `src` with `dst`
    ///
    pub fn replace_color(&mut self, src: u32, dst: u32) -> &mut Self {
        self.buffer.pixels_mut().iter_mut()
            .filter(|pixel| **pixel == src)
            .for_each(|pixel| *pixel = dst);

        self
    }
}
