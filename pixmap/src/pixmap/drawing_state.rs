use super::pixmap::*;
use crate::blit::*;
use crate::color::*;
use crate::geometry::*;

use log::{debug};

///
/// Colour, compositing, clipping and translation settings
///
impl Pixmap {
    /// The current drawing colour
    #[inline]
    pub fn color(&self) -> u32 {
        self.state.color()
    }

    /// The current drawing colour as a colour object
    pub fn color_object(&self) -> Color {
        Color::from_argb(self.state.color())
    }

    /// The colour and compositing settings for this pixmap
    #[inline]
    pub fn color_state(&self) -> &ColorState {
        &self.state
    }

    pub fn set_color(&mut self, color: u32) -> &mut Self {
        self.state.set_color(color);
        self
    }

    pub fn set_color_rgb(&mut self, r: u8, g: u8, b: u8) -> &mut Self {
        self.state.set_color_rgb(r, g, b);
        self
    }

    pub fn set_color_rgba(&mut self, r: u8, g: u8, b: u8, a: u8) -> &mut Self {
        self.state.set_color_rgba(r, g, b, a);
        self
    }

    /// Sets the drawing colour from components in the range 0-1
    pub fn set_color_f32(&mut self, r: f32, g: f32, b: f32, a: f32) -> &mut Self {
        self.state.set_color_f32(r, g, b, a);
        self
    }

    pub fn set_color_object(&mut self, color: &Color) -> &mut Self {
        self.state.set_color_object(color);
        self
    }

    /// The alpha value of the current colour (0-1)
    #[inline]
    pub fn alpha(&self) -> f32 {
        self.state.alpha()
    }

    ///
    /// Sets the alpha value that replaces the alpha channel of every pixel written while it's not 1
    ///
    pub fn set_alpha(&mut self, alpha: f32) -> &mut Self {
        self.state.set_alpha(alpha);
        self
    }

    #[inline]
    pub fn composite(&self) -> CompositeMode {
        self.state.composite()
    }

    pub fn set_composite(&mut self, composite: CompositeMode) -> &mut Self {
        self.state.set_composite(composite);
        self
    }

    ///
    /// Switches to XOR mode, where drawing the same primitive twice restores the original pixels
    ///
    pub fn set_xor_mode(&mut self, xor_color: u32) -> &mut Self {
        self.state.set_xor_mode(xor_color);
        self
    }

    pub fn set_xor_color(&mut self, xor_color: &Color) -> &mut Self {
        self.state.set_xor_color(xor_color);
        self
    }

    /// Leaves XOR mode
    pub fn set_paint_mode(&mut self) -> &mut Self {
        self.state.set_paint_mode();
        self
    }

    #[inline]
    pub fn is_xor_mode(&self) -> bool {
        self.state.is_xor_mode()
    }

    /// The clip rectangle, as it was set
    #[inline]
    pub fn clip_bounds(&self) -> RectI {
        self.clip.clip_bounds()
    }

    /// The area of the buffer that drawing can currently change
    #[inline]
    pub fn device_clip(&self) -> RectI {
        self.clip.device_clip()
    }

    ///
    /// Replaces the clip rectangle (the rectangle is in drawing coordinates, so the translation applies to it)
    ///
    pub fn set_clip(&mut self, x: i32, y: i32, width: i32, height: i32) -> &mut Self {
        self.clip.set_clip(x, y, width, height);
        self
    }

    ///
    /// Reduces the clip region to the part that's inside the specified rectangle
    ///
    pub fn clip_rect(&mut self, x: i32, y: i32, width: i32, height: i32) -> &mut Self {
        self.clip.clip_rect(x, y, width, height);
        self
    }

    ///
    /// Moves the origin for drawing operations. Translations add up, and the clip moves with them.
    ///
    pub fn translate(&mut self, dx: i32, dy: i32) -> &mut Self {
        self.clip.translate(dx, dy);
        self
    }

    #[inline]
    pub fn translation(&self) -> (i32, i32) {
        self.clip.translation()
    }

    #[inline]
    pub fn background(&self) -> u32 {
        self.background
    }

    /// Sets the colour used by `clear_background`
    pub fn set_background(&mut self, color: u32) -> &mut Self {
        self.background = color;
        self
    }

    #[inline]
    pub fn transparent(&self) -> Option<u32> {
        self.buffer.transparent()
    }

    ///
    /// Sets the pixel value that's treated as transparent by blits, filters and composite modes (None to treat no
    /// value as transparent)
    ///
    pub fn set_transparent(&mut self, transparent: Option<u32>) -> &mut Self {
        self.buffer.set_transparent(transparent);
        self
    }

    #[inline]
    pub fn scale_filter(&self) -> ScaleFilter {
        self.scale_filter
    }

    ///
    /// Chooses how pixels are sampled when a pixmap is drawn onto this one at a different size
    ///
    pub fn set_scale_filter(&mut self, filter: ScaleFilter) -> &mut Self {
        if filter != self.scale_filter {
            debug!("Scaled blits now use the {:?} filter", filter);
        }

        self.scale_filter = filter;
        self
    }
}
