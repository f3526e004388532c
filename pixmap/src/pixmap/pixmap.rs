use crate::blit::*;
use crate::color::*;
use crate::error::*;
use crate::geometry::*;
use crate::raster::*;

use log::{debug, trace};

///
/// A CPU-resident ARGB framebuffer that primitives can be drawn on
///
/// Pixmaps have two states: open and closed. Closing a pixmap releases its pixels, after which every drawing call
/// leaves it unchanged. Drawing calls return `&mut Self` so they can be chained:
///
/// ```
/// # use flo_pixmap::*;
/// let mut pixmap = Pixmap::new(16, 16, true);
/// pixmap.set_color(0xffff_0000)
///     .fill_rect(0, 0, 8, 8)
///     .draw_line(0, 15, 15, 0);
///
/// assert!(pixmap.get_pixel(2, 2) == Some(0xffff_0000));
/// ```
///
#[derive(Clone, Debug)]
pub struct Pixmap {
    /// The pixels making up this pixmap
    pub (super) buffer: PixelBuffer,

    /// The clip rectangle and translation
    pub (super) clip: ClipRegion,

    /// The colour and compositing settings
    pub (super) state: ColorState,

    /// Colour used by `clear_background`
    pub (super) background: u32,

    /// How pixels are sampled by scaled blits
    pub (super) scale_filter: ScaleFilter,

    /// Set once the pixmap has been closed
    pub (super) closed: bool,
}

impl Pixmap {
    ///
    /// Creates a new pixmap, initially filled with 0 (transparent black)
    ///
    pub fn new(width: i32, height: i32, has_alpha: bool) -> Pixmap {
        Self::from_buffer(PixelBuffer::new(width, height, has_alpha))
    }

    ///
    /// Creates a pixmap from a set of packed ARGB pixels, which must contain exactly `width * height` values
    ///
    pub fn from_pixels(pixels: Vec<u32>, width: i32, height: i32, has_alpha: bool) -> Result<Pixmap, PixmapError> {
        Ok(Self::from_buffer(PixelBuffer::from_pixels(pixels, width, height, has_alpha)?))
    }

    ///
    /// Creates a pixmap with the default drawing state around an existing buffer
    ///
    pub (super) fn from_buffer(buffer: PixelBuffer) -> Pixmap {
        let clip = ClipRegion::new(buffer.width(), buffer.height());

        Pixmap {
            buffer:         buffer,
            clip:           clip,
            state:          ColorState::new(),
            background:     BLACK,
            scale_filter:   ScaleFilter::default(),
            closed:         false,
        }
    }

    #[inline] pub fn width(&self) -> i32         { self.buffer.width() }
    #[inline] pub fn height(&self) -> i32        { self.buffer.height() }
    #[inline] pub fn has_alpha(&self) -> bool    { self.buffer.has_alpha() }

    /// The number of pixels in this pixmap (`width * height`)
    #[inline]
    pub fn size(&self) -> usize {
        (self.width() as usize) * (self.height() as usize)
    }

    /// True if this pixmap has no pixels (its width or its height is 0)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// The pixels of this pixmap, row by row (empty once the pixmap is closed)
    #[inline]
    pub fn pixels(&self) -> &[u32] {
        self.buffer.pixels()
    }

    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [u32] {
        self.buffer.pixels_mut()
    }

    #[inline]
    pub fn into_pixels(self) -> Vec<u32> {
        self.buffer.into_pixels()
    }

    /// The buffer that stores the pixels for this pixmap
    #[inline]
    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    ///
    /// Replaces the pixels of this pixmap. The new pixel data must be exactly `width * height` values long.
    ///
    pub fn set_data(&mut self, pixels: Vec<u32>) -> Result<(), PixmapError> {
        if self.closed {
            return Err(PixmapError::Closed);
        }

        self.buffer.set_data(pixels)
    }

    ///
    /// Closes this pixmap, releasing its pixels. Any drawing after this point leaves the pixmap unchanged.
    ///
    pub fn close(&mut self) {
        if !self.closed {
            debug!("Closing {}x{} pixmap", self.width(), self.height());
        }

        self.closed = true;
        self.buffer.release();
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    ///
    /// Converts a position in drawing coordinates to a position in the buffer
    ///
    #[inline]
    pub (super) fn device(&self, x: i32, y: i32) -> (i32, i32) {
        self.clip.to_device(x, y)
    }

    ///
    /// Runs a drawing action against the buffer using a specific colour
    ///
    #[inline]
    pub (super) fn draw_with_color(&mut self, color: u32, action: impl FnOnce(&mut RasterContext)) -> &mut Self {
        if self.closed {
            trace!("Ignoring drawing operation on a closed pixmap");
            return self;
        }

        let mut ctxt = RasterContext::with_color(&mut self.buffer, &self.clip, &self.state, color);
        action(&mut ctxt);

        self
    }

    ///
    /// Runs a drawing action against the buffer using the current colour
    ///
    #[inline]
    pub (super) fn draw(&mut self, action: impl FnOnce(&mut RasterContext)) -> &mut Self {
        let color = self.state.color();
        self.draw_with_color(color, action)
    }

    ///
    /// Reads a pixel from the buffer (returning None for positions outside of the buffer or if the pixmap is closed)
    ///
    /// Positions are in buffer coordinates: the translation does not apply.
    ///
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<u32> {
        self.buffer.get(x, y)
    }

    ///
    /// Writes a pixel in the current colour
    ///
    pub fn put_pixel_current(&mut self, x: i32, y: i32) -> &mut Self {
        let color = self.state.color();
        self.put_pixel(x, y, color)
    }

    ///
    /// Writes a pixel to the buffer, subject to the clip region, composite mode, alpha and XOR settings
    ///
    /// Positions are in buffer coordinates: the translation does not apply. Positions outside the buffer are ignored.
    ///
    pub fn put_pixel(&mut self, x: i32, y: i32, color: u32) -> &mut Self {
        self.draw_with_color(color, |ctxt| { ctxt.write(x, y, color); })
    }

    ///
    /// True if the pixel at a position is transparent. Positions outside the pixmap count as transparent and pixmaps
    /// without alpha are never transparent.
    ///
    pub fn is_transparent(&self, x: i32, y: i32) -> bool {
        match self.buffer.get(x, y) {
            None        => true,
            Some(pixel) => self.has_alpha() && alpha_of(pixel) == 0,
        }
    }

    ///
    /// True if every pixel in this pixmap has no alpha and is the transparency sentinel
    ///
    pub fn is_color_empty(&self) -> bool {
        self.buffer.pixels().iter()
            .all(|pixel| alpha_of(*pixel) == 0 && self.buffer.is_sentinel(*pixel))
    }

    ///
    /// Reads a rectangular region of pixels. Positions outside the pixmap read as `0xffffffff`.
    ///
    pub fn get_rgb_region(&self, x: i32, y: i32, width: i32, height: i32) -> Vec<u32> {
        let mut region = Vec::with_capacity((width.max(0) as usize) * (height.max(0) as usize));

        for ypos in y..y.saturating_add(height) {
            for xpos in x..x.saturating_add(width) {
                region.push(self.buffer.get(xpos, ypos).unwrap_or(0xffff_ffff));
            }
        }

        region
    }

    ///
    /// Writes a rectangular region of pixels using `put_pixel`
    ///
    /// The pixel for `(x + i, y + j)` is read from `pixels[offset + j * scansize + i]`. Missing source pixels are skipped.
    ///
    pub fn set_rgb_region(&mut self, x: i32, y: i32, width: i32, height: i32, pixels: &[u32], offset: usize, scansize: usize) -> &mut Self {
        for row in 0..height.max(0) {
            for col in 0..width.max(0) {
                let idx = offset + (row as usize) * scansize + (col as usize);

                if let Some(pixel) = pixels.get(idx) {
                    self.put_pixel(x.saturating_add(col), y.saturating_add(row), *pixel);
                }
            }
        }

        self
    }

    ///
    /// Sets every pixel to 0 directly, ignoring the clip and the colour state
    ///
    pub fn clear(&mut self) -> &mut Self {
        self.buffer.pixels_mut().iter_mut().for_each(|pixel| *pixel = 0);
        self
    }

    ///
    /// Writes a colour over the whole buffer through the composite, alpha and XOR settings (the clip is ignored)
    ///
    pub fn clear_draw(&mut self, color: u32) -> &mut Self {
        if self.closed {
            return self;
        }

        let state       = &self.state;
        let transparent = self.buffer.transparent();

        for pixel in self.buffer.pixels_mut().iter_mut() {
            if let Some(new_pixel) = state.resolve(*pixel, color, transparent) {
                *pixel = new_pixel;
            }
        }

        self
    }

    ///
    /// Fills the whole buffer with the background colour
    ///
    pub fn clear_background(&mut self) -> &mut Self {
        let background = self.background;
        self.clear_draw(background)
    }

    ///
    /// Fills the whole buffer with the current colour
    ///
    pub fn fill(&mut self) -> &mut Self {
        let color = self.state.color();
        self.clear_draw(color)
    }
}

impl PartialEq for Pixmap {
    fn eq(&self, other: &Pixmap) -> bool {
        self.width() == other.width()
            && self.height() == other.height()
            && self.has_alpha() == other.has_alpha()
            && self.pixels() == other.pixels()
    }
}
