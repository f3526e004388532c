use crate::color::*;
use crate::error::*;

use log::{warn};

///
/// A flat store of packed ARGB pixels
///
/// The pixel vector always holds exactly `width * height` values, stored row by row.
///
#[derive(Clone, Debug, PartialEq)]
pub struct PixelBuffer {
    width:          i32,
    height:         i32,
    pixels:         Vec<u32>,
    has_alpha:      bool,

    /// Pixel value treated as 'empty' by blits, filters and the composite modes
    transparent:    Option<u32>,
}

impl PixelBuffer {
    ///
    /// Creates a buffer of the specified size, with every pixel set to 0 (negative sizes are treated as 0)
    ///
    pub fn new(width: i32, height: i32, has_alpha: bool) -> PixelBuffer {
        let width   = width.max(0);
        let height  = height.max(0);

        PixelBuffer {
            width:          width,
            height:         height,
            pixels:         vec![0; (width as usize) * (height as usize)],
            has_alpha:      has_alpha,
            transparent:    Some(TRANSPARENT),
        }
    }

    ///
    /// Creates a buffer from an existing set of pixels (which must contain exactly `width * height` values)
    ///
    pub fn from_pixels(pixels: Vec<u32>, width: i32, height: i32, has_alpha: bool) -> Result<PixelBuffer, PixmapError> {
        let mut buffer = PixelBuffer::new(0, 0, has_alpha);

        buffer.width    = width.max(0);
        buffer.height   = height.max(0);
        buffer.set_data(pixels)?;

        Ok(buffer)
    }

    #[inline] pub fn width(&self) -> i32         { self.width }
    #[inline] pub fn height(&self) -> i32        { self.height }
    #[inline] pub fn has_alpha(&self) -> bool    { self.has_alpha }

    /// The number of pixels in this buffer
    #[inline]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// The transparency sentinel (`None` if no pixel value is treated as transparent)
    #[inline]
    pub fn transparent(&self) -> Option<u32> {
        self.transparent
    }

    pub fn set_transparent(&mut self, transparent: Option<u32>) {
        self.transparent = transparent;
    }

    /// True if a pixel has the value of the transparency sentinel
    #[inline]
    pub fn is_sentinel(&self, pixel: u32) -> bool {
        self.transparent == Some(pixel)
    }

    #[inline] pub fn pixels(&self) -> &[u32]             { &self.pixels }
    #[inline] pub fn pixels_mut(&mut self) -> &mut [u32] { &mut self.pixels }
    #[inline] pub fn into_pixels(self) -> Vec<u32>       { self.pixels }

    ///
    /// Replaces the pixel data for this buffer, failing if it's not exactly `width * height` pixels long
    ///
    pub fn set_data(&mut self, pixels: Vec<u32>) -> Result<(), PixmapError> {
        let expected = (self.width as usize) * (self.height as usize);

        if pixels.len() != expected {
            warn!("Rejecting pixel data of length {} for a {}x{} buffer", pixels.len(), self.width, self.height);
            return Err(PixmapError::DataLength { expected: expected, actual: pixels.len() });
        }

        self.pixels = pixels;
        Ok(())
    }

    ///
    /// Drops the pixel data (the dimensions are kept)
    ///
    pub fn release(&mut self) {
        self.pixels = vec![];
    }

    ///
    /// The index of a pixel in the buffer, or None if it's outside of the buffer
    ///
    #[inline]
    pub fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            None
        } else {
            Some((y as usize) * (self.width as usize) + (x as usize))
        }
    }

    ///
    /// Reads a pixel, returning None if it's outside of the buffer
    ///
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<u32> {
        self.index_of(x, y).and_then(|idx| self.pixels.get(idx).copied())
    }

    ///
    /// Writes a pixel directly, with no clipping or compositing (ignored if the pixel is outside of the buffer)
    ///
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, pixel: u32) {
        if let Some(idx) = self.index_of(x, y) {
            if let Some(target) = self.pixels.get_mut(idx) {
                *target = pixel;
            }
        }
    }

    ///
    /// The pixels for a row of this buffer
    ///
    #[inline]
    pub fn row(&self, y: i32) -> &[u32] {
        if y < 0 || y >= self.height || self.pixels.is_empty() {
            &[]
        } else {
            let start = (y as usize) * (self.width as usize);
            &self.pixels[start..(start + self.width as usize)]
        }
    }

    /// The pixels for a row of this buffer (mutable)
    #[inline]
    pub fn row_mut(&mut self, y: i32) -> &mut [u32] {
        if y < 0 || y >= self.height || self.pixels.is_empty() {
            &mut []
        } else {
            let start = (y as usize) * (self.width as usize);
            &mut self.pixels[start..(start + self.width as usize)]
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn out_of_range_reads_are_none() {
        let buffer = PixelBuffer::new(4, 4, true);

        assert!(buffer.get(3, 3) == Some(0));
        assert!(buffer.get(4, 0).is_none());
        assert!(buffer.get(0, -1).is_none());
    }

    #[test]
    fn reject_mismatched_data() {
        let mut buffer = PixelBuffer::new(4, 4, true);

        assert!(buffer.set_data(vec![0; 15]) == Err(PixmapError::DataLength { expected: 16, actual: 15 }));
        assert!(buffer.set_data(vec![1; 16]).is_ok());
        assert!(buffer.get(2, 2) == Some(1));
    }
}
