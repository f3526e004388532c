use super::pixmap::*;
use crate::codec::*;
use crate::error::*;

///
/// Conversions between pixmaps and byte formats
///
impl Pixmap {
    /// The pixels of this pixmap with their channels reordered to ABGR
    pub fn abgr_data(&self) -> Vec<u32> {
        abgr_data(self.buffer.pixels())
    }

    /// The pixels as bytes in red, green, blue, alpha order
    pub fn rgba_bytes(&self) -> Vec<u8> {
        pixels_to_bytes(self.buffer.pixels(), ByteOrder::Rgba)
    }

    /// The pixels as bytes in blue, green, red, alpha order
    pub fn bgra_bytes(&self) -> Vec<u8> {
        pixels_to_bytes(self.buffer.pixels(), ByteOrder::Bgra)
    }

    /// The pixels as bytes in red, green, blue order (alpha is dropped)
    pub fn rgb_bytes(&self) -> Vec<u8> {
        pixels_to_bytes(self.buffer.pixels(), ByteOrder::Rgb)
    }

    /// The pixels as bytes in blue, green, red order (alpha is dropped)
    pub fn bgr_bytes(&self) -> Vec<u8> {
        pixels_to_bytes(self.buffer.pixels(), ByteOrder::Bgr)
    }

    ///
    /// Converts the pixels to RGBA bytes, optionally writing pixels that match the transparency sentinel as 0
    ///
    pub fn convert_to_byte_buffer(&self, filter_transparent: bool) -> Vec<u8> {
        convert_to_byte_buffer(&self.buffer, filter_transparent)
    }

    /// Converts the pixels to RGB bytes
    #[inline]
    pub fn convert_to_rgb_byte_buffer(&self) -> Vec<u8> {
        self.rgb_bytes()
    }

    ///
    /// Replaces the pixels of this pixmap with a set of RGBA bytes (4 bytes for every pixel)
    ///
    pub fn load_rgba_bytes(&mut self, bytes: &[u8]) -> Result<(), PixmapError> {
        self.load_bytes(bytes, ByteOrder::Rgba)
    }

    ///
    /// Replaces the pixels of this pixmap with a set of RGB bytes (3 bytes for every pixel). The loaded pixels are
    /// opaque.
    ///
    pub fn load_rgb_bytes(&mut self, bytes: &[u8]) -> Result<(), PixmapError> {
        self.load_bytes(bytes, ByteOrder::Rgb)
    }

    fn load_bytes(&mut self, bytes: &[u8], order: ByteOrder) -> Result<(), PixmapError> {
        if self.closed {
            return Err(PixmapError::Closed);
        }

        let pixels = bytes_to_pixels(bytes, order, self.size())?;
        self.set_data(pixels)
    }

    ///
    /// Encodes the RGBA bytes of this pixmap as a base64 string
    ///
    #[cfg(feature="encode_base64")]
    pub fn base64(&self) -> String {
        rgba_base64(&self.buffer)
    }

    ///
    /// Writes this pixmap to a stream as a PNG image
    ///
    #[cfg(feature="render_png")]
    pub fn write_png<TStream: std::io::Write>(&self, target: TStream) -> Result<(), PixmapError> {
        write_png(&self.buffer, target)
    }

    ///
    /// Encodes this pixmap as a PNG image in memory
    ///
    #[cfg(feature="render_png")]
    pub fn to_png_bytes(&self) -> Result<Vec<u8>, PixmapError> {
        png_bytes(&self.buffer)
    }
}
