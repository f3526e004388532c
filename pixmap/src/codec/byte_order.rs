use crate::color::*;
use crate::error::*;
use crate::raster::*;

use log::{warn};

///
/// The order that channels are written in when converting pixels to bytes
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    /// 4 bytes per pixel: red, green, blue, alpha
    Rgba,

    /// 4 bytes per pixel: blue, green, red, alpha
    Bgra,

    /// 3 bytes per pixel: red, green, blue
    Rgb,

    /// 3 bytes per pixel: blue, green, red
    Bgr,
}

impl ByteOrder {
    /// The number of bytes used for each pixel in this format
    #[inline]
    pub fn bytes_per_pixel(&self) -> usize {
        match self {
            ByteOrder::Rgba | ByteOrder::Bgra   => 4,
            ByteOrder::Rgb  | ByteOrder::Bgr    => 3,
        }
    }

    ///
    /// Writes the bytes for a single pixel to the end of a vector
    ///
    #[inline]
    fn push_pixel(&self, pixel: u32, bytes: &mut Vec<u8>) {
        let [r, g, b, a] = rgba_components(pixel);

        match self {
            ByteOrder::Rgba => bytes.extend_from_slice(&[r, g, b, a]),
            ByteOrder::Bgra => bytes.extend_from_slice(&[b, g, r, a]),
            ByteOrder::Rgb  => bytes.extend_from_slice(&[r, g, b]),
            ByteOrder::Bgr  => bytes.extend_from_slice(&[b, g, r]),
        }
    }

    ///
    /// Reads a pixel from the bytes for a single pixel (3-byte formats produce opaque pixels)
    ///
    #[inline]
    fn read_pixel(&self, bytes: &[u8]) -> u32 {
        match self {
            ByteOrder::Rgba => argb(bytes[3], bytes[0], bytes[1], bytes[2]),
            ByteOrder::Bgra => argb(bytes[3], bytes[2], bytes[1], bytes[0]),
            ByteOrder::Rgb  => rgb(bytes[0], bytes[1], bytes[2]),
            ByteOrder::Bgr  => rgb(bytes[2], bytes[1], bytes[0]),
        }
    }
}

///
/// Converts a set of pixels to bytes in the specified order
///
pub fn pixels_to_bytes(pixels: &[u32], order: ByteOrder) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(pixels.len() * order.bytes_per_pixel());

    for pixel in pixels.iter() {
        order.push_pixel(*pixel, &mut bytes);
    }

    bytes
}

///
/// Converts a buffer to bytes for uploading as a texture (red, green, blue, alpha for each pixel)
///
/// If `filter_transparent` is set, pixels that match the buffer's transparency sentinel are written as 0
///
pub fn convert_to_byte_buffer(buffer: &PixelBuffer, filter_transparent: bool) -> Vec<u8> {
    if !filter_transparent || buffer.transparent().is_none() {
        return pixels_to_bytes(buffer.pixels(), ByteOrder::Rgba);
    }

    let mut bytes = Vec::with_capacity(buffer.len() * 4);
    for pixel in buffer.pixels().iter() {
        let pixel = if buffer.is_sentinel(*pixel) { 0 } else { *pixel };
        ByteOrder::Rgba.push_pixel(pixel, &mut bytes);
    }

    bytes
}

///
/// Reorders the channels of a set of pixels from ARGB to ABGR
///
pub fn abgr_data(pixels: &[u32]) -> Vec<u32> {
    pixels.iter().map(|pixel| argb_to_abgr(*pixel)).collect()
}

///
/// Reads a set of pixels from bytes in the specified order, which must contain exactly `pixel_count` pixels
///
pub fn bytes_to_pixels(bytes: &[u8], order: ByteOrder, pixel_count: usize) -> Result<Vec<u32>, PixmapError> {
    let expected = pixel_count * order.bytes_per_pixel();

    if bytes.len() != expected {
        warn!("Rejecting {:?} data of length {} (expected {} bytes)", order, bytes.len(), expected);
        return Err(PixmapError::DataLength { expected: expected, actual: bytes.len() });
    }

    Ok(bytes.chunks_exact(order.bytes_per_pixel())
        .map(|pixel| order.read_pixel(pixel))
        .collect())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn channel_orders() {
        let pixels = [0x8011_2233];

        assert!(pixels_to_bytes(&pixels, ByteOrder::Rgba) == vec![0x11, 0x22, 0x33, 0x80]);
        assert!(pixels_to_bytes(&pixels, ByteOrder::Bgra) == vec![0x33, 0x22, 0x11, 0x80]);
        assert!(pixels_to_bytes(&pixels, ByteOrder::Rgb) == vec![0x11, 0x22, 0x33]);
        assert!(pixels_to_bytes(&pixels, ByteOrder::Bgr) == vec![0x33, 0x22, 0x11]);
        assert!(abgr_data(&pixels) == vec![0x8033_2211]);
    }

    #[test]
    fn read_back_rgba() {
        let pixels = vec![0x8011_2233, 0xff00_0000, 0x0000_00ff];
        let bytes = pixels_to_bytes(&pixels, ByteOrder::Rgba);

        assert!(bytes_to_pixels(&bytes, ByteOrder::Rgba, 3) == Ok(pixels));
    }

    #[test]
    fn three_byte_formats_are_opaque() {
        assert!(bytes_to_pixels(&[1, 2, 3], ByteOrder::Bgr, 1) == Ok(vec![0xff03_0201]));
    }

    #[test]
    fn reject_short_data() {
        assert!(bytes_to_pixels(&[1, 2, 3], ByteOrder::Rgba, 1) == Err(PixmapError::DataLength { expected: 4, actual: 3 }));
    }

    #[test]
    fn filter_sentinel_from_byte_buffer() {
        let mut buffer = PixelBuffer::from_pixels(vec![0x00ff_ffff, 0xff00_0000], 2, 1, true).unwrap();
        buffer.set_transparent(Some(0x00ff_ffff));

        assert!(convert_to_byte_buffer(&buffer, true) == vec![0, 0, 0, 0, 0, 0, 0, 255]);
        assert!(convert_to_byte_buffer(&buffer, false) == vec![255, 255, 255, 0, 0, 0, 0, 255]);
    }
}
