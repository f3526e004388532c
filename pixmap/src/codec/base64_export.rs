#[cfg(feature="encode_base64")]
mod base64_encoding {
    use super::super::byte_order::*;
    use crate::raster::*;

    use base64::engine::{Engine};
    use base64::engine::general_purpose;

    ///
    /// Encodes the RGBA bytes for a buffer as a base64 string
    ///
    pub fn rgba_base64(buffer: &PixelBuffer) -> String {
        general_purpose::STANDARD.encode(pixels_to_bytes(buffer.pixels(), ByteOrder::Rgba))
    }

    #[cfg(test)]
    mod test {
        use super::*;

        #[test]
        fn encode_single_pixel() {
            let buffer = PixelBuffer::from_pixels(vec![0x8011_2233], 1, 1, true).unwrap();

            // Bytes are 0x11 0x22 0x33 0x80
            assert!(rgba_base64(&buffer) == "ESIzgA==");
        }
    }
}

#[cfg(feature="encode_base64")]
pub use base64_encoding::*;
