#[cfg(feature="render_png")]
mod png_encoding {
    use super::super::byte_order::*;
    use crate::error::*;
    use crate::raster::*;

    use std::io::{Write, BufWriter};

    ///
    /// Writes a buffer to a stream as an 8-bit RGBA PNG image
    ///
    pub fn write_png<TStream: Write>(buffer: &PixelBuffer, target: TStream) -> Result<(), PixmapError> {
        let mut encoder = png::Encoder::new(BufWriter::new(target), buffer.width() as u32, buffer.height() as u32);

        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header()?;
        writer.write_image_data(&pixels_to_bytes(buffer.pixels(), ByteOrder::Rgba))?;
        writer.finish()?;

        Ok(())
    }

    ///
    /// Encodes a buffer as a PNG file in memory
    ///
    pub fn png_bytes(buffer: &PixelBuffer) -> Result<Vec<u8>, PixmapError> {
        let mut png_data = vec![];
        write_png(buffer, &mut png_data)?;

        Ok(png_data)
    }

    #[cfg(test)]
    mod test {
        use super::*;

        #[test]
        fn png_has_signature() {
            let buffer  = PixelBuffer::from_pixels(vec![0xffff_0000; 4], 2, 2, true).unwrap();
            let png     = png_bytes(&buffer).unwrap();

            assert!(png.starts_with(&[0x89, b'P', b'N', b'G']));
        }
    }
}

#[cfg(feature="render_png")]
pub use png_encoding::*;
