use super::color_filter_trait::*;
use crate::color::*;

///
/// Multiplies each channel of a pixel (including alpha) by a colour
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MultiplyFilter {
    color: Color,
}

impl MultiplyFilter {
    pub fn with_color(color: Color) -> MultiplyFilter {
        MultiplyFilter { color }
    }
}

impl ColorFilter for MultiplyFilter {
    #[inline]
    fn filter_pixel(&self, pixel: u32) -> u32 {
        Color::from_argb(pixel).multiply(&self.color).to_argb()
    }
}

///
/// Moves the colour channels of each pixel towards a target colour using integer weights
///
/// The weight is out of 256: 256 leaves the pixel unchanged and 0 replaces its colour with the target. The alpha
/// channel of the pixel is preserved.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlendToFilter {
    target: u32,
    weight: u32,
}

impl BlendToFilter {
    pub fn new(target: u32, weight: i32) -> BlendToFilter {
        BlendToFilter {
            target: target,
            weight: weight.max(0).min(256) as u32,
        }
    }
}

impl ColorFilter for BlendToFilter {
    #[inline]
    fn filter_pixel(&self, pixel: u32) -> u32 {
        let inverse = 256 - self.weight;
        let rb      = ((pixel & 0x00ff_00ff) * self.weight + (self.target & 0x00ff_00ff) * inverse) & 0xff00_ff00;
        let g       = ((pixel & 0x0000_ff00) * self.weight + (self.target & 0x0000_ff00) * inverse) & 0x00ff_0000;

        (pixel & 0xff00_0000) | ((rb | g) >> 8)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn multiply_by_white_is_identity() {
        let filter = MultiplyFilter::with_color(Color::WHITE);

        for pixel in [0xff12_3456, 0x80ff_00ff, 0x0000_0001] {
            assert!(filter.filter_pixel(pixel) == pixel, "{:x}", filter.filter_pixel(pixel));
        }
    }

    #[test]
    fn multiply_by_black() {
        assert!(MultiplyFilter::with_color(Color::BLACK).filter_pixel(0xff12_3456) == 0xff00_0000);
    }

    #[test]
    fn blend_to_weights() {
        assert!(BlendToFilter::new(0x00ff_ffff, 256).filter_pixel(0xff12_3456) == 0xff12_3456);
        assert!(BlendToFilter::new(0x00ff_ffff, 0).filter_pixel(0x8012_3456) == 0x80ff_ffff);
        assert!(BlendToFilter::new(0x00ff_ffff, 128).filter_pixel(0xff00_0000) == 0xff7f_7f7f);
    }
}
