use super::color_filter_trait::*;
use crate::color::*;

///
/// Converts pixels towards their luminance
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GreyScaleFilter {
    mix: f32,
}

impl GreyScaleFilter {
    /// Creates a greyscale filter. `mix` is how far to move towards grey (0 = unchanged, 1 = fully grey).
    pub fn with_mix(mix: f32) -> GreyScaleFilter {
        GreyScaleFilter { mix: clamp_mix(mix) }
    }
}

impl ColorFilter for GreyScaleFilter {
    #[inline]
    fn filter_pixel(&self, pixel: u32) -> u32 {
        let [r, g, b, a]    = rgba_components(pixel);
        let grey            = luminance(r, g, b);
        let channel         = |c: u8| clamp_to_byte(mix_value(c as f32, grey, self.mix));

        argb(a, channel(r), channel(g), channel(b))
    }
}

///
/// Tints pixels with a sepia tone
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SepiaFilter {
    mix: f32,
}

impl SepiaFilter {
    pub fn with_mix(mix: f32) -> SepiaFilter {
        SepiaFilter { mix: clamp_mix(mix) }
    }
}

impl ColorFilter for SepiaFilter {
    fn filter_pixel(&self, pixel: u32) -> u32 {
        let [r, g, b, a]    = rgba_components(pixel);
        let (r, g, b)       = ((r as f32) / 255.0, (g as f32) / 255.0, (b as f32) / 255.0);

        let nr = mix_value(r, 0.393 * r + 0.769 * g + 0.189 * b, self.mix);
        let ng = mix_value(g, 0.349 * r + 0.686 * g + 0.168 * b, self.mix);
        let nb = mix_value(b, 0.272 * r + 0.534 * g + 0.131 * b, self.mix);

        argb(a, unit_to_byte(nr), unit_to_byte(ng), unit_to_byte(nb))
    }
}

///
/// Inverts the colour channels of pixels (the alpha channel is left alone)
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InvertFilter {
    mix: f32,
}

impl InvertFilter {
    pub fn with_mix(mix: f32) -> InvertFilter {
        InvertFilter { mix: clamp_mix(mix) }
    }
}

impl ColorFilter for InvertFilter {
    #[inline]
    fn filter_pixel(&self, pixel: u32) -> u32 {
        let [r, g, b, a]    = rgba_components(pixel);
        let channel         = |c: u8| clamp_to_byte(mix_value(c as f32, (255 - c) as f32, self.mix));

        argb(a, channel(r), channel(g), channel(b))
    }
}

///
/// Turns pixels white if their luminance is above a level and black otherwise
///
/// The level always has its lower 7 bits set, so the effective threshold is either 127 or 255.
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThresholdFilter {
    level: i32,
}

impl ThresholdFilter {
    pub fn with_level(level: i32) -> ThresholdFilter {
        ThresholdFilter { level: level | 127 }
    }

    /// The level that luminance is compared against
    pub fn level(&self) -> i32 {
        self.level
    }
}

impl ColorFilter for ThresholdFilter {
    #[inline]
    fn filter_pixel(&self, pixel: u32) -> u32 {
        let [r, g, b, a]    = rgba_components(pixel);
        let value           = if luminance(r, g, b) > (self.level as f32) { 255 } else { 0 };

        argb(a, value, value, value)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn full_greyscale_uses_luminance() {
        let grey = GreyScaleFilter::with_mix(1.0).filter_pixel(0xffff_0000);

        // 0.299 * 255 = 76.2
        assert!(grey == 0xff4c_4c4c, "{:x}", grey);
    }

    #[test]
    fn zero_mix_is_identity() {
        for pixel in [0xff12_3456, 0x80ff_00ff, 0xff00_0000] {
            assert!(GreyScaleFilter::with_mix(0.0).filter_pixel(pixel) == pixel);
            assert!(InvertFilter::with_mix(0.0).filter_pixel(pixel) == pixel);
            assert!(SepiaFilter::with_mix(0.0).filter_pixel(pixel) == pixel);
        }
    }

    #[test]
    fn invert_keeps_alpha() {
        assert!(InvertFilter::with_mix(1.0).filter_pixel(0x80ff_0010) == 0x8000_ffef);
    }

    #[test]
    fn sepia_white_saturates() {
        assert!(SepiaFilter::with_mix(1.0).filter_pixel(0xffff_ffff) == 0xffff_ffef);
    }

    #[test]
    fn threshold_level_is_widened() {
        let filter = ThresholdFilter::with_level(10);

        assert!(filter.level() == 127);
        assert!(filter.filter_pixel(0xffc8_c8c8) == 0xffff_ffff);
        assert!(filter.filter_pixel(0xff64_6464) == 0xff00_0000);
    }
}
