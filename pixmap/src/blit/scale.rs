use super::blend::*;
use crate::color::*;
use crate::geometry::*;
use crate::raster::*;

///
/// How source pixels are sampled when a pixmap is drawn at a different size
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScaleFilter {
    /// Weights a single source pixel by the four bilinear weights, which is equivalent to nearest-neighbour sampling
    /// (with a small amount of rounding from the weights)
    SingleSample,

    /// Weights the four neighbouring source pixels, giving a true bilinear filter
    Bilinear,
}

impl Default for ScaleFilter {
    fn default() -> Self {
        ScaleFilter::SingleSample
    }
}

///
/// The four bilinear weights for a fractional position
///
#[inline]
fn weights(x_diff: f32, y_diff: f32) -> [f32; 4] {
    [
        (1.0 - x_diff) * (1.0 - y_diff),
        x_diff * (1.0 - y_diff),
        (1.0 - x_diff) * y_diff,
        x_diff * y_diff,
    ]
}

///
/// Combines four samples using a set of weights
///
#[inline]
fn weighted_pixel(samples: [u32; 4], weights: [f32; 4]) -> u32 {
    let channel = |shift: u32| {
        let total = samples.iter().zip(weights.iter())
            .fold(0.0f32, |total, (sample, weight)| total + (((sample >> shift) & 0xff) as f32) * weight);

        ((total as i32) & 0xff) as u32
    };

    (channel(24) << 24) | (channel(16) << 16) | (channel(8) << 8) | channel(0)
}

///
/// Draws part of a source buffer at a different size onto a destination buffer
///
/// Each destination pixel maps back to the source using a ratio of `(src_size - 1) / dst_size`, and the sampled
/// colour is blended over the existing destination pixel. Source pixels that are the transparency sentinel write the
/// destination's sentinel instead. Writes go through the colour state and are clipped by the clip region.
///
pub fn scale_pixels(dst: &mut PixelBuffer, clip: &ClipRegion, state: &ColorState, src: &PixelBuffer, dst_rect: RectI, src_rect: RectI, filter: ScaleFilter) {
    if dst_rect.is_empty() || src_rect.is_empty() || src.is_empty() || dst.is_empty() {
        return;
    }

    let x_ratio         = ((src_rect.width as f32) - 1.0) / (dst_rect.width as f32);
    let y_ratio         = ((src_rect.height as f32) - 1.0) / (dst_rect.height as f32);
    let dst_transparent = dst.transparent();
    let dst_height      = dst.height();
    let dst_width       = dst.width();

    // Neighbour lookups for the bilinear filter stay inside the source area
    let clamp_x         = |x: i32| x.max(src_rect.x).min(src_rect.right()-1).max(0).min(src.width()-1);
    let clamp_y         = |y: i32| y.max(src_rect.y).min(src_rect.bottom()-1).max(0).min(src.height()-1);

    let mut ctxt        = RasterContext::new(dst, clip, state);

    for row in 0..dst_rect.height {
        let sy      = ((row as f32) * y_ratio) as i32 + src_rect.y;
        let dy      = row + dst_rect.y;
        let y_diff  = (y_ratio * (row as f32) + (src_rect.y as f32)) - (sy as f32);

        if sy < 0 || dy < 0 { continue; }
        if sy >= src.height() || dy >= dst_height { break; }

        for col in 0..dst_rect.width {
            let sx      = ((col as f32) * x_ratio) as i32 + src_rect.x;
            let dx      = col + dst_rect.x;
            let x_diff  = (x_ratio * (col as f32) + (src_rect.x as f32)) - (sx as f32);

            if sx < 0 || dx < 0 { continue; }
            if sx >= src.width() || dx >= dst_width { break; }

            let src_pixel = match src.get(sx, sy) { Some(pixel) => pixel, None => continue };

            if src.is_sentinel(src_pixel) {
                if let Some(transparent) = dst_transparent {
                    ctxt.write(dx, dy, transparent);
                }
                continue;
            }

            let samples = match filter {
                ScaleFilter::SingleSample   => [src_pixel; 4],
                ScaleFilter::Bilinear       => {
                    let (x1, y1) = (clamp_x(sx + 1), clamp_y(sy + 1));
                    let sample = |x, y| src.get(x, y).unwrap_or(src_pixel);

                    [src_pixel, sample(x1, sy), sample(sx, y1), sample(x1, y1)]
                }
            };

            let sampled     = weighted_pixel(samples, weights(x_diff, y_diff));
            let existing    = ctxt.pixel(dx, dy).unwrap_or(TRANSPARENT);
            let blended     = blend_over(sampled, existing, dst_transparent);

            ctxt.write(dx, dy, if blended == 0 { src_pixel } else { blended });
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn weights_sum_to_one() {
        let total: f32 = weights(0.25, 0.75).iter().sum();
        assert!((total - 1.0).abs() < 1e-6);
    }

    #[test]
    fn single_sample_keeps_uniform_color() {
        let src     = PixelBuffer::from_pixels(vec![0xffff_0000; 16], 4, 4, true).unwrap();
        let mut dst = PixelBuffer::new(8, 8, true);
        let clip    = ClipRegion::new(8, 8);
        let state   = ColorState::new();

        scale_pixels(&mut dst, &clip, &state, &src, RectI::new(0, 0, 8, 8), RectI::new(0, 0, 4, 4), ScaleFilter::SingleSample);

        assert!(dst.pixels().iter().all(|pixel| *pixel == 0xffff_0000), "{:x?}", dst.pixels());
    }

    #[test]
    fn bilinear_mixes_neighbours() {
        let src     = PixelBuffer::from_pixels(vec![0xff00_0000, 0xffff_ffff, 0xff00_0000, 0xffff_ffff], 2, 2, true).unwrap();
        let mut dst = PixelBuffer::new(4, 1, true);
        let clip    = ClipRegion::new(4, 1);
        let state   = ColorState::new();

        scale_pixels(&mut dst, &clip, &state, &src, RectI::new(0, 0, 4, 1), RectI::new(0, 0, 2, 2), ScaleFilter::Bilinear);

        let reds = dst.pixels().iter().map(|pixel| red_of(*pixel)).collect::<Vec<_>>();
        assert!(reds[0] == 0, "{:?}", reds);
        assert!(reds[1] > 0 && reds[1] < 255, "{:?}", reds);
        assert!(reds[2] > reds[1], "{:?}", reds);
    }
}
