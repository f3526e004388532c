use crate::color::*;
use crate::geometry::*;
use crate::raster::*;

///
/// Describes where a blit copies pixels from and to: the source area starting at `(src_x, src_y)` is copied
/// to the destination area starting at `(dst_x, dst_y)` (in device coordinates)
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlitArea {
    pub dst_x:  i32,
    pub dst_y:  i32,
    pub width:  i32,
    pub height: i32,
    pub src_x:  i32,
    pub src_y:  i32,
}

impl BlitArea {
    ///
    /// Clips this area so that both the destination and the source lie within their buffers and the destination
    /// lies within the device clip
    ///
    pub fn clipped(&self, device_clip: &RectI, src_width: i32, src_height: i32) -> BlitArea {
        let dst_rect    = RectI::new(self.dst_x, self.dst_y, self.width, self.height);
        let src_extent  = RectI::new(self.dst_x.saturating_sub(self.src_x), self.dst_y.saturating_sub(self.src_y), src_width, src_height);
        let visible     = dst_rect.intersection(device_clip).intersection(&src_extent);

        BlitArea {
            dst_x:  visible.x,
            dst_y:  visible.y,
            width:  visible.width,
            height: visible.height,
            src_x:  self.src_x.saturating_add(visible.x.saturating_sub(self.dst_x)),
            src_y:  self.src_y.saturating_add(visible.y.saturating_sub(self.dst_y)),
        }
    }
}

///
/// True if pixels can be copied straight from a source to a destination without looking at them individually
///
#[inline]
fn can_copy_rows(src: &PixelBuffer, state: &ColorState) -> bool {
    src.transparent().is_none()
        && (state.composite() == CompositeMode::Replace || state.composite() == CompositeMode::SourceOver)
        && !state.is_xor_mode()
        && state.base_alpha() == 1.0
}

///
/// Copies pixels from one buffer to another without scaling
///
/// Source pixels that match the source's transparency sentinel are skipped. Other pixels are written through the
/// colour state, so the composite, alpha and XOR settings all apply.
///
pub fn copy_pixels(dst: &mut PixelBuffer, clip: &ClipRegion, state: &ColorState, src: &PixelBuffer, area: BlitArea) {
    let area = area.clipped(&clip.device_clip(), src.width(), src.height());
    if area.width <= 0 || area.height <= 0 || src.is_empty() || dst.is_empty() {
        return;
    }

    let width = area.width as usize;

    if can_copy_rows(src, state) {
        for row in 0..area.height {
            let src_start   = area.src_x as usize;
            let dst_start   = area.dst_x as usize;
            let src_row     = &src.row(area.src_y + row)[src_start..(src_start + width)];

            dst.row_mut(area.dst_y + row)[dst_start..(dst_start + width)].copy_from_slice(src_row);
        }
    } else {
        let mut ctxt = RasterContext::new(dst, clip, state);

        for row in 0..area.height {
            for col in 0..area.width {
                let pixel = src.get(area.src_x + col, area.src_y + row);

                match pixel {
                    Some(pixel) if !src.is_sentinel(pixel)  => { ctxt.write(area.dst_x + col, area.dst_y + row, pixel); }
                    _                                       => { }
                }
            }
        }
    }
}
