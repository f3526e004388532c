use super::pixmap::*;
use crate::blit::*;
use crate::geometry::*;

use log::{trace};

///
/// Copying pixels between pixmaps
///
impl Pixmap {
    ///
    /// Draws the whole of another pixmap with its top-left corner at `(x, y)`
    ///
    pub fn draw_pixmap(&mut self, source: &Pixmap, x: i32, y: i32) -> &mut Self {
        self.draw_pixmap_area(source, x, y, source.width(), source.height(), 0, 0)
    }

    ///
    /// Draws a `width` by `height` area of another pixmap, starting at `(src_x, src_y)` in the source, with its
    /// top-left corner at `(x, y)`
    ///
    /// Source pixels that match the source's transparency sentinel are skipped.
    ///
    pub fn draw_pixmap_area(&mut self, source: &Pixmap, x: i32, y: i32, width: i32, height: i32, src_x: i32, src_y: i32) -> &mut Self {
        if self.closed || source.closed {
            trace!("Ignoring blit involving a closed pixmap");
            return self;
        }

        let (dst_x, dst_y) = self.device(x, y);
        let area = BlitArea { dst_x, dst_y, width, height, src_x, src_y };

        copy_pixels(&mut self.buffer, &self.clip, &self.state, &source.buffer, area);
        self
    }

    ///
    /// Draws the whole of another pixmap scaled to fit a rectangle
    ///
    pub fn draw_pixmap_scaled(&mut self, source: &Pixmap, x: i32, y: i32, width: i32, height: i32) -> &mut Self {
        self.draw_pixmap_region(source, x, y, width, height, 0, 0, source.width(), source.height())
    }

    ///
    /// Draws an area of another pixmap scaled to fit a rectangle
    ///
    /// Areas of the same size are copied directly. Otherwise the source is resampled using the scale filter and
    /// blended over the existing pixels.
    ///
    pub fn draw_pixmap_region(&mut self, source: &Pixmap, x: i32, y: i32, width: i32, height: i32, src_x: i32, src_y: i32, src_width: i32, src_height: i32) -> &mut Self {
        if width == src_width && height == src_height {
            return self.draw_pixmap_area(source, x, y, width, height, src_x, src_y);
        }

        if self.closed || source.closed {
            trace!("Ignoring scaled blit involving a closed pixmap");
            return self;
        }

        let (dst_x, dst_y)  = self.device(x, y);
        let dst_rect        = RectI::new(dst_x, dst_y, width, height);
        let src_rect        = RectI::new(src_x, src_y, src_width, src_height);

        scale_pixels(&mut self.buffer, &self.clip, &self.state, &source.buffer, dst_rect, src_rect, self.scale_filter);
        self
    }

    ///
    /// Moves the pixels in a rectangle by `(dx, dy)` within this pixmap
    ///
    /// Overlapping moves copy the original pixels. Writes go through the clip and the colour state.
    ///
    pub fn copy_area(&mut self, x: i32, y: i32, width: i32, height: i32, dx: i32, dy: i32) -> &mut Self {
        let (x, y) = self.device(x, y);

        let area    = RectI::new(x, y, width, height).intersection(&RectI::new(0, 0, self.width(), self.height()));
        let moved   = (area.y..area.bottom())
            .flat_map(|ypos| (area.x..area.right()).map(move |xpos| (xpos, ypos)))
            .filter_map(|(xpos, ypos)| self.buffer.get(xpos, ypos).map(|pixel| (xpos.saturating_add(dx), ypos.saturating_add(dy), pixel)))
            .collect::<Vec<_>>();

        self.draw(move |ctxt| {
            for (xpos, ypos, pixel) in moved {
                ctxt.write(xpos, ypos, pixel);
            }
        })
    }
}
