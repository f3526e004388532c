use super::pixmap::*;
use crate::error::*;
use crate::geometry::*;
use crate::raster::*;

///
/// Copies `src` into `dst` with its top-left corner at `(x, y)`, ignoring the clip and the colour state
///
fn place_pixels(dst: &mut PixelBuffer, src: &PixelBuffer, x: i32, y: i32) {
    let visible = RectI::new(x, y, src.width(), src.height())
        .intersection(&RectI::new(0, 0, dst.width(), dst.height()));

    for ypos in visible.y..visible.bottom() {
        for xpos in visible.x..visible.right() {
            if let Some(pixel) = src.get(xpos - x, ypos - y) {
                dst.set(xpos, ypos, pixel);
            }
        }
    }
}

///
/// Operations that create new pixmaps from the contents of an existing one
///
/// The new pixmaps own their own pixels and start with the default drawing state. They keep the alpha flag and
/// transparency sentinel of the pixmap they were made from. These all fail with `PixmapError::Closed` if the source
/// pixmap has been closed.
///
impl Pixmap {
    ///
    /// Creates an empty pixmap with the same format as this one
    ///
    fn derived(&self, width: i32, height: i32) -> Result<Pixmap, PixmapError> {
        if self.closed {
            return Err(PixmapError::Closed);
        }

        let mut buffer = PixelBuffer::new(width.max(0), height.max(0), self.has_alpha());
        buffer.set_transparent(self.buffer.transparent());

        let mut derived = Pixmap::from_buffer(buffer);
        derived.scale_filter = self.scale_filter;

        Ok(derived)
    }

    ///
    /// Creates a copy of this pixmap's pixels
    ///
    pub fn cpy(&self) -> Result<Pixmap, PixmapError> {
        let mut copy = self.derived(self.width(), self.height())?;
        copy.buffer.pixels_mut().copy_from_slice(self.buffer.pixels());

        Ok(copy)
    }

    ///
    /// Copies a rectangle from this pixmap into a new pixmap. Parts of the rectangle outside this pixmap are 0.
    ///
    pub fn copy(&self, x: i32, y: i32, width: i32, height: i32) -> Result<Pixmap, PixmapError> {
        let (x, y)      = self.device(x, y);
        let mut copy    = self.derived(width, height)?;

        place_pixels(&mut copy.buffer, &self.buffer, -x, -y);

        Ok(copy)
    }

    ///
    /// Cuts this pixmap into `columns` by `rows` equally-sized tiles, returned in row-major order
    ///
    /// Each tile is `width / columns` by `height / rows` pixels: any remainder at the right or bottom edge is dropped.
    ///
    pub fn split(&self, columns: i32, rows: i32) -> Result<Vec<Pixmap>, PixmapError> {
        if self.closed {
            return Err(PixmapError::Closed);
        }
        if columns <= 0 || rows <= 0 {
            return Ok(vec![]);
        }

        let tile_width  = self.width() / columns;
        let tile_height = self.height() / rows;

        (0..(columns * rows))
            .map(|idx| {
                let mut tile = self.derived(tile_width, tile_height)?;
                place_pixels(&mut tile.buffer, &self.buffer, -(idx % columns) * tile_width, -(idx / columns) * tile_height);

                Ok(tile)
            })
            .collect()
    }

    ///
    /// Creates a mirrored copy of this pixmap, reversed left-to-right if `mirror_x` is set and upside-down if
    /// `flip_y` is set
    ///
    pub fn mirror(&self, mirror_x: bool, flip_y: bool) -> Result<Pixmap, PixmapError> {
        let width       = self.width();
        let height      = self.height();
        let mut mirror  = self.derived(width, height)?;

        for y in 0..height {
            let src_y = if flip_y { height - 1 - y } else { y };

            for x in 0..width {
                let src_x = if mirror_x { width - 1 - x } else { x };

                if let Some(pixel) = self.buffer.get(src_x, src_y) {
                    mirror.buffer.set(x, y, pixel);
                }
            }
        }

        Ok(mirror)
    }

    /// Creates a copy of this pixmap reversed left-to-right
    #[inline]
    pub fn mirror_horizontal(&self) -> Result<Pixmap, PixmapError> {
        self.mirror(true, false)
    }

    /// Creates an upside-down copy of this pixmap
    #[inline]
    pub fn flip_vertical(&self) -> Result<Pixmap, PixmapError> {
        self.mirror(false, true)
    }

    ///
    /// Makes this pixmap symmetrical by reflecting its left half onto its right half
    ///
    pub fn mirror_x_in_place(&mut self) -> &mut Self {
        let width   = self.width();
        let height  = self.height();

        self.draw(|ctxt| {
            for y in 0..height {
                for x in 0..(width / 2) {
                    if let Some(pixel) = ctxt.pixel(x, y) {
                        ctxt.write(width - 1 - x, y, pixel);
                    }
                }
            }
        })
    }

    ///
    /// Makes this pixmap symmetrical by reflecting its top half onto its bottom half
    ///
    pub fn mirror_y_in_place(&mut self) -> &mut Self {
        let width   = self.width();
        let height  = self.height();

        self.draw(|ctxt| {
            for y in 0..(height / 2) {
                for x in 0..width {
                    if let Some(pixel) = ctxt.pixel(x, y) {
                        ctxt.write(x, height - 1 - y, pixel);
                    }
                }
            }
        })
    }

    ///
    /// Creates a copy of this pixmap scaled to a new size
    ///
    pub fn resize(&self, width: i32, height: i32) -> Result<Pixmap, PixmapError> {
        if width == self.width() && height == self.height() {
            return self.cpy();
        }

        let mut resized = self.derived(width, height)?;
        resized.draw_pixmap_scaled(self, 0, 0, width, height);

        Ok(resized)
    }

    ///
    /// Copies the part of a rectangle that lies within this pixmap into a new pixmap
    ///
    pub fn crop(&self, x: i32, y: i32, width: i32, height: i32) -> Result<Pixmap, PixmapError> {
        let (x, y)  = self.device(x, y);
        let area    = RectI::new(x, y, width, height).intersection(&RectI::new(0, 0, self.width(), self.height()));

        let mut cropped = self.derived(area.width, area.height)?;
        place_pixels(&mut cropped.buffer, &self.buffer, -area.x, -area.y);

        Ok(cropped)
    }

    ///
    /// Creates a new pixmap with another pixmap placed to the right of this one (or to the left if `other_first`
    /// is set)
    ///
    /// The result is as tall as the taller of the two. Any gap below the shorter pixmap is filled with the
    /// transparency sentinel (or 0 if there is none).
    ///
    pub fn join_horizontal(&self, other: &Pixmap, other_first: bool) -> Result<Pixmap, PixmapError> {
        if other.closed {
            return Err(PixmapError::Closed);
        }

        let (first, second) = if other_first { (other, self) } else { (self, other) };
        let mut joined      = self.derived(first.width() + second.width(), first.height().max(second.height()))?;
        let gap             = joined.buffer.transparent().unwrap_or(0);

        joined.buffer.pixels_mut().iter_mut().for_each(|pixel| *pixel = gap);
        place_pixels(&mut joined.buffer, &first.buffer, 0, 0);
        place_pixels(&mut joined.buffer, &second.buffer, first.width(), 0);

        Ok(joined)
    }

    ///
    /// Creates a new pixmap with another pixmap placed below this one (or above if `other_first` is set)
    ///
    /// The result is as wide as the wider of the two, with any gap filled as for `join_horizontal`.
    ///
    pub fn join_vertical(&self, other: &Pixmap, other_first: bool) -> Result<Pixmap, PixmapError> {
        if other.closed {
            return Err(PixmapError::Closed);
        }

        let (first, second) = if other_first { (other, self) } else { (self, other) };
        let mut joined      = self.derived(first.width().max(second.width()), first.height() + second.height())?;
        let gap             = joined.buffer.transparent().unwrap_or(0);

        joined.buffer.pixels_mut().iter_mut().for_each(|pixel| *pixel = gap);
        place_pixels(&mut joined.buffer, &first.buffer, 0, 0);
        place_pixels(&mut joined.buffer, &second.buffer, 0, first.height());

        Ok(joined)
    }
}
