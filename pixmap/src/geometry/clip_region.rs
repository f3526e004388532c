use super::rect::*;

///
/// Tracks the clipping rectangle and the translation offset applied to drawing operations
///
/// The logical clip is expressed in the caller's coordinates, while the device clip is the area of the pixel buffer
/// that drawing operations are allowed to write to. The device clip always lies inside the buffer.
///
#[derive(Clone, Debug, PartialEq)]
pub struct ClipRegion {
    /// The clip as set by the caller
    def_clip: RectI,

    /// The clip in buffer coordinates
    clip: RectI,

    /// The buffer bounds
    bounds: RectI,

    translate_x: i32,
    translate_y: i32,
}

impl ClipRegion {
    ///
    /// Creates a clip region that covers a whole buffer of the specified size
    ///
    pub fn new(width: i32, height: i32) -> ClipRegion {
        let bounds = RectI::new(0, 0, width.max(0), height.max(0));

        ClipRegion {
            def_clip:       bounds,
            clip:           bounds,
            bounds:         bounds,
            translate_x:    0,
            translate_y:    0,
        }
    }

    ///
    /// True if writes to the device pixel at `(x, y)` are suppressed
    ///
    #[inline]
    pub fn is_outside_clip(&self, x: i32, y: i32) -> bool {
        !self.clip.contains(x, y)
    }

    /// The area of the buffer that can be written to
    #[inline]
    pub fn device_clip(&self) -> RectI {
        self.clip
    }

    /// The clip in caller coordinates
    #[inline]
    pub fn clip_bounds(&self) -> RectI {
        self.def_clip
    }

    /// The current translation offset
    #[inline]
    pub fn translation(&self) -> (i32, i32) {
        (self.translate_x, self.translate_y)
    }

    ///
    /// Converts a point from caller coordinates to buffer coordinates
    ///
    #[inline]
    pub fn to_device(&self, x: i32, y: i32) -> (i32, i32) {
        (x.saturating_add(self.translate_x), y.saturating_add(self.translate_y))
    }

    ///
    /// Adds to the translation offset. The clip moves along with the translation and is clamped to the buffer.
    ///
    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.translate_x    = self.translate_x.saturating_add(dx);
        self.translate_y    = self.translate_y.saturating_add(dy);

        self.def_clip       = self.def_clip.offset(dx, dy);
        self.clip           = self.clip.offset(dx, dy).intersection(&self.bounds);
    }

    ///
    /// Replaces the clip rectangle (the rectangle is in caller coordinates)
    ///
    pub fn set_clip(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.def_clip   = RectI::new(x, y, width, height);
        self.clip       = RectI::new(x, y, width, height).offset(self.translate_x, self.translate_y).intersection(&self.bounds);
    }

    ///
    /// Reduces the clip rectangle to its intersection with another rectangle (in caller coordinates)
    ///
    pub fn clip_rect(&mut self, x: i32, y: i32, width: i32, height: i32) {
        let requested   = RectI::new(x, y, width, height);

        self.def_clip   = self.def_clip.intersection(&requested);
        self.clip       = self.clip.intersection(&requested.offset(self.translate_x, self.translate_y));
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn set_clip_limits_drawable_area() {
        let mut region = ClipRegion::new(8, 8);
        region.set_clip(2, 2, 2, 2);

        assert!(region.is_outside_clip(0, 0));
        assert!(!region.is_outside_clip(2, 2));
        assert!(!region.is_outside_clip(3, 3));
        assert!(region.is_outside_clip(4, 3));
    }

    #[test]
    fn set_clip_is_clamped_to_buffer() {
        let mut region = ClipRegion::new(8, 8);
        region.set_clip(-4, 6, 20, 20);

        assert!(region.device_clip() == RectI::new(0, 6, 8, 2));
        assert!(region.clip_bounds() == RectI::new(-4, 6, 20, 20));
    }

    #[test]
    fn clip_rect_intersects() {
        let mut region = ClipRegion::new(10, 10);
        region.clip_rect(2, 2, 6, 6);
        region.clip_rect(4, 0, 10, 5);

        assert!(region.device_clip() == RectI::new(4, 2, 4, 3));
    }

    #[test]
    fn translate_is_cumulative() {
        let mut region = ClipRegion::new(10, 10);
        region.translate(2, 1);
        region.translate(1, 1);

        assert!(region.translation() == (3, 2));
        assert!(region.to_device(0, 0) == (3, 2));
        assert!(region.device_clip() == RectI::new(3, 2, 7, 8));
    }
}
