///
/// An integer rectangle, covering the pixels `x..x+width` and `y..y+height`
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct RectI {
    pub x:      i32,
    pub y:      i32,
    pub width:  i32,
    pub height: i32,
}

impl RectI {
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> RectI {
        RectI { x, y, width, height }
    }

    /// The x coordinate just past the right-hand edge (saturating at `i32::MAX`)
    #[inline]
    pub const fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// The y coordinate just past the bottom edge (saturating at `i32::MAX`)
    #[inline]
    pub const fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// True if this rectangle covers no pixels
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    ///
    /// True if the pixel at `(x, y)` lies within this rectangle
    ///
    #[inline]
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    ///
    /// Returns the area shared between this rectangle and another (with a 0 width or height if they don't overlap)
    ///
    pub fn intersection(&self, other: &RectI) -> RectI {
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = self.right().min(other.right());
        let y2 = self.bottom().min(other.bottom());

        RectI {
            x:      x1,
            y:      y1,
            width:  x2.saturating_sub(x1).max(0),
            height: y2.saturating_sub(y1).max(0),
        }
    }

    /// Moves this rectangle by an offset
    #[inline]
    pub const fn offset(&self, dx: i32, dy: i32) -> RectI {
        RectI::new(self.x.saturating_add(dx), self.y.saturating_add(dy), self.width, self.height)
    }
}
