use super::pixel_buffer::*;
use crate::color::*;
use crate::geometry::*;

///
/// A surface that the rasterizers can write pixels to
///
/// All coordinates are device coordinates: any translation has already been applied by the caller.
///
pub trait PlotTarget {
    ///
    /// The area that writes can affect. Pixels outside of this rectangle are ignored by `plot`.
    ///
    fn plot_bounds(&self) -> RectI;

    ///
    /// Writes a single pixel
    ///
    fn plot(&mut self, x: i32, y: i32);

    ///
    /// Writes a horizontal run of pixels from `x1` to `x2` inclusive
    ///
    fn plot_span(&mut self, x1: i32, x2: i32, y: i32) {
        let bounds = self.plot_bounds();
        if y < bounds.y || y >= bounds.bottom() { return; }

        for x in x1.max(bounds.x)..=x2.min(bounds.right().saturating_sub(1)) {
            self.plot(x, y);
        }
    }

    ///
    /// Writes a vertical run of pixels from `y1` to `y2` inclusive
    ///
    fn plot_vspan(&mut self, x: i32, y1: i32, y2: i32) {
        let bounds = self.plot_bounds();
        if x < bounds.x || x >= bounds.right() { return; }

        for y in y1.max(bounds.y)..=y2.min(bounds.bottom().saturating_sub(1)) {
            self.plot(x, y);
        }
    }
}

///
/// Writes pixels of a single colour to a buffer, applying the clip region and the colour state
///
/// Every pixel written through this context goes through the same pipeline: pixels outside the device clip are
/// skipped, then the composite mode decides if the destination can be replaced, then the alpha multiplier and
/// XOR mode are applied to the value that's stored.
///
pub struct RasterContext<'a> {
    buffer: &'a mut PixelBuffer,
    clip:   &'a ClipRegion,
    state:  &'a ColorState,
    color:  u32,
}

impl<'a> RasterContext<'a> {
    ///
    /// Creates a context that draws using the current colour of a colour state
    ///
    pub fn new(buffer: &'a mut PixelBuffer, clip: &'a ClipRegion, state: &'a ColorState) -> RasterContext<'a> {
        let color = state.color();
        RasterContext { buffer, clip, state, color }
    }

    ///
    /// Creates a context that draws with an explicit colour instead of the state's colour
    ///
    pub fn with_color(buffer: &'a mut PixelBuffer, clip: &'a ClipRegion, state: &'a ColorState, color: u32) -> RasterContext<'a> {
        RasterContext { buffer, clip, state, color }
    }

    /// The colour this context writes
    #[inline]
    pub fn color(&self) -> u32 {
        self.color
    }

    /// Reads the pixel currently stored at a device position
    #[inline]
    pub fn pixel(&self, x: i32, y: i32) -> Option<u32> {
        self.buffer.get(x, y)
    }

    /// The clip region this context writes through
    #[inline]
    pub fn clip(&self) -> &ClipRegion {
        self.clip
    }

    ///
    /// Writes a specific colour at a device position, returning true if the pixel was changed
    ///
    #[inline]
    pub fn write(&mut self, x: i32, y: i32, color: u32) -> bool {
        if self.clip.is_outside_clip(x, y) {
            return false;
        }

        let state       = self.state;
        let transparent = self.buffer.transparent();
        let idx         = match self.buffer.index_of(x, y) { Some(idx) => idx, None => return false };
        let pixels      = self.buffer.pixels_mut();

        match pixels.get(idx).and_then(|existing| state.resolve(*existing, color, transparent)) {
            Some(new_pixel) => { pixels[idx] = new_pixel; true }
            None            => false,
        }
    }
}

impl<'a> PlotTarget for RasterContext<'a> {
    #[inline]
    fn plot_bounds(&self) -> RectI {
        self.clip.device_clip()
    }

    #[inline]
    fn plot(&mut self, x: i32, y: i32) {
        let color = self.color;
        self.write(x, y, color);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn span_is_clipped() {
        let mut buffer  = PixelBuffer::new(8, 8, true);
        let mut clip    = ClipRegion::new(8, 8);
        let state       = ColorState::new();
        clip.set_clip(2, 2, 4, 4);

        RasterContext::new(&mut buffer, &clip, &state).plot_span(-10, 10, 3);

        let painted = (0..8).filter(|x| buffer.get(*x, 3) == Some(0xffff_ffff)).collect::<Vec<_>>();
        assert!(painted == vec![2, 3, 4, 5], "{:?}", painted);
    }

    #[test]
    fn write_respects_composite() {
        let mut buffer  = PixelBuffer::new(2, 1, true);
        let clip        = ClipRegion::new(2, 1);
        let mut state   = ColorState::new();
        buffer.set(1, 0, 0xff00_0000);
        state.set_composite(CompositeMode::SourceIn);

        let mut ctxt = RasterContext::with_color(&mut buffer, &clip, &state, 0xffff_0000);
        assert!(!ctxt.write(0, 0, 0xffff_0000));
        assert!(ctxt.write(1, 0, 0xffff_0000));
    }
}
