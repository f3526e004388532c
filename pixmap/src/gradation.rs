use crate::color::*;
use crate::pixmap::*;

use log::{debug};

use std::collections::{HashMap};

/// The alpha used by gradations when no other value is supplied
pub const DEFAULT_GRADATION_ALPHA: u8 = 125;

///
/// Identifies a gradation in a `GradationCache`
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GradationKey {
    /// The colour at the start of the ramp (the alpha byte is ignored)
    pub start:  u32,

    /// The colour at the end of the ramp (the alpha byte is ignored)
    pub end:    u32,

    pub width:  i32,
    pub height: i32,

    /// The alpha byte of every pixel in the ramp
    pub alpha:  u8,
}

///
/// A colour ramp between two colours, which can be drawn horizontally or vertically
///
/// The ramp pixmaps are only created the first time they're drawn.
///
#[derive(Clone, Debug)]
pub struct Gradation {
    key:        GradationKey,
    horizontal: Option<Pixmap>,
    vertical:   Option<Pixmap>,
}

///
/// The colour at step `pos` of a ramp with `steps` steps
///
fn ramp_color(key: &GradationKey, pos: i32, steps: i32) -> u32 {
    if steps <= 0 {
        return with_alpha(key.start, key.alpha);
    }

    let pos     = pos as u32;
    let steps   = steps as u32;
    let channel = |shift: u32| {
        let start   = (key.start >> shift) & 0xff;
        let end     = (key.end >> shift) & 0xff;

        ((start * (steps - pos) / steps + end * pos / steps) & 0xff) << shift
    };

    ((key.alpha as u32) << 24) | channel(16) | channel(8) | channel(0)
}

impl Gradation {
    pub fn new(key: GradationKey) -> Gradation {
        Gradation { key, horizontal: None, vertical: None }
    }

    /// The parameters for this gradation
    #[inline]
    pub fn key(&self) -> &GradationKey {
        &self.key
    }

    ///
    /// The pixmap for the left-to-right version of this ramp
    ///
    pub fn horizontal(&mut self) -> &Pixmap {
        let key = self.key;

        self.horizontal.get_or_insert_with(|| {
            let mut pixmap = Pixmap::new(key.width, key.height, true);

            for x in 0..key.width {
                pixmap.set_color(ramp_color(&key, x, key.width))
                    .draw_line(x, 0, x, key.height - 1);
            }

            pixmap
        })
    }

    ///
    /// The pixmap for the top-to-bottom version of this ramp
    ///
    pub fn vertical(&mut self) -> &Pixmap {
        let key = self.key;

        self.vertical.get_or_insert_with(|| {
            let mut pixmap = Pixmap::new(key.width, key.height, true);

            for y in 0..key.height {
                pixmap.set_color(ramp_color(&key, y, key.height))
                    .draw_line(0, y, key.width - 1, y);
            }

            pixmap
        })
    }

    ///
    /// Draws this gradation onto a pixmap with the colour changing from left to right
    ///
    pub fn draw_width(&mut self, target: &mut Pixmap, x: i32, y: i32) {
        target.draw_pixmap(self.horizontal(), x, y);
    }

    ///
    /// Draws this gradation onto a pixmap with the colour changing from top to bottom
    ///
    pub fn draw_height(&mut self, target: &mut Pixmap, x: i32, y: i32) {
        target.draw_pixmap(self.vertical(), x, y);
    }
}

///
/// Stores gradations so that each one is only generated once
///
#[derive(Clone, Debug, Default)]
pub struct GradationCache {
    gradations: HashMap<GradationKey, Gradation>,
}

impl GradationCache {
    pub fn new() -> GradationCache {
        GradationCache::default()
    }

    ///
    /// Retrieves the gradation with the specified parameters, creating it if it isn't in the cache yet
    ///
    pub fn gradation(&mut self, start: u32, end: u32, width: i32, height: i32, alpha: u8) -> &mut Gradation {
        let key = GradationKey { start, end, width, height, alpha };

        self.gradations.entry(key).or_insert_with(|| {
            debug!("Creating {}x{} gradation from {:08x} to {:08x}", width, height, start, end);
            Gradation::new(key)
        })
    }

    /// Removes every gradation from this cache
    pub fn clear(&mut self) {
        self.gradations.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.gradations.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.gradations.is_empty()
    }
}
