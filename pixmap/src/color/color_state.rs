use super::color::*;
use super::packed::*;

///
/// Selects which destination pixels a drawing operation is allowed to overwrite
///
/// These modes gate where a primitive is written: they do not blend. Real alpha blending only happens when a pixmap
/// is drawn scaled onto another.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CompositeMode {
    /// Always overwrite the destination
    Replace,

    /// Only overwrite destination pixels that are not the transparency sentinel
    SourceIn,

    /// Only overwrite destination pixels that are the transparency sentinel
    SourceOut,

    /// Always overwrite the destination (same effect as `Replace`)
    SourceOver,
}

impl CompositeMode {
    ///
    /// Converts one of the integer composite codes (-1 = replace, 0 = source in, 1 = source out, 2 = source over)
    ///
    pub fn from_code(code: i32) -> Option<CompositeMode> {
        match code {
            -1  => Some(CompositeMode::Replace),
            0   => Some(CompositeMode::SourceIn),
            1   => Some(CompositeMode::SourceOut),
            2   => Some(CompositeMode::SourceOver),
            _   => None,
        }
    }

    /// The integer code for this composite mode
    pub fn code(&self) -> i32 {
        match self {
            CompositeMode::Replace      => -1,
            CompositeMode::SourceIn     => 0,
            CompositeMode::SourceOut    => 1,
            CompositeMode::SourceOver   => 2,
        }
    }

    ///
    /// True if a pixel may be written over a destination pixel with the specified value
    ///
    #[inline]
    pub fn allows(&self, existing: u32, transparent: Option<u32>) -> bool {
        match self {
            CompositeMode::Replace      => true,
            CompositeMode::SourceOver   => true,
            CompositeMode::SourceIn     => Some(existing) != transparent,
            CompositeMode::SourceOut    => Some(existing) == transparent,
        }
    }
}

impl Default for CompositeMode {
    fn default() -> Self {
        CompositeMode::Replace
    }
}

///
/// The colour and compositing settings that are applied to every pixel a drawing call writes
///
#[derive(Clone, Debug, PartialEq)]
pub struct ColorState {
    /// The current drawing colour, including its alpha byte
    base_color: u32,

    /// Alpha multiplier that replaces the alpha byte of every written pixel while it's not 1.0
    base_alpha: f32,

    /// Where pixels are allowed to be written
    composite: CompositeMode,

    /// True if pixels are combined with the destination using XOR
    xor_mode: bool,

    /// The RGB value that is XORed into every pixel in XOR mode
    xor_rgb: u32,
}

impl Default for ColorState {
    fn default() -> Self {
        ColorState {
            base_color: DEFAULT_COLOR,
            base_alpha: 1.0,
            composite:  CompositeMode::Replace,
            xor_mode:   false,
            xor_rgb:    0,
        }
    }
}

impl ColorState {
    /// Creates the default colour state (opaque white, replace mode, no XOR)
    pub fn new() -> ColorState {
        ColorState::default()
    }

    /// The current drawing colour
    #[inline]
    pub fn color(&self) -> u32 {
        self.base_color
    }

    ///
    /// Sets the drawing colour from a packed ARGB value
    ///
    /// While an alpha multiplier is active, its alpha replaces the alpha byte of the colour
    ///
    pub fn set_color(&mut self, color: u32) {
        if self.base_alpha != 1.0 {
            self.base_color = with_alpha(color, self.alpha_byte());
        } else {
            self.base_color = color;
        }
    }

    /// Sets an opaque drawing colour from 0-255 components
    pub fn set_color_rgb(&mut self, r: u8, g: u8, b: u8) {
        self.set_color(rgb(r, g, b));
    }

    /// Sets the drawing colour from 0-255 components
    pub fn set_color_rgba(&mut self, r: u8, g: u8, b: u8, a: u8) {
        self.set_color(argb(a, r, g, b));
    }

    /// Sets the drawing colour from 0-1 components
    pub fn set_color_f32(&mut self, r: f32, g: f32, b: f32, a: f32) {
        self.set_color(argb(unit_to_byte(a), unit_to_byte(r), unit_to_byte(g), unit_to_byte(b)));
    }

    /// Sets the drawing colour from a colour object
    pub fn set_color_object(&mut self, color: &Color) {
        self.set_color(color.to_argb());
    }

    /// The alpha value of the current colour, in the range 0-1
    #[inline]
    pub fn alpha(&self) -> f32 {
        (alpha_of(self.base_color) as f32) / 255.0
    }

    /// The alpha multiplier
    #[inline]
    pub fn base_alpha(&self) -> f32 {
        self.base_alpha
    }

    ///
    /// Sets the alpha multiplier. Values below 0.01 count as fully transparent and values above 1 are clamped.
    ///
    pub fn set_alpha(&mut self, alpha: f32) {
        self.base_alpha = if alpha < 0.01 {
            0.0
        } else if alpha > 1.0 {
            1.0
        } else {
            alpha
        };

        self.base_color = with_alpha(self.base_color, self.alpha_byte());
    }

    /// The alpha multiplier as a byte
    #[inline]
    fn alpha_byte(&self) -> u8 {
        (255.0 * self.base_alpha.max(0.0).min(1.0)) as u8
    }

    /// The current composite mode
    #[inline]
    pub fn composite(&self) -> CompositeMode {
        self.composite
    }

    /// Changes the composite mode
    pub fn set_composite(&mut self, composite: CompositeMode) {
        self.composite = composite;
    }

    ///
    /// Switches to XOR mode: every written pixel becomes `0xff000000 | (existing ^ new ^ xor_rgb)`
    ///
    pub fn set_xor_mode(&mut self, xor_color: u32) {
        self.xor_mode   = true;
        self.xor_rgb    = xor_color & 0x00ff_ffff;
    }

    /// Switches to XOR mode using a colour object
    pub fn set_xor_color(&mut self, xor_color: &Color) {
        self.set_xor_mode(xor_color.to_rgb());
    }

    /// Leaves XOR mode, so pixels are written directly again
    pub fn set_paint_mode(&mut self) {
        self.xor_mode   = false;
        self.xor_rgb    = 0;
    }

    /// True if XOR mode is active
    #[inline]
    pub fn is_xor_mode(&self) -> bool {
        self.xor_mode
    }

    /// The RGB value mixed into pixels in XOR mode
    #[inline]
    pub fn xor_rgb(&self) -> u32 {
        self.xor_rgb
    }

    ///
    /// Works out the value to store when writing `incoming` over a destination pixel containing `existing`
    ///
    /// Returns `None` if the composite mode does not allow the destination to be written.
    ///
    #[inline]
    pub fn resolve(&self, existing: u32, incoming: u32, transparent: Option<u32>) -> Option<u32> {
        if !self.composite.allows(existing, transparent) {
            return None;
        }

        let incoming = if self.base_alpha != 1.0 {
            with_alpha(incoming, self.alpha_byte())
        } else {
            incoming
        };

        if self.xor_mode {
            Some(0xff00_0000 | ((existing ^ incoming) ^ self.xor_rgb))
        } else {
            Some(incoming)
        }
    }
}
