//!
//! `flo_pixmap` is a software raster engine that draws into a CPU-resident framebuffer of packed ARGB pixels
//!
//! The main type is `Pixmap`, which owns a pixel buffer together with the state used to draw on it: a clip rectangle
//! and translation, the current colour, an alpha multiplier, a composite mode and an optional XOR mode. Drawing calls
//! rasterize lines, curves, ellipses, arcs, rounded rectangles, polygons and triangles straight into the buffer, and
//! pixmaps can be copied onto each other either 1:1 or resampled to a different size.
//!
//! ```
//! # use flo_pixmap::*;
//! let mut pixmap = Pixmap::new(32, 32, true);
//!
//! pixmap.set_color(0xff00_80ff)
//!     .fill_oval(4, 4, 24, 24)
//!     .set_color(BLACK)
//!     .draw_rect(0, 0, 32, 32);
//!
//! let rgba = pixmap.rgba_bytes();
//! assert!(rgba.len() == 32*32*4);
//! ```
//!
//! Every pixel a drawing call produces is written through the same pipeline: it's discarded if it's outside the clip,
//! then the composite mode decides if the destination pixel can be replaced, then the alpha multiplier and the XOR mode
//! are applied to the stored value. Drawing calls never fail: bad geometry or a closed pixmap just leaves the buffer
//! unchanged.
//!
//! # Features
//!
//! * `render_png` - adds `Pixmap::write_png()` and `Pixmap::to_png_bytes()` (enabled by default)
//! * `encode_base64` - adds `Pixmap::base64()` (enabled by default)
//!

mod error;
mod pixmap;
mod gradation;

/// Packed ARGB pixels, colours and the colour state that's applied to every write
pub mod color;

/// Rectangles, clip regions, polygons and shapes
pub mod geometry;

/// The pixel buffer and the rasterizers that write lines, curves, ellipses, arcs and polygons to it
pub mod raster;

/// Copying and resampling pixels between buffers
pub mod blit;

/// Colour filters that can be applied to a whole pixmap
pub mod filters;

/// Conversions between pixel buffers and byte formats
pub mod codec;

pub use self::error::*;
pub use self::pixmap::*;
pub use self::gradation::*;
pub use self::color::*;
pub use self::geometry::*;
pub use self::blit::{ScaleFilter};
