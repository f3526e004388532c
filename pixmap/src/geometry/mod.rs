mod rect;
mod clip_region;
mod polygon;
mod shape;

pub use rect::*;
pub use clip_region::*;
pub use polygon::*;
pub use shape::*;
