mod pixmap;
mod drawing_state;
mod lines;
mod shapes;
mod blit;
mod derived_copies;
mod filters;
mod codec;

pub use pixmap::*;
