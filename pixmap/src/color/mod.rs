mod packed;
mod color;
mod color_state;

pub use packed::*;
pub use color::*;
pub use color_state::*;
