mod pixel_buffer;
mod plot_target;
mod line;
mod curve;
mod ellipse;
mod arc;
mod polygon_fill;

pub use pixel_buffer::*;
pub use plot_target::*;
pub use line::*;
pub use curve::*;
pub use ellipse::*;
pub use arc::*;
pub use polygon_fill::*;
