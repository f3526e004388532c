mod color_filter_trait;
mod tone_filters;
mod mix_filters;

pub use color_filter_trait::*;
pub use tone_filters::*;
pub use mix_filters::*;
