mod byte_order;
mod png_export;
mod base64_export;

pub use byte_order::*;
pub use png_export::*;
pub use base64_export::*;
