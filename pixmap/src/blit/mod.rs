mod blend;
mod copy;
mod scale;

pub use blend::*;
pub use copy::*;
pub use scale::*;
