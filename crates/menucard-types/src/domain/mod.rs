pub mod category;
pub mod dish;
pub mod draft;

pub use category::*;
pub use dish::*;
pub use draft::*;
