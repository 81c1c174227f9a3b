pub mod image;
pub mod lease;
pub mod primitives;

pub use image::*;
pub use lease::*;
pub use primitives::*;
