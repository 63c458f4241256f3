//! CPU-side image data consumed by the rendering layer.

mod color;
mod image;
mod load;

pub use color::Color;
pub use image::Image;
pub use load::load_image;
