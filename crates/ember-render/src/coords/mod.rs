//! Geometry types for the rendering layer.
//!
//! Screen space is integer pixels, origin top-left, +X right, +Y down.
//! Texture space is normalized `[0, 1]` coordinates ([`TexCoords`]).

mod point;
mod rect;
mod texcoords;

pub use point::Point;
pub use rect::{Rect, Size};
pub use texcoords::TexCoords;
