use crate::coords::{Point, Rect};

/// Per-axis scale factor applied to all draws.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Scale {
    pub x: f32,
    pub y: f32,
}

impl Scale {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Default for Scale {
    /// Unit scale.
    fn default() -> Self {
        Self { x: 1.0, y: 1.0 }
    }
}

/// Ambient draw state of the graphics context.
///
/// The default is the identity state: zero translation, unit scale, no
/// clipping. [`crate::DrawStateGuard::reset`] installs exactly this.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct DrawState {
    pub translation: Point,
    pub scale: Scale,
    /// `None` means unrestricted.
    pub clip: Option<Rect>,
}
