use super::Rect;

/// Normalized texture-space rectangle, `[0, 1]` on both axes.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct TexCoords {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl TexCoords {
    /// The entire texture.
    pub const FULL: TexCoords = TexCoords {
        left: 0.0,
        top: 0.0,
        right: 1.0,
        bottom: 1.0,
    };

    /// Converts a pixel-space sub-rectangle of a `tex_width` x `tex_height`
    /// texture into normalized coordinates.
    pub fn from_rect(rect: Rect, tex_width: u32, tex_height: u32) -> Self {
        let left = rect.origin.x as f32 / tex_width as f32;
        let top = rect.origin.y as f32 / tex_height as f32;
        let width = rect.size.width as f32 / tex_width as f32;
        let height = rect.size.height as f32 / tex_height as f32;

        Self {
            left,
            top,
            right: left + width,
            bottom: top + height,
        }
    }
}
