/// Opaque id of a GPU texture resource.
///
/// `NONE` is the reserved "no resource" value; a live owning handle never
/// carries it, and destroying a handle holding it releases nothing.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct TextureId(pub u32);

impl TextureId {
    pub const NONE: TextureId = TextureId(0);

    #[inline]
    pub fn is_none(self) -> bool {
        self == Self::NONE
    }
}

/// Opaque id of a GPU framebuffer object.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct FramebufferId(pub u32);

impl FramebufferId {
    pub const NONE: FramebufferId = FramebufferId(0);

    #[inline]
    pub fn is_none(self) -> bool {
        self == Self::NONE
    }
}

/// Destination surface for draw operations.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum TargetHandle {
    /// The visible screen buffer.
    #[default]
    Screen,
    /// An offscreen framebuffer backed by a texture.
    Offscreen(FramebufferId),
}

/// Ids produced by a successful [`create_framebuffer`] call: the render
/// target's backing texture and the framebuffer attached to it.
///
/// [`create_framebuffer`]: super::GraphicsContext::create_framebuffer
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct RenderTargetParts {
    pub texture: TextureId,
    pub framebuffer: FramebufferId,
}
