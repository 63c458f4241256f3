use std::ops::Deref;

use super::Texture;
use crate::context::{FramebufferId, SharedContext, TargetHandle};
use crate::error::Result;

/// A texture that is a valid drawing destination.
///
/// Construction goes through [`RenderTargetTexture::new`] only; there is no
/// way to attach a framebuffer to an existing [`Texture`]. Binding it as the
/// active target goes through [`crate::TargetBinder`]. Once drawn into, the
/// contents are rendered like any other texture (this type derefs to
/// [`Texture`] for that).
///
/// Framebuffer and backing texture are released together on drop.
pub struct RenderTargetTexture {
    texture: Texture,
    framebuffer: FramebufferId,
}

impl RenderTargetTexture {
    /// Allocates a `width` x `height` texture with an attached framebuffer.
    ///
    /// Fails with a resource-creation error if the framebuffer cannot be
    /// realized as a draw target; no partial object exists in that case.
    pub fn new(ctx: &SharedContext, width: u32, height: u32) -> Result<Self> {
        let parts = ctx.create_framebuffer(width, height)?;
        log::debug!(
            "created render target {:?}/{:?} ({}x{})",
            parts.texture,
            parts.framebuffer,
            width,
            height
        );
        Ok(Self {
            texture: Texture::from_raw(ctx, parts.texture, width, height),
            framebuffer: parts.framebuffer,
        })
    }

    /// Handle used to bind this target.
    #[inline]
    pub fn target_handle(&self) -> TargetHandle {
        TargetHandle::Offscreen(self.framebuffer)
    }
}

impl Deref for RenderTargetTexture {
    type Target = Texture;

    fn deref(&self) -> &Texture {
        &self.texture
    }
}

impl Drop for RenderTargetTexture {
    fn drop(&mut self) {
        if self.framebuffer.is_none() {
            return;
        }
        // The backing texture is released by the inner Texture's drop.
        self.texture.context().destroy_framebuffer(self.framebuffer);
    }
}
