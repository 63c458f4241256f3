use std::rc::Rc;

use crate::context::{SharedContext, TextureId};
use crate::coords::{Point, Rect, Size, TexCoords};
use crate::data::Image;
use crate::error::Result;

/// Owning handle over a GPU texture.
///
/// Exactly one `Texture` refers to a given GPU resource; the type is
/// deliberately not `Clone`, so ownership can only move. Dropping the final
/// owner releases the resource through the context. Draw methods are
/// read-only with respect to the handle; they only emit draw commands.
pub struct Texture {
    ctx: SharedContext,
    id: TextureId,
    width: u32,
    height: u32,
}

impl Texture {
    /// Allocates a texture sized to `image` and uploads its pixels.
    pub fn new(ctx: &SharedContext, image: &Image) -> Result<Self> {
        let id = ctx.create_texture(image.as_bytes(), image.width(), image.height())?;
        log::debug!(
            "created texture {:?} ({}x{})",
            id,
            image.width(),
            image.height()
        );
        Ok(Self::from_raw(ctx, id, image.width(), image.height()))
    }

    /// Wraps an id the context already allocated (render-target path).
    pub(crate) fn from_raw(ctx: &SharedContext, id: TextureId, width: u32, height: u32) -> Self {
        Self {
            ctx: Rc::clone(ctx),
            id,
            width,
            height,
        }
    }

    pub(crate) fn context(&self) -> &SharedContext {
        &self.ctx
    }

    #[inline]
    pub fn id(&self) -> TextureId {
        self.id
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Draws the entire texture at `position`, unscaled.
    pub fn render(&self, position: Point) {
        self.render_region(position, Rect::new(0, 0, self.width, self.height));
    }

    /// Draws the `source` sub-rectangle (texture-local pixels) at `position`.
    pub fn render_region(&self, position: Point, source: Rect) {
        let dest = Rect::from_origin_size(position, source.size);
        self.ctx.draw_quad(
            self.id,
            TexCoords::from_rect(source, self.width, self.height),
            dest,
        );
    }

    /// Draws the entire texture stretched to fill `dest`.
    pub fn render_scaled(&self, dest: Rect) {
        self.ctx.draw_quad(self.id, TexCoords::FULL, dest);
    }
}

impl Drop for Texture {
    fn drop(&mut self) {
        // A handle carrying the sentinel owns nothing.
        if self.id.is_none() {
            return;
        }
        log::debug!("destroying texture {:?}", self.id);
        self.ctx.destroy_texture(self.id);
    }
}
