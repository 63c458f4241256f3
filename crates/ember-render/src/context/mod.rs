//! The graphics-context collaborator boundary.
//!
//! Everything in this crate draws through [`GraphicsContext`], an object-safe
//! trait implemented by the engine's concrete GPU backend. The trait keeps
//! this layer independent of any particular graphics API; tests drive it with
//! a journaling fake.

mod draw_state;
mod handles;

#[cfg(test)]
pub(crate) mod recording;

use std::rc::Rc;

pub use draw_state::{DrawState, Scale};
pub use handles::{FramebufferId, RenderTargetParts, TargetHandle, TextureId};

use crate::coords::{Rect, TexCoords};
use crate::error::Result;

/// Shared handle to the graphics context.
///
/// The engine is single-threaded (all rendering happens on the thread that
/// owns the context), so plain `Rc` is sufficient. Owning handles keep a
/// clone of this so they can release their resource on drop.
pub type SharedContext = Rc<dyn GraphicsContext>;

/// Backend capable of creating/destroying GPU resources and issuing draws.
///
/// Methods take `&self`; interior mutability is the implementor's concern
/// (GPU APIs are typically internally synchronized for this kind of call).
///
/// The "currently active render target" and the ambient draw state are
/// per-context mutable state. The sanctioned way to change them from the
/// outside is through [`crate::TargetBinder`] and [`crate::DrawStateGuard`].
pub trait GraphicsContext {
    /// Allocates a texture and uploads `pixels` (tightly packed RGBA8,
    /// `width * height * 4` bytes).
    fn create_texture(&self, pixels: &[u8], width: u32, height: u32) -> Result<TextureId>;

    /// Releases a texture. Called at most once per created texture.
    fn destroy_texture(&self, texture: TextureId);

    /// Allocates a texture plus an attached framebuffer making it a valid
    /// draw destination. Creation is atomic: on error, nothing was created.
    fn create_framebuffer(&self, width: u32, height: u32) -> Result<RenderTargetParts>;

    /// Releases a framebuffer (the backing texture is released separately).
    fn destroy_framebuffer(&self, framebuffer: FramebufferId);

    /// Draws the `source` region of `texture` into `dest` on the active
    /// render target, transformed by the ambient [`DrawState`].
    fn draw_quad(&self, texture: TextureId, source: TexCoords, dest: Rect);

    /// The render target draws currently go to.
    fn current_render_target(&self) -> TargetHandle;

    /// Makes `target` the active render target and returns the one that was
    /// active before.
    fn bind_render_target(&self, target: TargetHandle) -> TargetHandle;

    /// Current ambient translation/scale/clip.
    fn draw_state(&self) -> DrawState;

    /// Replaces the ambient translation/scale/clip wholesale.
    fn set_draw_state(&self, state: DrawState);
}
