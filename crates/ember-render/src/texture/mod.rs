//! Texture ownership and render-target redirection.
//!
//! [`Texture`] owns exactly one GPU texture and releases it on drop.
//! [`RenderTargetTexture`] additionally owns a framebuffer so the texture can
//! be drawn into. Redirection is done purely by constructing a
//! [`TargetBinder`] around a block of drawing code; the guard restores the
//! previous target when it goes out of scope, which nests correctly as long
//! as guards are dropped in reverse construction order (ordinary scoping
//! guarantees this). [`DrawStateGuard`] applies the same discipline to the
//! ambient translation/scale/clip state.

mod binder;
mod owned;
mod state_guard;
mod target;

pub use binder::TargetBinder;
pub use owned::Texture;
pub use state_guard::DrawStateGuard;
pub use target::RenderTargetTexture;
