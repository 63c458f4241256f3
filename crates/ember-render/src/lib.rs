//! Ember rendering-resource layer.
//!
//! This crate owns the lifetime of GPU texture resources and the discipline
//! around redirecting draws to offscreen targets:
//! - [`Texture`]: move-only owning handle over a GPU texture
//! - [`RenderTargetTexture`]: a texture usable as a drawing destination
//! - [`TargetBinder`] / [`DrawStateGuard`]: scope guards that restore the
//!   previously active target / draw state on exit
//! - [`TextureAtlas`]: many small images packed into one composite texture
//!
//! The actual GPU backend is behind the [`context::GraphicsContext`] trait;
//! this crate never talks to a graphics API directly.

pub mod atlas;
pub mod context;
pub mod coords;
pub mod data;
pub mod error;
pub mod logging;
pub mod texture;

pub use atlas::TextureAtlas;
pub use error::{Error, Result};
pub use texture::{DrawStateGuard, RenderTargetTexture, TargetBinder, Texture};
