use std::fmt;

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Kind of GPU resource involved in a creation failure.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ResourceKind {
    Texture,
    RenderTarget,
    Atlas,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResourceKind::Texture => "texture",
            ResourceKind::RenderTarget => "render target",
            ResourceKind::Atlas => "texture atlas",
        };
        f.write_str(name)
    }
}

/// Errors surfaced by the rendering-resource layer.
///
/// Creation failures are propagated as-is and never retried internally;
/// whether to abort startup or degrade is the caller's call.
#[derive(Debug, Error)]
pub enum Error {
    /// GPU allocation or upload failed, or a framebuffer turned out not to be
    /// usable as a draw target. No partial resource exists after this.
    #[error("failed to create {kind}: {reason}")]
    ResourceCreation { kind: ResourceKind, reason: String },

    /// An atlas draw was requested for an index outside `[0, len)`.
    #[error("atlas index {index} out of range (atlas holds {count} regions)")]
    IndexOutOfRange { index: usize, count: usize },
}
