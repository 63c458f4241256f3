use std::rc::Rc;

use super::RenderTargetTexture;
use crate::context::{SharedContext, TargetHandle};

/// Scope guard that redirects drawing to a render target.
///
/// On construction the guard records whichever target is currently active and
/// activates its own; on drop it re-activates the recorded one,
/// unconditionally, including during panic unwinding. Nesting works through
/// ordinary scope nesting: each guard only remembers its own "before"
/// snapshot, so once the innermost live guard drops, the target reverts to
/// what was active just before that guard was built.
///
/// Precondition: guards on the same control path must be dropped in reverse
/// construction order. Scope-bound guards get this for free; storing guards
/// and dropping them out of order breaks the restore chain and is not
/// detected.
pub struct TargetBinder {
    ctx: SharedContext,
    previous: TargetHandle,
}

impl TargetBinder {
    /// Redirects subsequent draws into `target`.
    pub fn bind(ctx: &SharedContext, target: &RenderTargetTexture) -> Self {
        Self::bind_handle(ctx, target.target_handle())
    }

    /// Forces subsequent draws to the screen, regardless of any redirection
    /// currently in effect.
    pub fn bind_screen(ctx: &SharedContext) -> Self {
        Self::bind_handle(ctx, TargetHandle::Screen)
    }

    fn bind_handle(ctx: &SharedContext, target: TargetHandle) -> Self {
        let previous = ctx.bind_render_target(target);
        Self {
            ctx: Rc::clone(ctx),
            previous,
        }
    }
}

impl Drop for TargetBinder {
    fn drop(&mut self) {
        self.ctx.bind_render_target(self.previous);
    }
}
