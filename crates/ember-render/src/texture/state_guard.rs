use std::rc::Rc;

use crate::context::{DrawState, SharedContext};

/// Scope guard over the ambient draw state (translation, scale, clip).
///
/// [`save`](Self::save) captures the current state and restores it on drop;
/// [`reset`](Self::reset) additionally installs the identity state for the
/// guarded scope, so a block can draw with deterministic state regardless of
/// what surrounding code set up. Restore runs on every exit path, panics
/// included. The same LIFO precondition as [`crate::TargetBinder`] applies.
pub struct DrawStateGuard {
    ctx: SharedContext,
    saved: DrawState,
}

impl DrawStateGuard {
    /// Captures the current draw state without changing it.
    pub fn save(ctx: &SharedContext) -> Self {
        Self {
            ctx: Rc::clone(ctx),
            saved: ctx.draw_state(),
        }
    }

    /// Captures the current draw state and resets to defaults: zero
    /// translation, unit scale, unrestricted clip.
    pub fn reset(ctx: &SharedContext) -> Self {
        let guard = Self::save(ctx);
        guard.ctx.set_draw_state(DrawState::default());
        guard
    }
}

impl Drop for DrawStateGuard {
    fn drop(&mut self) {
        self.ctx.set_draw_state(self.saved);
    }
}
