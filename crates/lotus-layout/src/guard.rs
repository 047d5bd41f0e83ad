// ABOUTME: Scoped ownership of an active divider drag.
// ABOUTME: Releases the gesture on every exit path, including early returns and unwinds.

use crate::engine::LayoutEngine;
use crate::gesture::ReleaseReason;

/// Holds the engine for the length of one drag.
///
/// Dropping the guard without `finish` or `release` ends the drag with
/// [`ReleaseReason::Unmount`].
#[derive(Debug)]
pub struct DragGuard<'a> {
    engine: &'a mut LayoutEngine,
    released: bool,
}

impl<'a> DragGuard<'a> {
    pub(crate) fn new(engine: &'a mut LayoutEngine) -> Self {
        Self {
            engine,
            released: false,
        }
    }

    pub fn update(&mut self, pointer_x: f64) {
        self.engine.update_drag(pointer_x);
    }

    pub fn proportions(&self) -> &[f64] {
        self.engine.proportions()
    }

    /// Whether the engine accepted the gesture this guard was created for
    pub fn is_active(&self) -> bool {
        self.engine.is_dragging()
    }

    /// End the drag on pointer-up
    pub fn finish(self) {
        self.release(ReleaseReason::PointerUp);
    }

    pub fn release(mut self, reason: ReleaseReason) {
        self.engine.release(reason);
        self.released = true;
    }
}

impl Drop for DragGuard<'_> {
    fn drop(&mut self) {
        if !self.released {
            self.engine.release(ReleaseReason::Unmount);
        }
    }
}
