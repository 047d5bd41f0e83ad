// ABOUTME: Pane layout management for the LoTUS-BF research view.
// ABOUTME: Splits a container into proportional panes resized by dragging dividers.

mod engine;
mod gesture;
mod guard;

pub use engine::{LayoutEngine, LayoutError, PaneSpan};
pub use gesture::{clamp_pair, DragGesture, ReleaseReason};
pub use guard::DragGuard;
