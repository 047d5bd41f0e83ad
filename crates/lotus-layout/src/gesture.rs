// ABOUTME: Snapshot of a single divider drag and the minimum-width clamp.
// ABOUTME: Every recomputation reads the snapshot, never the previous move.

use std::fmt;

/// Why a drag gesture ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReleaseReason {
    /// Pointer released anywhere in the viewport
    PointerUp,
    /// Host cancelled the pointer stream
    PointerCancel,
    /// Pointer capture was taken away mid-drag
    CaptureLost,
    /// Window lost focus mid-drag
    WindowBlur,
    /// Host view went away mid-drag
    Unmount,
    /// A new drag started before this one was released
    Replaced,
}

impl fmt::Display for ReleaseReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReleaseReason::PointerUp => "pointer up",
            ReleaseReason::PointerCancel => "pointer cancel",
            ReleaseReason::CaptureLost => "capture lost",
            ReleaseReason::WindowBlur => "window blur",
            ReleaseReason::Unmount => "unmount",
            ReleaseReason::Replaced => "replaced",
        };
        f.write_str(name)
    }
}

/// Fixed reference frame for one pointer-down to pointer-up interaction.
///
/// Pixel widths are taken once from the proportions in effect when the drag
/// starts. The container width is not re-measured until the next gesture.
#[derive(Debug, Clone, PartialEq)]
pub struct DragGesture {
    divider: usize,
    start_x: f64,
    container_width: f64,
    start_widths: Vec<f64>,
    pub(crate) degraded_reported: bool,
}

impl DragGesture {
    pub(crate) fn capture(
        divider: usize,
        start_x: f64,
        container_width: f64,
        proportions: &[f64],
    ) -> Self {
        let start_widths = proportions
            .iter()
            .map(|p| p / 100.0 * container_width)
            .collect();
        Self {
            divider,
            start_x,
            container_width,
            start_widths,
            degraded_reported: false,
        }
    }

    /// Index of the pane left of the dragged divider
    pub fn divider(&self) -> usize {
        self.divider
    }

    pub fn start_x(&self) -> f64 {
        self.start_x
    }

    pub fn container_width(&self) -> f64 {
        self.container_width
    }

    /// Pixel widths of all panes at gesture start
    pub fn start_widths(&self) -> &[f64] {
        &self.start_widths
    }

    /// Clamped pixel widths of the two panes adjacent to the divider when the
    /// pointer sits at `pointer_x`.
    ///
    /// Travel is capped at the pair's combined width; any pointer further out
    /// resolves the same as one at that distance.
    pub fn resolve(&self, pointer_x: f64, min_width: f64) -> (f64, f64) {
        let start_left = self.start_widths[self.divider];
        let start_right = self.start_widths[self.divider + 1];
        let span = start_left + start_right;
        let dx = (pointer_x - self.start_x).clamp(-span, span);
        clamp_pair(start_left + dx, start_right - dx, min_width)
    }
}

/// One-pass minimum-width clamp for an adjacent pane pair.
///
/// The pair's sum is preserved. When the sum is below `2 * min_width` both
/// floors cannot hold and `left` ends up under the floor.
pub fn clamp_pair(mut left: f64, mut right: f64, min_width: f64) -> (f64, f64) {
    if left < min_width {
        right -= min_width - left;
        left = min_width;
    }
    if right < min_width {
        left -= min_width - right;
        right = min_width;
    }
    (left, right)
}
