// ABOUTME: Proportional pane layout with divider dragging.
// ABOUTME: Keeps pane percentages summing to 100 and panes above a pixel floor.

use lotus_core::{ConfigError, LayoutConfig};

use crate::gesture::{DragGesture, ReleaseReason};
use crate::guard::DragGuard;

#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("Invalid layout: {0}")]
    Invalid(#[from] ConfigError),
}

/// Horizontal extent of one pane in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaneSpan {
    pub index: usize,
    pub x: f64,
    pub width: f64,
}

/// Ordered pane proportions plus at most one active divider drag.
///
/// Proportions are percentages of the container width. Only the two panes
/// beside the dragged divider change during a gesture; every other pane keeps
/// its stored value, and the right pane of the pair is derived from the rest
/// so the total never drifts from 100.
#[derive(Debug)]
pub struct LayoutEngine {
    proportions: Vec<f64>,
    min_pane_width: f64,
    gesture: Option<DragGesture>,
}

impl LayoutEngine {
    /// Three panes at the default 28/44/28 split with a 240px floor
    pub fn new() -> Self {
        let config = LayoutConfig::default();
        Self {
            proportions: config.proportions,
            min_pane_width: config.min_pane_width,
            gesture: None,
        }
    }

    pub fn from_config(config: &LayoutConfig) -> Result<Self, LayoutError> {
        config.validate()?;
        Ok(Self {
            proportions: config.proportions.clone(),
            min_pane_width: config.min_pane_width,
            gesture: None,
        })
    }

    pub fn with_proportions(
        proportions: Vec<f64>,
        min_pane_width: f64,
    ) -> Result<Self, LayoutError> {
        Self::from_config(&LayoutConfig {
            proportions,
            min_pane_width,
        })
    }

    /// Current pane percentages, left to right
    pub fn proportions(&self) -> &[f64] {
        &self.proportions
    }

    pub fn pane_count(&self) -> usize {
        self.proportions.len()
    }

    pub fn min_pane_width(&self) -> f64 {
        self.min_pane_width
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_some()
    }

    pub fn active_gesture(&self) -> Option<&DragGesture> {
        self.gesture.as_ref()
    }

    /// Start dragging `divider` (the pane index to its left).
    ///
    /// An out-of-range divider is clamped to the last one. A container width
    /// that is not a positive number leaves no gesture active. A gesture that is
    /// still running is released first.
    pub fn begin_drag(&mut self, divider: usize, pointer_x: f64, container_width: f64) {
        if !container_width.is_finite() || container_width <= 0.0 {
            tracing::warn!("Ignoring drag on unusable container width {}", container_width);
            return;
        }
        if !pointer_x.is_finite() {
            tracing::warn!("Ignoring drag at non-finite pointer position");
            return;
        }

        let last = self.proportions.len() - 2;
        let divider = if divider > last {
            tracing::warn!("Divider {} out of range, using {}", divider, last);
            last
        } else {
            divider
        };

        if self.gesture.is_some() {
            tracing::warn!("Drag started while another was active");
            self.release(ReleaseReason::Replaced);
        }

        tracing::debug!(
            divider,
            pointer_x,
            container_width,
            "Drag started"
        );
        self.gesture = Some(DragGesture::capture(
            divider,
            pointer_x,
            container_width,
            &self.proportions,
        ));
    }

    /// Recompute the dragged pair for the pointer at `pointer_x`.
    ///
    /// The result depends only on the gesture snapshot and `pointer_x`, so
    /// skipped or coalesced moves give the same layout. Does nothing without an
    /// active gesture.
    pub fn update_drag(&mut self, pointer_x: f64) {
        let Some(gesture) = self.gesture.as_mut() else {
            return;
        };
        if !pointer_x.is_finite() {
            return;
        }

        let min = self.min_pane_width;
        let (left, right) = gesture.resolve(pointer_x, min);
        let i = gesture.divider();

        let untouched: f64 = self
            .proportions
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != i && *j != i + 1)
            .map(|(_, p)| *p)
            .sum();
        let pair = (100.0 - untouched).max(0.0);

        let first = left / gesture.container_width() * 100.0;
        if !first.is_finite() {
            tracing::warn!("Dropping drag update that resolved to {}", first);
            return;
        }
        let first = first.clamp(0.0, pair);
        let second = (100.0 - untouched - first).max(0.0);
        self.proportions[i] = first;
        self.proportions[i + 1] = second;

        if left < min && !gesture.degraded_reported {
            tracing::warn!(
                "Container too narrow: pane {} is {:.1}px, below the {}px floor",
                i,
                left.max(0.0),
                min
            );
            gesture.degraded_reported = true;
        }
        tracing::trace!(pointer_x, first, second, "Drag updated");
    }

    /// Release the gesture on pointer-up. Safe to call with no gesture.
    pub fn end_drag(&mut self) {
        self.release(ReleaseReason::PointerUp);
    }

    /// Release the gesture for any reason, keeping the last recomputed layout.
    ///
    /// Returns whether a gesture was active.
    pub fn release(&mut self, reason: ReleaseReason) -> bool {
        match self.gesture.take() {
            Some(gesture) => {
                tracing::debug!(
                    divider = gesture.divider(),
                    %reason,
                    "Drag released"
                );
                true
            }
            None => false,
        }
    }

    /// Start a drag owned by the returned guard, which releases it on drop.
    pub fn drag(
        &mut self,
        divider: usize,
        pointer_x: f64,
        container_width: f64,
    ) -> DragGuard<'_> {
        self.begin_drag(divider, pointer_x, container_width);
        DragGuard::new(self)
    }

    /// Pixel extent of every pane for a container `container_width` wide
    pub fn pane_spans(&self, container_width: f64) -> Vec<PaneSpan> {
        let width = if container_width.is_finite() {
            container_width.max(0.0)
        } else {
            0.0
        };
        let mut x = 0.0;
        self.proportions
            .iter()
            .enumerate()
            .map(|(index, p)| {
                let span = PaneSpan {
                    index,
                    x,
                    width: p / 100.0 * width,
                };
                x += span.width;
                span
            })
            .collect()
    }

    /// Divider whose boundary lies within `tolerance` pixels of `x`, nearest first
    pub fn divider_at(&self, x: f64, container_width: f64, tolerance: f64) -> Option<usize> {
        let spans = self.pane_spans(container_width);
        spans[..spans.len() - 1]
            .iter()
            .map(|span| (span.index, (span.x + span.width - x).abs()))
            .filter(|(_, distance)| *distance <= tolerance)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(index, _)| index)
    }
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}
