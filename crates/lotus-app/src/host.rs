// ABOUTME: Hosting view that routes pointer and window events to the layout engine.
// ABOUTME: Owns the measured container width and reports the layout after each event.

use lotus_core::{HostSettings, PaneRole};
use lotus_layout::{LayoutEngine, ReleaseReason};
use serde::Serialize;

use crate::trace::PointerEvent;

/// Layout as rendered after one event
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub event: &'static str,
    pub dragging: bool,
    pub proportions: Vec<f64>,
    pub widths: Vec<f64>,
}

pub struct Host {
    layout: LayoutEngine,
    container_width: f64,
    divider_width: f64,
}

impl Host {
    pub fn new(layout: LayoutEngine, settings: &HostSettings) -> Self {
        Self {
            layout,
            container_width: settings.container_width,
            divider_width: settings.divider_width,
        }
    }

    pub fn layout(&self) -> &LayoutEngine {
        &self.layout
    }

    pub fn container_width(&self) -> f64 {
        self.container_width
    }

    pub fn handle(&mut self, event: PointerEvent) -> Frame {
        match event {
            PointerEvent::Down { x, divider } => {
                let hit = divider.or_else(|| {
                    self.layout
                        .divider_at(x, self.container_width, self.divider_width / 2.0)
                });
                match hit {
                    Some(divider) => {
                        self.layout.begin_drag(divider, x, self.container_width);
                        if let Some(label) = self
                            .layout
                            .active_gesture()
                            .and_then(|g| PaneRole::from_index(g.divider()))
                            .and_then(|role| role.divider_label())
                        {
                            tracing::debug!("{} grabbed at {}", label, x);
                        }
                    }
                    None => tracing::debug!("Pointer down at {} is not on a divider", x),
                }
            }
            PointerEvent::Move { x } => self.layout.update_drag(x),
            PointerEvent::Up => self.layout.end_drag(),
            PointerEvent::Cancel => {
                self.layout.release(ReleaseReason::PointerCancel);
            }
            PointerEvent::CaptureLost => {
                self.layout.release(ReleaseReason::CaptureLost);
            }
            PointerEvent::Blur => {
                self.layout.release(ReleaseReason::WindowBlur);
            }
            PointerEvent::Resize { width } => {
                if width.is_finite() && width > 0.0 {
                    tracing::debug!("Container resized to {}px", width);
                    self.container_width = width;
                } else {
                    tracing::warn!("Ignoring container resize to {}", width);
                }
            }
        }
        self.frame(event.name())
    }

    /// Tear down the view, releasing any drag still in flight
    pub fn unmount(&mut self) -> bool {
        let released = self.layout.release(ReleaseReason::Unmount);
        if released {
            tracing::info!("Released drag left open at end of trace");
        }
        released
    }

    fn frame(&self, event: &'static str) -> Frame {
        Frame {
            event,
            dragging: self.layout.is_dragging(),
            proportions: self.layout.proportions().to_vec(),
            widths: self
                .layout
                .pane_spans(self.container_width)
                .iter()
                .map(|span| span.width)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn host(width: f64) -> Host {
        let settings = HostSettings {
            container_width: width,
            ..HostSettings::default()
        };
        Host::new(LayoutEngine::new(), &settings)
    }

    #[test]
    fn pointer_down_on_divider_starts_drag() {
        let mut host = host(1200.0);
        let frame = host.handle(PointerEvent::Down {
            x: 337.0,
            divider: None,
        });
        assert!(frame.dragging);

        let frame = host.handle(PointerEvent::Move { x: 397.0 });
        assert!((frame.proportions[0] - 33.0).abs() < 1e-9);
        assert!((frame.widths[0] - 396.0).abs() < 1e-9);

        let frame = host.handle(PointerEvent::Up);
        assert!(!frame.dragging);
    }

    #[test]
    fn pointer_down_off_divider_is_ignored() {
        let mut host = host(1200.0);
        let frame = host.handle(PointerEvent::Down {
            x: 600.0,
            divider: None,
        });
        assert!(!frame.dragging);

        let frame = host.handle(PointerEvent::Move { x: 900.0 });
        assert_eq!(frame.proportions, vec![28.0, 44.0, 28.0]);
    }

    #[test]
    fn abnormal_exits_release_the_drag() {
        for exit in [
            PointerEvent::Cancel,
            PointerEvent::CaptureLost,
            PointerEvent::Blur,
        ] {
            let mut host = host(1200.0);
            host.handle(PointerEvent::Down {
                x: 864.0,
                divider: Some(1),
            });
            assert!(!host.handle(exit).dragging);

            let frame = host.handle(PointerEvent::Move { x: 100.0 });
            assert_eq!(frame.proportions, vec![28.0, 44.0, 28.0]);
        }
    }

    #[test]
    fn resize_applies_from_the_next_drag() {
        let mut host = host(1200.0);
        host.handle(PointerEvent::Down {
            x: 336.0,
            divider: Some(0),
        });
        host.handle(PointerEvent::Resize { width: 600.0 });
        let frame = host.handle(PointerEvent::Move { x: 396.0 });
        assert!((frame.proportions[0] - 33.0).abs() < 1e-9);
        host.handle(PointerEvent::Up);

        host.handle(PointerEvent::Down {
            x: 198.0,
            divider: Some(0),
        });
        let gesture = host.layout().active_gesture().unwrap();
        assert_eq!(gesture.container_width(), 600.0);
    }

    #[test]
    fn bad_resize_keeps_previous_width() {
        let mut host = host(1200.0);
        host.handle(PointerEvent::Resize { width: -1.0 });
        assert_eq!(host.container_width(), 1200.0);
    }

    #[test]
    fn unmount_releases_open_drag() {
        let mut host = host(1200.0);
        assert!(!host.unmount());
        host.handle(PointerEvent::Down {
            x: 336.0,
            divider: Some(0),
        });
        assert!(host.unmount());
        assert!(!host.layout().is_dragging());
    }
}
