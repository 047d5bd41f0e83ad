// ABOUTME: Pane roles for the three-column research view.
// ABOUTME: Names each region and divider, and holds the default layout constants.

use serde::{Deserialize, Serialize};

/// Default pane proportions in percent: terms, query/studies, maps
pub const DEFAULT_PROPORTIONS: [f64; 3] = [28.0, 44.0, 28.0];

/// Minimum pixel width of any pane
pub const DEFAULT_MIN_PANE_WIDTH: f64 = 240.0;

/// What a pane hosts, left to right
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaneRole {
    /// Term search and picking
    Terms,
    /// Query builder stacked over the studies table
    Query,
    /// Brain activation map viewer
    Maps,
}

impl PaneRole {
    pub fn all() -> &'static [PaneRole] {
        &[PaneRole::Terms, PaneRole::Query, PaneRole::Maps]
    }

    /// Role of the pane at `index`, if the default layout has one there
    pub fn from_index(index: usize) -> Option<PaneRole> {
        Self::all().get(index).copied()
    }

    pub fn index(&self) -> usize {
        match self {
            PaneRole::Terms => 0,
            PaneRole::Query => 1,
            PaneRole::Maps => 2,
        }
    }

    /// Card title shown above the pane
    pub fn title(&self) -> &'static str {
        match self {
            PaneRole::Terms => "Terms",
            PaneRole::Query => "Query & Studies",
            PaneRole::Maps => "Brain Maps",
        }
    }

    /// Accessible label of the divider on this pane's right edge
    pub fn divider_label(&self) -> Option<&'static str> {
        match self {
            PaneRole::Terms => Some("Resize left/middle"),
            PaneRole::Query => Some("Resize middle/right"),
            PaneRole::Maps => None,
        }
    }
}
