// ABOUTME: Shared types and configuration for the LoTUS-BF pane layout.
// ABOUTME: Defines pane roles, layout defaults, and config file handling.

pub mod config;
pub mod pane;

pub use config::{Config, ConfigError, HostSettings, LayoutConfig};
pub use pane::{PaneRole, DEFAULT_MIN_PANE_WIDTH, DEFAULT_PROPORTIONS};
