// ABOUTME: Command-line arguments for the trace replay host.
// ABOUTME: Selects the trace, config file, container width override, and log level.

use std::path::PathBuf;

use clap::Parser;

/// Replay a pointer-event trace through the three-pane layout
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// JSON-lines trace file; reads stdin when omitted or "-"
    pub trace: Option<PathBuf>,

    /// Path to configuration file (TOML); defaults to the user config
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Container width in pixels, overriding the config
    #[arg(short, long)]
    pub width: Option<f64>,

    /// Print a final pane table instead of one JSON line per event
    #[arg(long)]
    pub summary: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// Trace path, or `None` for stdin
    pub fn trace_path(&self) -> Option<&PathBuf> {
        self.trace.as_ref().filter(|p| p.as_os_str() != "-")
    }
}
