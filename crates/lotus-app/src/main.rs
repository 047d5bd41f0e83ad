// ABOUTME: Main application entry point.
// ABOUTME: Loads config, replays a pointer trace through the layout, and prints the result.

mod args;
mod host;
mod trace;

use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use args::Args;
use host::Host;
use lotus_core::{Config, PaneRole};
use lotus_layout::LayoutEngine;

fn load_config(args: &Args) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load_or_default(),
    };
    if let Some(width) = args.width {
        config.host.container_width = width;
    }
    config
        .host
        .validate()
        .context("checking host settings")?;
    Ok(config)
}

fn print_summary(host: &Host, out: &mut impl Write) -> Result<()> {
    let layout = host.layout();
    for span in layout.pane_spans(host.container_width()) {
        let title = PaneRole::from_index(span.index)
            .map(|role| role.title())
            .unwrap_or("Pane");
        writeln!(
            out,
            "{:<16} {:>6.2}% {:>8.1}px at {:>7.1}",
            title,
            layout.proportions()[span.index],
            span.width,
            span.x
        )?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Starting lotus-layout");

    let config = load_config(&args)?;
    tracing::info!(
        "Layout {:?} with {}px floor in a {}px container",
        config.layout.proportions,
        config.layout.min_pane_width,
        config.host.container_width
    );

    let layout = LayoutEngine::from_config(&config.layout)?;
    let mut host = Host::new(layout, &config.host);

    let events = trace::load_trace(args.trace_path().map(|p| p.as_path()))?;
    tracing::info!("Replaying {} events", events.len());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for event in events {
        let frame = host.handle(event);
        if !args.summary {
            serde_json::to_writer(&mut out, &frame)?;
            writeln!(out)?;
        }
    }
    host.unmount();

    if args.summary {
        print_summary(&host, &mut out)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_with_config(extra: &[&str]) -> (tempfile::TempDir, Args) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        Config::default().save(&path).unwrap();

        let mut argv = vec!["lotus-layout", "--config", path.to_str().unwrap()];
        argv.extend_from_slice(extra);
        (dir, Args::parse_from(argv))
    }

    #[test]
    fn width_override_replaces_configured_width() {
        let (_dir, args) = args_with_config(&["--width=900"]);
        let config = load_config(&args).unwrap();
        assert_eq!(config.host.container_width, 900.0);
    }

    #[test]
    fn unusable_width_override_is_rejected() {
        for width in ["--width=0", "--width=-50", "--width=NaN"] {
            let (_dir, args) = args_with_config(&[width]);
            assert!(load_config(&args).is_err(), "accepted width {width}");
        }
    }
}
