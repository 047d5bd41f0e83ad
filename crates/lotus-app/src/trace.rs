// ABOUTME: Pointer-event traces recorded from the hosting view.
// ABOUTME: One JSON object per line; blank lines and '#' comments are skipped.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// One host pointer or window event
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PointerEvent {
    /// Pointer pressed; hit-tested against dividers unless `divider` is given
    Down {
        x: f64,
        #[serde(default)]
        divider: Option<usize>,
    },
    Move {
        x: f64,
    },
    Up,
    Cancel,
    CaptureLost,
    Blur,
    /// Container reflowed to a new width
    Resize {
        width: f64,
    },
}

impl PointerEvent {
    pub fn name(&self) -> &'static str {
        match self {
            PointerEvent::Down { .. } => "down",
            PointerEvent::Move { .. } => "move",
            PointerEvent::Up => "up",
            PointerEvent::Cancel => "cancel",
            PointerEvent::CaptureLost => "capture_lost",
            PointerEvent::Blur => "blur",
            PointerEvent::Resize { .. } => "resize",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TraceError {
    #[error("Failed to read trace: {0}")]
    Io(#[from] std::io::Error),

    #[error("Bad event on line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Read a trace from `path`, or stdin when `path` is `None`
pub fn load_trace(path: Option<&Path>) -> Result<Vec<PointerEvent>, TraceError> {
    let source = match path {
        Some(path) => std::fs::read_to_string(path)?,
        None => std::io::read_to_string(std::io::stdin())?,
    };
    parse_trace(&source)
}

pub fn parse_trace(source: &str) -> Result<Vec<PointerEvent>, TraceError> {
    source
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with('#')
        })
        .map(|(n, line)| {
            serde_json::from_str(line).map_err(|source| TraceError::Parse {
                line: n + 1,
                source,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_event_kind() {
        let source = r#"
# drag the first divider
{"kind":"down","x":336.0}
{"kind":"down","x":10,"divider":1}
{"kind":"move","x":400}
{"kind":"up"}
{"kind":"cancel"}
{"kind":"capture_lost"}
{"kind":"blur"}
{"kind":"resize","width":900}
"#;
        let events = parse_trace(source).unwrap();
        assert_eq!(
            events,
            vec![
                PointerEvent::Down {
                    x: 336.0,
                    divider: None
                },
                PointerEvent::Down {
                    x: 10.0,
                    divider: Some(1)
                },
                PointerEvent::Move { x: 400.0 },
                PointerEvent::Up,
                PointerEvent::Cancel,
                PointerEvent::CaptureLost,
                PointerEvent::Blur,
                PointerEvent::Resize { width: 900.0 },
            ]
        );
    }

    #[test]
    fn reports_line_of_bad_event() {
        let source = "{\"kind\":\"up\"}\n\n{\"kind\":\"wiggle\"}\n";
        match parse_trace(source) {
            Err(TraceError::Parse { line, .. }) => assert_eq!(line, 3),
            other => panic!("expected parse error, got {:?}", other),
        }
    }
}
