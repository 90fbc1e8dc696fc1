//! Output Rendering
//!
//! Helpers shared by commands for text and JSON output.

use std::io::Write;
use std::path::Path;

use treecascade::config::ConfigWarning;
use treecascade::ui::theme::Glyphs;
use treecascade::{RowView, TreeCascade};

pub fn print_config_warnings(path: &Path, warnings: &[ConfigWarning], glyphs: &Glyphs) {
    let mut err = std::io::stderr().lock();
    let _ = write_config_warnings(&mut err, path, warnings, glyphs);
}

fn write_config_warnings<W: Write>(
    out: &mut W,
    path: &Path,
    warnings: &[ConfigWarning],
    glyphs: &Glyphs,
) -> std::io::Result<()> {
    for w in warnings {
        if let Some(line) = w.line {
            writeln!(
                out,
                "{} Unknown config key '{}' in {}:{}",
                glyphs.warning(),
                w.key,
                path.display(),
                line
            )?;
        } else {
            writeln!(
                out,
                "{} Unknown config key '{}' in {}",
                glyphs.warning(),
                w.key,
                path.display()
            )?;
        }

        if let Some(suggestion) = &w.suggestion {
            writeln!(out, "   Did you mean '{}'?\n", suggestion)?;
        }
    }
    Ok(())
}

/// Write one JSON value as a single NDJSON line
pub fn write_event<W: Write>(out: &mut W, value: &serde_json::Value) -> std::io::Result<()> {
    writeln!(out, "{}", value)
}

pub fn row_json(row: &RowView<'_>) -> serde_json::Value {
    serde_json::json!({
        "id": row.id,
        "name": row.label,
        "type": row.kind,
        "depth": row.depth,
        "visible": row.visible,
        "toggler": row.toggler,
        "checkbox": row.checkbox.map(|b| b.state),
        "enabled": row.checkbox.is_some_and(|b| b.enabled),
    })
}

/// Closing summary of an engine session
pub fn summary_json<S: treecascade::RenderSink>(
    engine: &TreeCascade<S>,
    command: &str,
    events: usize,
) -> serde_json::Value {
    serde_json::json!({
        "event": "summary",
        "command": command,
        "events": events,
        "nodes": engine.len(),
        "visible": engine.visible_rows().len(),
        "checked": engine.checked_nodes(&[]),
    })
}
