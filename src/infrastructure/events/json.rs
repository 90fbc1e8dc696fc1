//! JSON Render Sink
//!
//! Outputs render intents as NDJSON for hosts and scripts.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::ports::{RenderIntent, RenderSink};

/// Render sink that outputs NDJSON lines
pub struct JsonRenderSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonRenderSink {
    /// Create a new JSON render sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON render sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    /// Write an arbitrary line, used for the closing summary
    pub fn write_value(&self, value: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", value);
            let _ = writer.flush();
        }
    }
}

impl RenderSink for JsonRenderSink {
    fn on_intent(&self, intent: RenderIntent) {
        let json = match intent {
            RenderIntent::RowVisibility { id, visible } => {
                serde_json::json!({
                    "event": "row_visibility",
                    "id": id,
                    "visible": visible,
                })
            }

            RenderIntent::Toggler { id, state } => {
                serde_json::json!({
                    "event": "toggler",
                    "id": id,
                    "state": state,
                })
            }

            RenderIntent::Checkbox { id, state } => {
                serde_json::json!({
                    "event": "checkbox",
                    "id": id,
                    "state": state,
                })
            }
        };

        self.write_value(json);
    }
}
